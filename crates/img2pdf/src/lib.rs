pub mod convert;
mod error;
mod geometry;
mod job;
mod layout;
mod pdf;

pub use convert::run;
pub use error::{ConvertError, Result};
pub use geometry::{PageGeometry, mm_to_pt, pt_to_mm};
pub use job::{ConversionJob, ImageSource};
pub use layout::{InvalidDimensions, Placement, compute_placement};
pub use pdf::assemble_pdf_bytes;
