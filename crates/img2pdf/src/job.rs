//! Conversion job model

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

/// Output name used when the caller supplies an empty string
const DEFAULT_OUTPUT_NAME: &str = "output";

/// A single source image, referenced by path.
///
/// Pixel dimensions are probed lazily when the job is processed, not when
/// the source is created, so building a job never touches the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    path: PathBuf,
}

impl ImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Probe the intrinsic pixel dimensions from the file header.
    ///
    /// This reads only the image header, not the full pixel data; the full
    /// decode happens later during page assembly.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        image::image_dimensions(&self.path).map_err(|e| ConvertError::ImageRead {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// One batch request: an ordered list of images plus an output name.
///
/// The job is immutable once constructed and is consumed by
/// [`crate::convert::run`]; pages are produced in the order the sources
/// appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionJob {
    images: Vec<ImageSource>,
    output_name: String,
}

impl ConversionJob {
    pub fn new(images: Vec<ImageSource>, output_name: impl Into<String>) -> Self {
        Self {
            images,
            output_name: output_name.into(),
        }
    }

    pub fn images(&self) -> &[ImageSource] {
        &self.images
    }

    pub fn page_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Resolve the output path: the caller's name with `.pdf` appended, or
    /// `output.pdf` when the name is empty.
    ///
    /// The suffix is appended unconditionally, so a name that already ends
    /// in `.pdf` gets a second suffix. No sanitization or collision checks
    /// happen here; an existing file is overwritten on write.
    pub fn output_path(&self) -> PathBuf {
        let name = if self.output_name.is_empty() {
            DEFAULT_OUTPUT_NAME
        } else {
            &self.output_name
        };
        PathBuf::from(format!("{name}.pdf"))
    }

    pub(crate) fn into_images(self) -> Vec<ImageSource> {
        self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_appends_suffix() {
        let job = ConversionJob::new(vec![], "holiday-photos");
        assert_eq!(job.output_path(), PathBuf::from("holiday-photos.pdf"));
    }

    #[test]
    fn test_empty_name_uses_default() {
        let job = ConversionJob::new(vec![], "");
        assert_eq!(job.output_path(), PathBuf::from("output.pdf"));
    }

    #[test]
    fn test_suffix_is_appended_blindly() {
        let job = ConversionJob::new(vec![], "photos.pdf");
        assert_eq!(job.output_path(), PathBuf::from("photos.pdf.pdf"));
    }

    #[test]
    fn test_missing_image_dimensions_error_carries_path() {
        let source = ImageSource::new("does/not/exist.png");
        let err = source.dimensions().unwrap_err();
        match err {
            ConvertError::ImageRead { path, .. } => {
                assert_eq!(path, PathBuf::from("does/not/exist.png"));
            }
            other => panic!("expected ImageRead, got {other:?}"),
        }
    }
}
