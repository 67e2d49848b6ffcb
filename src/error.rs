use std::path::PathBuf;

use crate::skybox::region::CropRegion;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("The given layout identifier is not known: {0}")]
    UnknownLayout(String),

    #[error("The face size must be a positive integer: {0}")]
    InvalidFaceSize(String),

    #[error("The source image could not be read ({}): {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("The crop region {region} exceeds the source image dimensions ({width}x{height})")]
    RegionOutOfBounds {
        region: CropRegion,
        width: u32,
        height: u32,
    },

    #[error("The face image could not be written ({}): {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    #[error("No image encoder is available for the extension: {0}")]
    UnsupportedFormat(String),
}
