use std::path::Path;

use crate::error::Error;

pub mod file;

pub trait TextureSource {
    fn path(&self) -> &Path;
    fn load(&self) -> Result<image::DynamicImage, Error>;
}
