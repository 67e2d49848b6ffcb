use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::resource::texture::TextureSource;

pub struct FileSystemTexture {
    pub path: PathBuf,
}

impl FileSystemTexture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextureSource for FileSystemTexture {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<image::DynamicImage, Error> {
        if !self.path.is_file() {
            return Err(Error::SourceUnreadable {
                path: self.path.clone(),
                reason: String::from("The given path is not a file"),
            });
        }

        image::open(&self.path).map_err(|error| Error::SourceUnreadable {
            path: self.path.clone(),
            reason: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let texture = FileSystemTexture::new(dir.path().join("missing.png"));

        assert!(matches!(
            texture.load(),
            Err(Error::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let texture = FileSystemTexture::new(dir.path());

        assert!(matches!(
            texture.load(),
            Err(Error::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn garbage_bytes_are_unreadable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sky.png");
        std::fs::write(&path, b"not an image").expect("write");

        match FileSystemTexture::new(&path).load() {
            Err(Error::SourceUnreadable { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn png_is_decoded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sky.png");
        image::RgbaImage::new(8, 6).save(&path).expect("save");

        let loaded = FileSystemTexture::new(&path).load().expect("load");
        assert_eq!((loaded.width(), loaded.height()), (8, 6));
    }
}
