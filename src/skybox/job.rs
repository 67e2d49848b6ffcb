use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::skybox::layout::Layout;
use crate::skybox::region::{CropRegion, FaceSize};
use crate::skybox::Face;

const DEFAULT_EXTENSION: &str = "png";

/// Everything needed to slice one texture, validated up front.
#[derive(Clone, Debug)]
pub struct Job {
    source: PathBuf,
    face_size: FaceSize,
    output_dir: PathBuf,
    layout: Layout,
    extension: String,
}

impl Job {
    /// Validates the layout identifier and output format.
    ///
    /// Without an explicit `format` the faces are written with the extension of the source
    /// texture, falling back to png when the source has none.
    pub fn new(
        source: PathBuf,
        face_size: FaceSize,
        output_dir: PathBuf,
        layout_id: &str,
        format: Option<&str>,
    ) -> Result<Self, Error> {
        let layout = layout_id.parse::<Layout>()?;

        let extension = match format {
            Some(format) => format.trim_start_matches('.').to_ascii_lowercase(),
            None => source
                .extension()
                .and_then(|extension| extension.to_str())
                .map(|extension| extension.to_ascii_lowercase())
                .unwrap_or_else(|| String::from(DEFAULT_EXTENSION)),
        };

        match image::ImageFormat::from_extension(&extension) {
            Some(image_format) if image_format.writing_enabled() => {}
            _ => return Err(Error::UnsupportedFormat(extension)),
        }

        Ok(Self {
            source,
            face_size,
            output_dir,
            layout,
            extension,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn face_size(&self) -> FaceSize {
        self.face_size
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn regions(&self) -> [(Face, CropRegion); 6] {
        let regions = self.face_size.regions(&self.layout.cells());
        std::array::from_fn(|index| (Face::ALL[index], regions[index]))
    }

    pub fn output_path(&self, face: Face) -> PathBuf {
        self.output_dir
            .join(face.name())
            .with_extension(&self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(source: &str, format: Option<&str>) -> Result<Job, Error> {
        Job::new(
            PathBuf::from(source),
            FaceSize::new(128).unwrap(),
            PathBuf::from("out"),
            "right",
            format,
        )
    }

    #[test]
    fn extension_follows_source() {
        assert_eq!(job("sky.JPG", None).unwrap().extension(), "jpg");
        assert_eq!(job("textures/sky", None).unwrap().extension(), "png");
    }

    #[test]
    fn format_overrides_source_extension() {
        assert_eq!(job("sky.jpg", Some(".PNG")).unwrap().extension(), "png");
    }

    #[test]
    fn unsupported_format_is_rejected() {
        assert_eq!(
            job("sky.jpg", Some("xyz")).unwrap_err(),
            Error::UnsupportedFormat(String::from("xyz"))
        );
    }

    #[test]
    fn unknown_layout_is_rejected() {
        let face_size = FaceSize::new(16).unwrap();
        assert!(matches!(
            Job::new(PathBuf::from("a.png"), face_size, PathBuf::from("out"), "up", None),
            Err(Error::UnknownLayout(_))
        ));
    }

    #[test]
    fn regions_are_paired_with_faces_in_order() {
        let job = job("sky.png", None).unwrap();
        let regions = job.regions();

        assert_eq!(regions.map(|(face, _)| face), Face::ALL);
        assert_eq!(
            regions[4].1,
            CropRegion {
                left: 256,
                top: 0,
                width: 128,
                height: 128
            }
        );
    }

    #[test]
    fn output_paths_use_face_names() {
        let job = job("sky.png", None).unwrap();
        assert_eq!(
            job.output_path(Face::Top),
            Path::new("out").join("Top.png")
        );
    }
}
