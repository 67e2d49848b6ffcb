use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use rayon::prelude::*;

use crate::error::Error;
use crate::resource::texture::TextureSource;
use crate::skybox::job::Job;
use crate::skybox::region::CropRegion;
use crate::skybox::Face;

#[derive(Debug)]
pub struct FaceExtraction {
    pub face: Face,
    pub region: CropRegion,
    pub result: Result<PathBuf, Error>,
}

/// Outcome of all six faces, in `Face::ALL` order.
#[derive(Debug)]
pub struct ExtractionReport {
    faces: Vec<FaceExtraction>,
}

impl ExtractionReport {
    pub fn faces(&self) -> &[FaceExtraction] {
        &self.faces
    }

    pub fn is_success(&self) -> bool {
        self.faces.iter().all(|face| face.result.is_ok())
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.faces
            .iter()
            .filter_map(|face| face.result.as_ref().ok().map(PathBuf::as_path))
    }

    pub fn failures(&self) -> impl Iterator<Item = (Face, &Error)> {
        self.faces
            .iter()
            .filter_map(|face| face.result.as_ref().err().map(|error| (face.face, error)))
    }
}

/// Crops every face of the job out of `source` and writes it to the output directory.
///
/// The faces are extracted in parallel. A failing face does not stop the others; every face
/// gets an entry in the returned report.
pub fn extract(job: &Job, source: &impl TextureSource) -> ExtractionReport {
    let regions = job.regions();

    if let Err(error) = std::fs::create_dir_all(job.output_dir()) {
        log::warn!(
            "Unable to create the output directory {}: {error}",
            job.output_dir().display()
        );
    }

    let image = match source.load() {
        Ok(image) => image,
        Err(error) => {
            log::error!("{error}");
            return ExtractionReport {
                faces: regions
                    .iter()
                    .map(|&(face, region)| FaceExtraction {
                        face,
                        region,
                        result: Err(error.clone()),
                    })
                    .collect(),
            };
        }
    };

    log::debug!(
        "Decoded {} ({}x{})",
        source.path().display(),
        image.width(),
        image.height()
    );

    let faces = regions
        .par_iter()
        .map(|&(face, region)| {
            let result = extract_face(&image, region, &job.output_path(face));

            match &result {
                Ok(path) => log::info!("{face} ({region}) written to {}", path.display()),
                Err(error) => log::warn!("{face} ({region}) failed: {error}"),
            }

            FaceExtraction {
                face,
                region,
                result,
            }
        })
        .collect();

    ExtractionReport { faces }
}

fn extract_face(image: &DynamicImage, region: CropRegion, path: &Path) -> Result<PathBuf, Error> {
    if !region.fits_within(image.width(), image.height()) {
        return Err(Error::RegionOutOfBounds {
            region,
            width: image.width(),
            height: image.height(),
        });
    }

    let face = image.crop_imm(region.left, region.top, region.width, region.height);

    // Encoders only accept some color types.
    let face = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgb8(face.to_rgb8()),
        Ok(ImageFormat::Hdr) => DynamicImage::ImageRgb32F(face.to_rgb32f()),
        _ => match face {
            DynamicImage::ImageRgb32F(_) => DynamicImage::ImageRgb8(face.to_rgb8()),
            DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba8(face.to_rgba8()),
            _ => face,
        },
    };

    face.save(path).map_err(|error| Error::WriteFailure {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;

    Ok(path.to_path_buf())
}
