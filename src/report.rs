use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::skybox::extract::ExtractionReport;
use crate::skybox::job::Job;
use crate::skybox::region::CropRegion;
use crate::skybox::Face;

#[derive(Serialize, Debug)]
pub struct RunReport<'a> {
    pub source: &'a Path,
    pub output_dir: &'a Path,
    pub layout: &'static str,
    pub face_size: u32,
    pub elapsed_ms: u128,
    pub success: bool,
    pub faces: Vec<FaceReport<'a>>,
}

#[derive(Serialize, Debug)]
pub struct FaceReport<'a> {
    pub face: Face,
    pub region: CropRegion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> RunReport<'a> {
    pub fn new(job: &'a Job, report: &'a ExtractionReport, elapsed: Duration) -> Self {
        Self {
            source: job.source(),
            output_dir: job.output_dir(),
            layout: job.layout().id(),
            face_size: job.face_size().get(),
            elapsed_ms: elapsed.as_millis(),
            success: report.is_success(),
            faces: report
                .faces()
                .iter()
                .map(|extraction| FaceReport {
                    face: extraction.face,
                    region: extraction.region,
                    path: extraction.result.as_ref().ok(),
                    error: extraction
                        .result
                        .as_ref()
                        .err()
                        .map(|error| error.to_string()),
                })
                .collect(),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        log::info!("Run report written to {}", path.display());
        Ok(())
    }
}
