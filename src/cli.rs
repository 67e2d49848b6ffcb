use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use skybox_slicer::skybox::layout::Layout;

/// Slices a cubemap skybox texture into six face images (Left, Front, Right, Back, Top, Bottom)
///
/// Any option that is not given is asked for interactively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the skybox texture
    #[arg(short, long)]
    pub texture: Option<PathBuf>,

    /// Edge length in pixels of each square face
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub face_size: Option<i64>,

    /// Directory the face images are written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Arrangement of the faces in the texture
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Extension of the written faces, defaults to the extension of the texture
    #[arg(short, long)]
    pub format: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write a JSON report of the run to the given path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LayoutArg {
    /// Top face above and bottom face below the front face
    Front,
    /// Top face above and bottom face below the right face
    Right,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Front => Layout::TopBottomFront,
            LayoutArg::Right => Layout::TopBottomRight,
        }
    }
}
