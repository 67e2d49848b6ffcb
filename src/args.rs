use std::path::PathBuf;

/// Values given up front. Anything left as `None` is asked for interactively.
#[derive(Clone, Debug, Default)]
pub struct Args {
    pub texture: Option<PathBuf>,
    pub face_size: Option<i64>,
    pub output_dir: Option<PathBuf>,
    pub layout: Option<String>,
    pub format: Option<String>,
    pub assume_yes: bool,
    pub report: Option<PathBuf>,
}
