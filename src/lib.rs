use anyhow::Result;

use crate::app::{App, Outcome};
use crate::args::Args;
use crate::prompt::terminal::TerminalPrompter;
use crate::prompt::Prompter;

pub mod app;
pub mod args;
pub mod error;
pub mod prompt;
mod report;
pub mod resource;
pub mod skybox;

const BANNER: &str = "\
+-------------------------+
|   Skybox Beautifier     |
+-------------------------+
Slices a skybox texture into its six cube faces.";

pub fn run(args: Args) -> Result<Outcome> {
    env_logger::init();

    let mut prompter = TerminalPrompter::stdio();
    prompter.message(BANNER)?;

    App::new(args).run(&mut prompter)
}
