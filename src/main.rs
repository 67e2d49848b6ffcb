use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use skybox_slicer::args::Args;
use skybox_slicer::run;
use skybox_slicer::skybox::layout::Layout;

mod cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(Args {
        texture: cli.texture,
        face_size: cli.face_size,
        output_dir: cli.output,
        layout: cli
            .layout
            .map(|layout| Layout::from(layout).id().to_string()),
        format: cli.format,
        assume_yes: cli.yes,
        report: cli.report,
    });

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_status()),
        Err(error) => {
            log::error!("{error:#}");
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
