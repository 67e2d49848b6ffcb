use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::args::Args;
use crate::prompt::Prompter;
use crate::report::RunReport;
use crate::resource::texture::file::FileSystemTexture;
use crate::skybox::extract::{extract, ExtractionReport};
use crate::skybox::job::Job;
use crate::skybox::layout::Layout;
use crate::skybox::region::FaceSize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    CollectingInput,
    Confirming,
    Extracting,
    Completed,
    Failed,
    Aborted,
}

#[derive(Debug)]
pub enum Outcome {
    Completed {
        report: ExtractionReport,
        elapsed: Duration,
    },
    Failed {
        report: ExtractionReport,
        elapsed: Duration,
    },
    Aborted,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }

    /// Process exit status: 0 only when all six faces were written.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Completed { .. } => 0,
            Outcome::Failed { .. } | Outcome::Aborted => 1,
        }
    }
}

pub struct App {
    args: Args,
    state: RunState,
}

impl App {
    pub fn new(args: Args) -> Self {
        Self {
            args,
            state: RunState::CollectingInput,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn run(&mut self, prompter: &mut impl Prompter) -> Result<Outcome> {
        let job = self.collect_input(prompter)?;

        self.transition(RunState::Confirming);
        if !self.confirm(&job, prompter)? {
            self.transition(RunState::Aborted);
            prompter.message("Aborting process...")?;
            return Ok(Outcome::Aborted);
        }

        self.transition(RunState::Extracting);
        let started = Instant::now();
        let spinner = Self::create_spinner();

        let report = extract(&job, &FileSystemTexture::new(job.source()));
        let elapsed = started.elapsed();
        spinner.finish_and_clear();

        if let Some(report_path) = &self.args.report {
            if let Err(error) = RunReport::new(&job, &report, elapsed).write_to(report_path) {
                log::error!(
                    "Unable to write the run report {}: {error:#}",
                    report_path.display()
                );
                prompter.message(&format!(
                    "Could not write the run report to {}: {error:#}",
                    report_path.display()
                ))?;
            }
        }

        if report.is_success() {
            self.transition(RunState::Completed);
            prompter.message(&format!(
                "Success! Saved image faces at {} in {:.2?}",
                job.output_dir().display(),
                elapsed
            ))?;
            Ok(Outcome::Completed { report, elapsed })
        } else {
            self.transition(RunState::Failed);
            prompter.message("Failed to process skybox!")?;
            for (face, error) in report.failures() {
                prompter.message(&format!("  • {face}: {error}"))?;
            }
            Ok(Outcome::Failed { report, elapsed })
        }
    }

    fn transition(&mut self, state: RunState) {
        log::debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn collect_input(&self, prompter: &mut impl Prompter) -> Result<Job> {
        let texture = match &self.args.texture {
            Some(texture) => texture.clone(),
            None => PathBuf::from(prompter.text("Select the texture path:")?),
        };

        let face_size = match self.args.face_size {
            Some(face_size) => FaceSize::new(face_size)?,
            None => prompter.text("Select face size:")?.parse::<FaceSize>()?,
        };

        let output_dir = match &self.args.output_dir {
            Some(output_dir) => output_dir.clone(),
            None => PathBuf::from(prompter.text("Select the save directory:")?),
        };

        let layout = match &self.args.layout {
            Some(layout) => layout.clone(),
            None => {
                let descriptions = Layout::ALL.map(Layout::description);
                let index = prompter.choice("Select the texture layout:", &descriptions)?;
                Layout::ALL[index].id().to_string()
            }
        };

        Ok(Job::new(
            texture,
            face_size,
            output_dir,
            &layout,
            self.args.format.as_deref(),
        )?)
    }

    fn confirm(&self, job: &Job, prompter: &mut impl Prompter) -> Result<bool> {
        prompter.message("Processing image with following parameters:")?;
        prompter.message(&format!("• Path: {}", job.source().display()))?;
        prompter.message(&format!("• Face size: {}", job.face_size()))?;
        prompter.message(&format!("• Save directory: {}", job.output_dir().display()))?;
        prompter.message(&format!(
            "• Layout: {} ({})",
            job.layout(),
            job.layout().description()
        ))?;

        if self.args.assume_yes {
            return Ok(true);
        }

        prompter.confirm("Confirm all parameters are correct?")
    }

    fn create_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            spinner.set_style(style);
        }
        spinner.set_message("Processing, do not interrupt...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}
