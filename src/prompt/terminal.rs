use std::io::{BufRead, Write};

use anyhow::Result;

use crate::prompt::Prompter;

pub struct TerminalPrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "The input was closed before an answer was given",
            )
            .into());
        }

        Ok(line.trim().to_string())
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "? {message} ")?;
        self.output.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn text(&mut self, message: &str) -> Result<String> {
        loop {
            let answer = self.ask(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    fn choice(&mut self, message: &str, choices: &[&str]) -> Result<usize> {
        if choices.is_empty() {
            anyhow::bail!("No choices were given for: {message}");
        }

        writeln!(self.output, "? {message}")?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {choice}", index + 1)?;
        }

        loop {
            let answer = self.ask(&format!("Enter a number (1-{}):", choices.len()))?;

            match answer.parse::<usize>() {
                Ok(number) if (1..=choices.len()).contains(&number) => return Ok(number - 1),
                _ => writeln!(self.output, "  Please pick one of the listed numbers.")?,
            }
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{message} (Y/n)"))?;

            match answer.to_ascii_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "  Please answer yes or no.")?,
            }
        }
    }

    fn message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> TerminalPrompter<&[u8], Vec<u8>> {
        TerminalPrompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn text_skips_blank_answers() {
        let mut prompter = prompter("\n  \nsky.png\n");
        assert_eq!(prompter.text("Texture path:").unwrap(), "sky.png");
    }

    #[test]
    fn choice_reprompts_until_valid() {
        let mut prompter = prompter("0\nthree\n2\n");
        assert_eq!(prompter.choice("Layout:", &["a", "b"]).unwrap(), 1);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("  1) a"));
        assert!(output.contains("  2) b"));
        assert_eq!(output.matches("Please pick").count(), 2);
    }

    #[test]
    fn confirm_defaults_to_yes() {
        assert!(prompter("\n").confirm("Go?").unwrap());
        assert!(prompter("YES\n").confirm("Go?").unwrap());
        assert!(!prompter("maybe\nn\n").confirm("Go?").unwrap());
    }

    #[test]
    fn closed_input_is_an_error() {
        let error = prompter("").text("Texture path:").unwrap_err();
        let io_error = error.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_error.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
