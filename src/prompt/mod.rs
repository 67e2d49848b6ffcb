use anyhow::Result;

pub mod terminal;

pub trait Prompter {
    fn text(&mut self, message: &str) -> Result<String>;
    /// Returns the index of the selected entry in `choices`.
    fn choice(&mut self, message: &str, choices: &[&str]) -> Result<usize>;
    fn confirm(&mut self, message: &str) -> Result<bool>;
    fn message(&mut self, message: &str) -> Result<()>;
}
