use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(PathBuf),
    Cancelled,
}

/// Source of the input folder and the report destination.
pub trait PathSelector {
    fn select_directory(&mut self) -> Result<Selection>;
    fn select_save_file(&mut self) -> Result<Selection>;
}

/// Paths given on the command line or through the environment, falling back
/// to another selector for whichever one is missing.
pub struct ArgSelector {
    directory: Option<PathBuf>,
    output: Option<PathBuf>,
    fallback: Option<Box<dyn PathSelector>>,
}

impl ArgSelector {
    pub fn new(directory: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            directory,
            output,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl PathSelector + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }
}

impl PathSelector for ArgSelector {
    fn select_directory(&mut self) -> Result<Selection> {
        match (self.directory.take(), self.fallback.as_mut()) {
            (Some(dir), _) => Ok(Selection::Chosen(dir)),
            (None, Some(fallback)) => fallback.select_directory(),
            (None, None) => Ok(Selection::Cancelled),
        }
    }

    fn select_save_file(&mut self) -> Result<Selection> {
        match (self.output.take(), self.fallback.as_mut()) {
            (Some(path), _) => Ok(Selection::Chosen(path)),
            (None, Some(fallback)) => fallback.select_save_file(),
            (None, None) => Ok(Selection::Cancelled),
        }
    }
}

/// Asks for each path on a terminal. An empty answer or end of input cancels.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl PromptSelector<io::StdinLock<'static>, io::Stderr> {
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<Selection> {
        write!(self.output, "  {prompt} (leave empty to cancel): ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read answer from terminal")?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(Selection::Cancelled)
        } else {
            Ok(Selection::Chosen(PathBuf::from(answer)))
        }
    }
}

impl<R: BufRead, W: Write> PathSelector for PromptSelector<R, W> {
    fn select_directory(&mut self) -> Result<Selection> {
        self.ask("Folder with XYZ files")
    }

    fn select_save_file(&mut self) -> Result<Selection> {
        self.ask("Save CSV as")
    }
}
