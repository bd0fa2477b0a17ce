use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

pub struct ScanSpinner {
    bar: ProgressBar,
    start: Instant,
    files: usize,
}

impl ScanSpinner {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message("Listing folder...");

        Self {
            bar,
            start: Instant::now(),
            files: 0,
        }
    }

    pub fn file(&mut self, path: &Path) {
        self.files += 1;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        self.bar
            .set_message(format!("[{}] Measuring {}...", self.files, name));
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            format!("Scanned {} file(s)", self.files),
            self.start.elapsed().as_secs_f64()
        );
        let _ = writeln!(stderr);
    }
}

pub enum Progress {
    Interactive(ScanSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool) -> Self {
        if interactive {
            Self::Interactive(ScanSpinner::new())
        } else {
            Self::Silent
        }
    }

    pub fn file(&mut self, path: &Path) {
        if let Self::Interactive(s) = self {
            s.file(path);
        }
    }

    pub fn finish(self) {
        if let Self::Interactive(s) = self {
            s.finish();
        }
    }

    pub fn abandon(self) {
        if let Self::Interactive(s) = self {
            s.bar.finish_and_clear();
        }
    }
}
