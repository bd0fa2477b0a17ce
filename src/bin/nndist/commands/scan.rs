use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use nndist::io::write_report;
use nndist::{Report, Scanner};

use crate::cli::ScanOptions;
use crate::config::build_scan_config;
use crate::display::{
    Context as DisplayContext, Progress, print_notice, print_report_rows, print_scan_summary,
};
use crate::io::{PathSelector, Selection};
use crate::util::path::with_default_extension;

const REPORT_EXTENSION: &str = "csv";

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    FolderCancelled,
    NothingFound,
    OutputCancelled,
    Written(std::path::PathBuf),
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::FolderCancelled => "Folder selection canceled.".to_string(),
            Outcome::NothingFound => "No XYZ files found in the specified folder.".to_string(),
            Outcome::OutputCancelled => "CSV file selection canceled.".to_string(),
            Outcome::Written(path) => {
                format!("CSV file '{}' generated successfully.", path.display())
            }
        }
    }
}

pub fn run_scan(
    opts: &ScanOptions,
    selector: &mut dyn PathSelector,
    ctx: DisplayContext,
) -> Result<Outcome> {
    let config = build_scan_config(opts);
    if config.target.is_empty() {
        bail!("--element must name an element symbol");
    }

    let Selection::Chosen(dir) = selector.select_directory()? else {
        return finish(Outcome::FolderCancelled);
    };

    let scanner = Scanner::new(config);
    let report = scan(&scanner, &dir, ctx)?;

    if ctx.interactive {
        print_scan_summary(&dir, scanner.config(), &report);
        print_report_rows(&report);
    }

    if report.is_empty() {
        return finish(Outcome::NothingFound);
    }

    let Selection::Chosen(output) = selector.select_save_file()? else {
        return finish(Outcome::OutputCancelled);
    };
    let output = with_default_extension(&output, REPORT_EXTENSION);

    write_report(&output, &report)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;
    info!("wrote {} row(s) to '{}'", report.row_count(), output.display());

    finish(Outcome::Written(output))
}

fn scan(scanner: &Scanner, dir: &Path, ctx: DisplayContext) -> Result<Report> {
    let mut progress = Progress::new(ctx.interactive);

    match scanner.scan_with(dir, |path| progress.file(path)) {
        Ok(report) => {
            progress.finish();
            Ok(report)
        }
        Err(err) => {
            progress.abandon();
            Err(err).with_context(|| format!("Failed to scan folder: {}", dir.display()))
        }
    }
}

fn finish(outcome: Outcome) -> Result<Outcome> {
    print_notice(&outcome.message());
    Ok(outcome)
}
