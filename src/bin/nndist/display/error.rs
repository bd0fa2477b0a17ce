use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    use nndist::io::{Error as IoError, Format};

    let Some(io_err) = err.chain().find_map(|e| e.downcast_ref::<IoError>()) else {
        return fallback_hints(err);
    };

    let mut hints = Vec::new();
    match io_err {
        IoError::NotFound { path, source } => {
            if source.kind() == std::io::ErrorKind::PermissionDenied {
                hints.push("Permission denied accessing the path".to_string());
                hints.push("Check permissions with `ls -la`".to_string());
            } else {
                hints.push(format!("'{}' does not exist", path.display()));
                hints.push("Check the path spelling and ensure it exists".to_string());
            }
        }

        IoError::Io { source, .. } => {
            hints.extend(std_io_hints(source).iter().map(|s| s.to_string()));
        }

        IoError::Parse {
            format: Format::Xyz,
            line,
            ..
        } => {
            hints.push(format!(
                "Line {line} should read `<symbol> <x> <y> <z>`"
            ));
            hints.push("The first two lines (atom count, comment) are always skipped".to_string());
            hints.push("Use --skip-invalid to leave malformed files out of the report".to_string());
        }

        IoError::Parse {
            format: Format::Csv,
            ..
        } => {
            hints.push("The report file does not match the expected CSV layout".to_string());
        }
    }
    hints
}

fn std_io_hints(source: &std::io::Error) -> &'static [&'static str] {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::PermissionDenied => &[
            "Permission denied writing the file",
            "Choose a location you can write to",
        ],
        ErrorKind::NotFound => &[
            "The destination folder does not exist",
            "Create it first or choose another output path",
        ],
        ErrorKind::InvalidData => &[
            "File contains invalid or non-UTF-8 data",
            "Verify the file is a plain-text XYZ geometry",
        ],
        ErrorKind::WriteZero => &["Failed to write data (disk full?)"],
        _ => &["Check the path and the available disk space"],
    }
}

fn fallback_hints(err: &Error) -> Vec<String> {
    let msg = err
        .chain()
        .map(|e| e.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    if msg.contains("terminal") || msg.contains("stdin") {
        return vec!["Pass DIR and --output explicitly when not running on a terminal".to_string()];
    }

    Vec::new()
}
