use std::io::{self, Write};
use std::path::Path;

use nndist::{Report, ScanConfig};
use nndist::io::csv::writer::format_distance;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_LISTED_ROWS: usize = 15;

pub fn print_scan_summary(dir: &Path, config: &ScanConfig, report: &Report) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Folder", dir.display().to_string()),
        ("Files Scanned", format!("{}", report.scanned)),
        (
            "Files Reported",
            format!("{} (≥ 2 {} atoms)", report.row_count(), config.target),
        ),
    ];

    if !report.skipped.is_empty() {
        rows.push(("Files Skipped", format!("{}", report.skipped.len())));
    }

    if let Some(closest) = report.closest() {
        rows.push(("Closest File", closest.file.clone()));
        rows.push(("Closest (Å)", format!("{:.4}", closest.distance)));
    }

    print_kv_table(&mut out, "Scan Summary", &rows);
}

pub fn print_report_rows(report: &Report) {
    if report.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let pair_w = 11usize;
    let dist_w = 20usize;
    let sep_overhead = 8;
    let file_w = SAFE_TABLE_WIDTH.saturating_sub(pair_w + dist_w + sep_overhead);

    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{INDENT}{l}{}{m}{}{m}{}{r}",
            "─".repeat(file_w + 2),
            "─".repeat(pair_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, "Per-File Minimum");
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<file_w$} │ {:>pair_w$} │ {:>dist_w$} │",
        "File", "Atoms", "Distance (Å)"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for row in report.rows.iter().take(MAX_LISTED_ROWS) {
        let pair = format!("{}–{}", row.pair.0 + 1, row.pair.1 + 1);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<file_w$} │ {:>pair_w$} │ {:>dist_w$} │",
            truncate(&row.file, file_w),
            truncate(&pair, pair_w),
            truncate(&format_distance(row.distance), dist_w)
        );
    }

    if report.row_count() > MAX_LISTED_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<file_w$} │ {:>pair_w$} │ {:>dist_w$} │",
            format!("({} more files)", report.row_count() - MAX_LISTED_ROWS),
            "...",
            "..."
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(out);
}
