use std::fs;
use std::path::Path;

use nndist::io::{self, Error};
use nndist::{ErrorPolicy, ExtensionCase, ScanConfig, Scanner, distance, scan_directory};
use tempfile::TempDir;

fn write_xyz(dir: &Path, name: &str, atoms: &[(&str, [f64; 3])]) {
    let mut body = format!("{}\ngenerated for {name}\n", atoms.len());
    for (symbol, [x, y, z]) in atoms {
        body.push_str(&format!("{symbol} {x} {y} {z}\n"));
    }
    fs::write(dir.join(name), body).expect("write xyz fixture");
}

fn scratch() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

#[test]
fn two_nitrogens_and_a_carbon() {
    let tmp = scratch();
    write_xyz(
        tmp.path(),
        "mol.xyz",
        &[
            ("N", [0.0, 0.0, 0.0]),
            ("N", [0.0, 0.0, 3.0]),
            ("C", [1.0, 1.0, 1.0]),
        ],
    );

    let report = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(report.row_count(), 1);
    assert_eq!(report.rows[0].file, "mol.xyz");
    assert_eq!(report.rows[0].distance, 3.0);
    assert_eq!(report.rows[0].pair, (0, 1));
}

#[test]
fn single_nitrogen_file_is_left_out() {
    let tmp = scratch();
    write_xyz(tmp.path(), "lonely.xyz", &[("N", [0.0, 0.0, 0.0]), ("O", [0.0, 0.0, 1.2])]);
    write_xyz(tmp.path(), "pair.xyz", &[("N", [0.0, 0.0, 0.0]), ("N", [1.1, 0.0, 0.0])]);

    let report = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(report.scanned, 2);
    assert!(report.rows.iter().all(|r| r.file != "lonely.xyz"));
    assert_eq!(report.rows[0].file, "pair.xyz");
}

#[test]
fn four_nitrogens_report_minimum_of_all_pairs() {
    let tmp = scratch();
    let nitrogens = [
        [0.0, 0.0, 0.0],
        [2.5, 0.3, -1.0],
        [-1.2, 3.3, 0.7],
        [2.0, 1.1, -0.4],
    ];
    let mut atoms: Vec<(&str, [f64; 3])> = nitrogens.iter().map(|&p| ("N", p)).collect();
    atoms.insert(2, ("H", [2.2, 0.7, -0.7]));
    write_xyz(tmp.path(), "four.xyz", &atoms);

    let mut expected = f64::INFINITY;
    for i in 0..4 {
        for j in i + 1..4 {
            expected = expected.min(distance(nitrogens[i], nitrogens[j]));
        }
    }

    let report = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(report.rows[0].distance, expected);
}

#[test]
fn empty_directory_gives_empty_report() {
    let tmp = scratch();
    fs::write(tmp.path().join("notes.txt"), "N 0 0 0\nN 0 0 1\n").unwrap();

    let report = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.scanned, 0);
}

#[test]
fn malformed_line_aborts_scan() {
    let tmp = scratch();
    write_xyz(tmp.path(), "a_good.xyz", &[("N", [0.0, 0.0, 0.0]), ("N", [0.0, 0.0, 1.0])]);
    fs::write(tmp.path().join("b_bad.xyz"), "2\n\nN 0 0 0\nN 0 0\n").unwrap();

    let err = scan_directory(tmp.path(), &ScanConfig::default()).unwrap_err();
    match err {
        Error::Parse { path, line, .. } => {
            assert_eq!(line, 4);
            assert_eq!(path.as_deref(), Some(tmp.path().join("b_bad.xyz").as_path()));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn lowercase_nitrogen_symbol_counts() {
    let tmp = scratch();
    write_xyz(tmp.path(), "mixed.xyz", &[("n", [0.0, 0.0, 0.0]), ("N", [0.0, 2.0, 0.0])]);

    let report = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(report.rows[0].distance, 2.0);
}

#[test]
fn rows_follow_file_name_order() {
    let tmp = scratch();
    for name in ["c.xyz", "a.xyz", "b.xyz"] {
        write_xyz(tmp.path(), name, &[("N", [0.0, 0.0, 0.0]), ("N", [0.0, 0.0, 1.0])]);
    }

    let report = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    let names: Vec<_> = report.rows.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(names, ["a.xyz", "b.xyz", "c.xyz"]);
}

#[test]
fn extension_case_and_directories() {
    let tmp = scratch();
    let pair = [("N", [0.0, 0.0, 0.0]), ("N", [0.0, 0.0, 1.0])];
    write_xyz(tmp.path(), "upper.XYZ", &pair);
    write_xyz(tmp.path(), "lower.xyz", &pair);
    fs::create_dir(tmp.path().join("folder.xyz")).unwrap();

    let sensitive = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(sensitive.scanned, 1);
    assert_eq!(sensitive.rows[0].file, "lower.xyz");

    let insensitive = ScanConfig {
        extension_case: ExtensionCase::Insensitive,
        ..ScanConfig::default()
    };
    let report = scan_directory(tmp.path(), &insensitive).unwrap();
    let names: Vec<_> = report.rows.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(names, ["lower.xyz", "upper.XYZ"]);
}

#[test]
fn skip_policy_records_bad_files_and_continues() {
    let tmp = scratch();
    write_xyz(tmp.path(), "good.xyz", &[("N", [0.0, 0.0, 0.0]), ("N", [0.0, 0.0, 1.5])]);
    fs::write(tmp.path().join("bad.xyz"), "1\n\nN zero 0 0\n").unwrap();

    let config = ScanConfig {
        on_error: ErrorPolicy::Skip,
        ..ScanConfig::default()
    };
    let mut seen = Vec::new();
    let report = Scanner::new(config)
        .scan_with(tmp.path(), |p| seen.push(p.to_path_buf()))
        .unwrap();

    assert_eq!(seen.len(), 2);
    assert_eq!(report.scanned, 2);
    assert_eq!(report.row_count(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].file, "bad.xyz");
    assert!(report.skipped[0].reason.contains("invalid x coordinate"));
}

#[test]
fn missing_directory_is_not_found() {
    let tmp = scratch();
    let err = scan_directory(&tmp.path().join("absent"), &ScanConfig::default()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn written_report_reads_back() {
    let tmp = scratch();
    let input = tmp.path().join("input");
    fs::create_dir(&input).unwrap();
    write_xyz(&input, "one, two.xyz", &[("N", [0.1, 0.2, 0.3]), ("N", [1.7, -0.4, 2.9])]);
    write_xyz(&input, "three.xyz", &[("N", [0.0, 0.0, 0.0]), ("N", [1.0, 1.0, 1.0])]);

    let report = scan_directory(&input, &ScanConfig::default()).unwrap();
    let output = tmp.path().join("report.csv");
    io::write_report(&output, &report).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("XYZ_File,Lowest_N-N_Distance\r\n"));
    assert!(text.contains("\"one, two.xyz\","));

    let rows = io::read_report(&output).unwrap();
    let expected: Vec<_> = report
        .rows
        .iter()
        .map(|r| (r.file.clone(), r.distance))
        .collect();
    assert_eq!(rows, expected);
}

#[test]
fn writing_overwrites_existing_report() {
    let tmp = scratch();
    let output = tmp.path().join("report.csv");
    fs::write(&output, "stale contents that are longer than the new report\n").unwrap();

    io::write_report(&output, &nndist::Report::new()).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "XYZ_File,Lowest_N-N_Distance\r\n"
    );
}

#[test]
fn non_utf8_comment_line_does_not_stop_scan() {
    let tmp = scratch();
    fs::write(
        tmp.path().join("mol.xyz"),
        b"2\nbond length 1.4 \xC5\nN 0 0 0\nN 0 0 3\n",
    )
    .unwrap();

    let report = scan_directory(tmp.path(), &ScanConfig::default()).unwrap();
    assert_eq!(report.row_count(), 1);
    assert_eq!(report.rows[0].distance, 3.0);
}

#[test]
fn skip_policy_covers_non_utf8_atom_line() {
    let tmp = scratch();
    write_xyz(tmp.path(), "good.xyz", &[("N", [0.0, 0.0, 0.0]), ("N", [0.0, 0.0, 2.0])]);
    fs::write(tmp.path().join("latin1.xyz"), b"1\n\nN\xC5 0 0 0\n").unwrap();

    let strict = scan_directory(tmp.path(), &ScanConfig::default()).unwrap_err();
    assert!(strict.is_parse());

    let config = ScanConfig {
        on_error: ErrorPolicy::Skip,
        ..ScanConfig::default()
    };
    let report = scan_directory(tmp.path(), &config).unwrap();
    assert_eq!(report.row_count(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].file, "latin1.xyz");
}
