mod common;

use common::{mixed_results, parse_delimited};
use csbench_core::report::{deliver, render_report, Delivery, ReportFormat, COLUMNS};
use pretty_assertions::assert_eq;

#[test]
fn csv_report_reads_back_with_fixed_columns() {
    let rows = mixed_results().rows();
    let rendered = render_report(&rows, ReportFormat::Csv).unwrap();
    let (header, records) = parse_delimited(&rendered, b',');

    assert_eq!(
        header,
        COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>()
    );
    let labels: Vec<&str> = records.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "domain - All",
            "limits - All",
            "limits - Successful",
            "limits - Failed",
            "network - All",
            "network - Failed",
        ]
    );

    let domain = &records[0];
    assert_eq!(domain[1], "3");
    assert_eq!(domain[2], "0.500");
    assert_eq!(domain[3], "1.000");
    assert_eq!(domain[4], "0.733");
    assert_eq!(domain[5], "0.700");
}

#[test]
fn counts_add_up_per_category() {
    let rows = mixed_results().rows();
    let rendered = render_report(&rows, ReportFormat::Tsv).unwrap();
    let (_, records) = parse_delimited(&rendered, b'\t');

    let count = |label: &str| -> usize {
        records
            .iter()
            .find(|r| r[0] == label)
            .map(|r| r[1].parse().unwrap())
            .unwrap()
    };
    assert_eq!(
        count("limits - All"),
        count("limits - Successful") + count("limits - Failed")
    );
    assert_eq!(count("network - All"), count("network - Failed"));
}

#[test]
fn csv_and_table_agree_on_rows_and_columns() {
    let rows = mixed_results().rows();
    let (csv_header, csv_records) =
        parse_delimited(&render_report(&rows, ReportFormat::Csv).unwrap(), b',');
    let table = render_report(&rows, ReportFormat::Table).unwrap();

    let table_lines: Vec<Vec<String>> = table
        .lines()
        .filter(|l| l.starts_with('|'))
        .map(|l| {
            l.trim_matches('|')
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();

    assert!(table.lines().next().unwrap().starts_with('+'));
    assert_eq!(table_lines[0], csv_header);
    assert_eq!(&table_lines[1..], csv_records.as_slice());
}

#[test]
fn file_mirror_matches_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let rendered = render_report(&mixed_results().rows(), ReportFormat::Csv).unwrap();

    let mut stdout = Vec::new();
    let delivery = deliver(&rendered, &mut stdout, Some(&path)).unwrap();

    assert_eq!(delivery, Delivery::Mirrored(path.clone()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), rendered);
    assert_eq!(String::from_utf8(stdout).unwrap(), rendered);
}

#[test]
fn unwritable_destination_falls_back_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.txt");
    let rendered = render_report(&mixed_results().rows(), ReportFormat::Table).unwrap();

    let mut stdout = Vec::new();
    let delivery = deliver(&rendered, &mut stdout, Some(&path)).unwrap();

    assert_eq!(delivery, Delivery::StdoutOnly);
    assert_eq!(String::from_utf8(stdout).unwrap(), rendered);
    assert!(!path.exists());
}
