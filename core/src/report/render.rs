use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::error::ReportError;
use crate::stats::StatRow;

use super::format::ReportFormat;

/// Report columns, in output order
pub const COLUMNS: [&str; 9] = [
    "Type",
    "Count",
    "Min",
    "Max",
    "Avg",
    "Median",
    "90th percentile",
    "95th percentile",
    "99th percentile",
];

pub fn render_report(rows: &[StatRow], format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Csv => render_delimited(rows, b','),
        ReportFormat::Tsv => render_delimited(rows, b'\t'),
        ReportFormat::Table => Ok(render_table(rows)),
    }
}

fn cells(row: &StatRow) -> [String; 9] {
    [
        row.label.clone(),
        row.count.to_string(),
        format!("{:.3}", row.min),
        format!("{:.3}", row.max),
        format!("{:.3}", row.mean),
        format!("{:.3}", row.median),
        format!("{:.3}", row.p90),
        format!("{:.3}", row.p95),
        format!("{:.3}", row.p99),
    ]
}

fn render_delimited(rows: &[StatRow], delimiter: u8) -> Result<String, ReportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.write_record(cells(row))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Type")]
    label: String,
    #[tabled(rename = "Count")]
    count: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Avg")]
    mean: String,
    #[tabled(rename = "Median")]
    median: String,
    #[tabled(rename = "90th percentile")]
    p90: String,
    #[tabled(rename = "95th percentile")]
    p95: String,
    #[tabled(rename = "99th percentile")]
    p99: String,
}

impl From<&StatRow> for TableRow {
    fn from(row: &StatRow) -> Self {
        let [label, count, min, max, mean, median, p90, p95, p99] = cells(row);
        Self {
            label,
            count,
            min,
            max,
            mean,
            median,
            p90,
            p95,
            p99,
        }
    }
}

fn render_table(rows: &[StatRow]) -> String {
    let mut table = Table::new(rows.iter().map(TableRow::from));
    // Type is text, every other column is numeric
    table
        .with(Style::ascii())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_row;
    use pretty_assertions::assert_eq;

    fn domain_rows() -> Vec<StatRow> {
        vec![
            compute_row("domain - All", &[0.501, 0.499, 1.2]).unwrap(),
            compute_row("domain - Successful", &[0.501, 0.499]).unwrap(),
            compute_row("domain - Failed", &[1.2]).unwrap(),
        ]
    }

    #[test]
    fn test_csv_output() {
        let rendered = render_report(&domain_rows()[2..], ReportFormat::Csv).unwrap();
        assert_eq!(
            rendered,
            "Type,Count,Min,Max,Avg,Median,90th percentile,95th percentile,99th percentile\n\
             domain - Failed,1,1.200,1.200,1.200,1.200,1.200,1.200,1.200\n"
        );
    }

    #[test]
    fn test_tsv_uses_tabs() {
        let rendered = render_report(&domain_rows(), ReportFormat::Tsv).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].split('\t').count(), COLUMNS.len());
        assert!(lines[1].starts_with("domain - All\t3\t0.499\t1.200\t0.733\t"));
    }

    #[test]
    fn test_csv_quotes_labels_with_delimiters() {
        let row = compute_row("vm, large - All", &[1.0]).unwrap();
        let rendered = render_report(&[row], ReportFormat::Csv).unwrap();
        assert!(rendered.lines().nth(1).unwrap().starts_with("\"vm, large - All\",1,"));
    }

    #[test]
    fn test_table_is_aligned() {
        let rendered = render_report(&domain_rows(), ReportFormat::Table).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        let width = lines[0].len();
        assert!(lines[0].starts_with('+'));
        assert!(lines.iter().all(|l| l.len() == width));
        assert!(lines[1].starts_with("| Type                |"));

        let body: Vec<&str> = lines[2..]
            .iter()
            .copied()
            .filter(|l| l.starts_with('|'))
            .collect();
        assert_eq!(body.len(), 3);
        assert!(body[0].starts_with("| domain - All        |     3 | 0.499 | 1.200 | 0.733 |"));
        assert!(body[2].starts_with("| domain - Failed     |     1 | 1.200 |"));
    }

    #[test]
    fn test_table_without_rows_has_header_only() {
        let rendered = render_report(&[], ReportFormat::Table).unwrap();
        let header: Vec<&str> = rendered.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(header.len(), 1);
        for title in COLUMNS {
            assert!(header[0].contains(title));
        }
    }
}
