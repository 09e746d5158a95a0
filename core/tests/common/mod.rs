#![allow(dead_code)]

use csbench_core::executor::Outcome;
use csbench_core::stats::CategoryResults;

pub fn outcomes(samples: &[(bool, f64)]) -> Vec<Outcome> {
    samples
        .iter()
        .map(|&(success, duration_secs)| Outcome {
            success,
            duration_secs,
            lost: false,
        })
        .collect()
}

/// Three categories: clean domains, limits with one failure, networks all failed.
pub fn mixed_results() -> CategoryResults {
    let mut results = CategoryResults::new();
    results.record("domain", outcomes(&[(true, 0.5), (true, 0.7), (true, 1.0)]));
    results.record(
        "limits",
        outcomes(&[(true, 0.2), (false, 1.2), (true, 0.4), (true, 0.3)]),
    );
    results.record("network", outcomes(&[(false, 2.0), (false, 3.0)]));
    results
}

pub fn parse_delimited(rendered: &str, delimiter: u8) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(rendered.as_bytes());
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let records = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, records)
}
