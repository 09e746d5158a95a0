use crate::executor::Outcome;

use super::summary::{compute_row, round3, StatRow};

/// Durations of one category, split by outcome.
///
/// `all.len() == successful.len() + failed.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    pub all: Vec<f64>,
    pub successful: Vec<f64>,
    pub failed: Vec<f64>,
}

impl Samples {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut samples = Self::default();
        for outcome in outcomes {
            let duration = round3(outcome.duration_secs);
            samples.all.push(duration);
            if outcome.success {
                samples.successful.push(duration);
            } else {
                samples.failed.push(duration);
            }
        }
        samples
    }

    /// Report rows for `category`.
    ///
    /// The "All" row is always present for a non-empty category. The
    /// "Successful"/"Failed" split only appears when something failed,
    /// and an empty side of the split is left out.
    pub fn rows(&self, category: &str) -> Vec<StatRow> {
        let mut rows = Vec::with_capacity(3);
        rows.extend(compute_row(format!("{} - All", category), &self.all));

        if !self.failed.is_empty() {
            rows.extend(compute_row(
                format!("{} - Successful", category),
                &self.successful,
            ));
            rows.extend(compute_row(format!("{} - Failed", category), &self.failed));
        }
        rows
    }
}

/// Category → outcomes, iterated in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct CategoryResults {
    entries: Vec<(String, Vec<Outcome>)>,
}

impl CategoryResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append outcomes to a category, creating it on first use.
    pub fn record(&mut self, category: &str, outcomes: Vec<Outcome>) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, existing)) => existing.extend(outcomes),
            None => self.entries.push((category.to_string(), outcomes)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[Outcome]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, outcomes)| outcomes.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.entries
            .iter()
            .map(|(name, outcomes)| (name.as_str(), outcomes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_outcomes(&self) -> usize {
        self.entries.iter().map(|(_, outcomes)| outcomes.len()).sum()
    }

    /// Statistics rows for every category, in insertion order.
    pub fn rows(&self) -> Vec<StatRow> {
        self.iter()
            .flat_map(|(category, outcomes)| Samples::from_outcomes(outcomes).rows(category))
            .collect()
    }
}
