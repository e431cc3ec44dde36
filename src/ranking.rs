use std::cmp::Reverse;

use crate::error::Result;
use crate::models::{NormalizedVacancy, VacancyRecord};

/// All records from every source, highest salary first.
#[derive(Debug, Clone, Default)]
pub struct RankedCollection {
    records: Vec<VacancyRecord>,
}

impl RankedCollection {
    /// Concatenate the batches in the order given, wrap each vacancy and sort.
    pub fn merge<I>(batches: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<NormalizedVacancy>>,
    {
        let records = batches
            .into_iter()
            .flatten()
            .map(VacancyRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(mut records: Vec<VacancyRecord>) -> Self {
        // sort_by_key is stable, ties keep concatenation order
        records.sort_by_key(|r| Reverse(r.rank_salary()));
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VacancyRecord] {
        &self.records
    }

    /// The first `floor(len / 2)` records. Callers over-fetch from each
    /// platform and present only this half.
    pub fn top_half(&self) -> &[VacancyRecord] {
        &self.records[..self.records.len() / 2]
    }
}
