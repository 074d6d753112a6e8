use crate::domain::price_registry::{FilterField, PriceRecord};
use std::collections::BTreeSet;

/// Domain service for deriving filter views over a loaded record set
#[derive(Debug, Clone, Default)]
pub struct RecordQueryService;

impl RecordQueryService {
    pub fn new() -> Self {
        Self
    }

    /// Distinct non-empty values of a field, sorted ascending
    ///
    /// This is what the selector option lists are rebuilt from after every
    /// successful fetch.
    pub fn distinct_values(&self, records: &[PriceRecord], field: FilterField) -> Vec<String> {
        records
            .iter()
            .filter_map(|record| record.filter_value(field))
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Exact-match narrowing by establishment type; an empty value keeps
    /// the whole set
    pub fn narrow_by_establishment(&self, records: &[PriceRecord], tipo: &str) -> Vec<PriceRecord> {
        if tipo.is_empty() {
            return records.to_vec();
        }
        records.iter().filter(|record| record.matches_establishment(tipo)).cloned().collect()
    }
}
