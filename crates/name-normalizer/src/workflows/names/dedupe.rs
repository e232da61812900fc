use super::classifier::PersonRecord;
use std::collections::HashSet;

/// Collapses records equal in every field, keeping the first occurrence of each.
pub fn deduplicate(records: Vec<PersonRecord>) -> Vec<PersonRecord> {
    let mut seen: HashSet<PersonRecord> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}
