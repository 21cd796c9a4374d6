//! Series Aligner Module
//! Places per-entity metric values onto the canonical time axis.

use crate::data::Record;
use crate::series::TimeAxis;
use std::collections::HashMap;

/// A named subject whose per-year values form one series.
///
/// Entities come from a fixed configuration list, not from the data; an
/// entity with no matching records aligns to an all-missing series.
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    pattern: String,
    by_substring: bool,
}

impl Entity {
    /// Match records whose entity field equals `name` exactly.
    pub fn exact(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            pattern: name.clone(),
            name,
            by_substring: false,
        }
    }

    /// Match records whose entity field contains `pattern` (the source data
    /// uses longer legal names like "Corporación Favorita C.A.").
    pub fn contains(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            by_substring: true,
        }
    }

    /// Match every record: for single-subject datasets where the file has no
    /// entity column and alignment is by year alone.
    pub fn any() -> Self {
        Self {
            name: String::new(),
            pattern: String::new(),
            by_substring: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, raw: &str) -> bool {
        if self.by_substring {
            raw.contains(&self.pattern)
        } else {
            raw.trim() == self.pattern
        }
    }
}

/// Aligns records onto a time axis for a fixed entity/year column layout.
///
/// Tie-break policy: when several records share an (entity, year) pair, the
/// first in parse order wins. The year index below is built with
/// `or_insert`, which keeps the first occurrence, so lookups behave exactly
/// like a linear scan-with-first-match at O(1) per slot.
pub struct SeriesAligner<'a> {
    records: &'a [Record],
    entity_idx: usize,
    year_idx: usize,
}

impl<'a> SeriesAligner<'a> {
    pub fn new(records: &'a [Record], entity_idx: usize, year_idx: usize) -> Self {
        Self {
            records,
            entity_idx,
            year_idx,
        }
    }

    /// One value slot per axis entry for `entity`; a slot is missing when no
    /// record matches or the metric field does not parse as a number.
    pub fn align(&self, entity: &Entity, value_idx: usize, axis: &TimeAxis) -> Vec<Option<f64>> {
        let mut by_year: HashMap<i32, &Record> = HashMap::new();
        for record in self.records {
            if !entity.matches(record.text(self.entity_idx)) {
                continue;
            }
            if let Some(year) = record.year(self.year_idx) {
                by_year.entry(year).or_insert(record);
            }
        }

        axis.years()
            .iter()
            .map(|year| by_year.get(year).and_then(|r| r.number(value_idx)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RowParser;

    fn records(text: &str) -> Vec<Record> {
        RowParser::new(3).parse(text)
    }

    #[test]
    fn aligned_length_matches_axis_even_when_entity_is_absent() {
        let rows = records("year,name,v\n2020,A,1\n2021,A,2\n");
        let axis = TimeAxis::range(2019, 2022);
        let aligner = SeriesAligner::new(&rows, 1, 0);
        let ghost = aligner.align(&Entity::exact("Nobody"), 2, &axis);
        assert_eq!(ghost.len(), 4);
        assert!(ghost.iter().all(Option::is_none));
    }

    #[test]
    fn gaps_stay_missing_not_zero() {
        let rows = records("year,name,v\n2020,A,10\n2022,A,30\n");
        let axis = TimeAxis::range(2020, 2022);
        let aligner = SeriesAligner::new(&rows, 1, 0);
        let series = aligner.align(&Entity::exact("A"), 2, &axis);
        assert_eq!(series, vec![Some(10.0), None, Some(30.0)]);
    }

    #[test]
    fn first_record_wins_on_duplicate_year() {
        let rows = records("year,name,v\n2020,A,10\n2020,A,99\n");
        let axis = TimeAxis::range(2020, 2020);
        let aligner = SeriesAligner::new(&rows, 1, 0);
        let series = aligner.align(&Entity::exact("A"), 2, &axis);
        assert_eq!(series, vec![Some(10.0)]);
    }

    #[test]
    fn substring_entities_match_long_names() {
        let rows = records("year,name,v\n2020,Corporación Favorita C.A.,5\n");
        let axis = TimeAxis::range(2020, 2020);
        let aligner = SeriesAligner::new(&rows, 1, 0);
        let series = aligner.align(&Entity::contains("Favorita", "Favorita"), 2, &axis);
        assert_eq!(series, vec![Some(5.0)]);
    }

    #[test]
    fn bad_metric_field_is_a_gap() {
        let rows = records("year,name,v\n2020,A,n/a\n2021,A,7\n");
        let axis = TimeAxis::range(2020, 2021);
        let aligner = SeriesAligner::new(&rows, 1, 0);
        let series = aligner.align(&Entity::exact("A"), 2, &axis);
        assert_eq!(series, vec![None, Some(7.0)]);
    }
}
