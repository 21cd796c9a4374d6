//! Canonical time axis shared by every series in one chart.

use crate::data::Record;

/// Ordered, discrete time keys (years). Every aligned or derived series has
/// exactly one slot per axis entry, in axis order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    years: Vec<i32>,
}

impl TimeAxis {
    /// Sorted distinct years observed across the parsed records.
    pub fn from_records(records: &[Record], year_idx: usize) -> Self {
        let mut years: Vec<i32> = records.iter().filter_map(|r| r.year(year_idx)).collect();
        years.sort_unstable();
        years.dedup();
        Self { years }
    }

    /// Fixed externally-supplied range, inclusive on both ends.
    pub fn range(first: i32, last: i32) -> Self {
        Self {
            years: (first..=last).collect(),
        }
    }

    /// Drop axis entries before `min_year`.
    pub fn since(mut self, min_year: i32) -> Self {
        self.years.retain(|&y| y >= min_year);
        self
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn last(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Display strings for the presentation layer.
    pub fn labels(&self) -> Vec<String> {
        self.years.iter().map(|y| y.to_string()).collect()
    }

    pub fn position(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|&y| y == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RowParser;

    #[test]
    fn observed_years_are_distinct_and_sorted() {
        let text = "id,year\n1,2021\n2,2019\n3,2021\n4,2020\n";
        let records = RowParser::new(2).parse(text);
        let axis = TimeAxis::from_records(&records, 1);
        assert_eq!(axis.years(), &[2019, 2020, 2021]);
    }

    #[test]
    fn fixed_range_is_inclusive() {
        let axis = TimeAxis::range(2000, 2003);
        assert_eq!(axis.years(), &[2000, 2001, 2002, 2003]);
        assert_eq!(axis.labels(), vec!["2000", "2001", "2002", "2003"]);
    }

    #[test]
    fn since_filters_early_years() {
        let axis = TimeAxis::range(2014, 2018).since(2016);
        assert_eq!(axis.years(), &[2016, 2017, 2018]);
    }

    #[test]
    fn unparsable_years_are_ignored() {
        let text = "id,year\n1,2020\n2,unknown\n";
        let records = RowParser::new(2).parse(text);
        let axis = TimeAxis::from_records(&records, 1);
        assert_eq!(axis.years(), &[2020]);
    }
}
