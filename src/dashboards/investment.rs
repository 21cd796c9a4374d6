//! Communications investment dashboard (sector VAB vs foreign direct
//! investment). The two CSVs are fetched in parallel; either failure aborts
//! the whole load.

use crate::charts::plotter::PRIMARY;
use crate::charts::{ChartSpec, Rgb, SeriesStyle};
use crate::config::DataSources;
use crate::data::{DataFetcher, RowParser};
use crate::series::{ops, Entity, SeriesAligner, TimeAxis};
use crate::series::Slots;

pub const VAB_FILE: &str = "VAB(millones_dolares).csv";
pub const INVESTMENT_FILE: &str = "inversion_directa(miles_dolares).csv";

const MIN_FIELDS: usize = 3;
const COL_YEAR: usize = 1;
const COL_VALUE: usize = 2;

const FIRST_YEAR: i32 = 2000;
const LAST_YEAR: i32 = 2025;
const GROWTH_BASE_YEAR: i32 = 2023;
const GROWTH_TARGET_YEAR: i32 = 2025;

const TEAL: Rgb = Rgb(13, 148, 136);

/// Year-over-base growth of the investment series, for the badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthBadge {
    pub year: i32,
    pub percent: f64,
}

pub struct InvestmentDashboard {
    pub chart: ChartSpec,
    pub badge: Option<GrowthBadge>,
}

impl InvestmentDashboard {
    pub fn load(fetcher: &DataFetcher, sources: &DataSources) -> anyhow::Result<Self> {
        let (vab_text, inv_text) = fetcher.fetch_pair(
            &sources.url_for(VAB_FILE),
            &sources.url_for(INVESTMENT_FILE),
        )?;
        Ok(Self::from_csv(&vab_text, &inv_text))
    }

    pub fn from_csv(vab_text: &str, inv_text: &str) -> Self {
        let vab_records = RowParser::new(MIN_FIELDS).parse(vab_text);
        let inv_records = RowParser::new(MIN_FIELDS).parse(inv_text);
        let axis = TimeAxis::range(FIRST_YEAR, LAST_YEAR);

        let vab = SeriesAligner::new(&vab_records, 0, COL_YEAR).align(
            &Entity::any(),
            COL_VALUE,
            &axis,
        );
        // Investment is published in thousands; scale to millions.
        let inv_raw = SeriesAligner::new(&inv_records, 0, COL_YEAR).align(
            &Entity::any(),
            COL_VALUE,
            &axis,
        );
        let inv = ops::scale(&inv_raw, 1.0 / 1000.0);

        let badge = growth_badge(&inv, &axis);

        let mut chart =
            ChartSpec::new("Communications VAB & FDI", axis.labels()).with_y_label("$ millions");
        chart.push_series("VAB ($M)", vab, SeriesStyle::line(PRIMARY));
        chart.push_series("Foreign investment ($M)", inv, SeriesStyle::bar(TEAL));

        Self { chart, badge }
    }
}

/// Growth of the target year vs the base year; absent when either slot is
/// missing (no badge rather than a made-up number).
fn growth_badge(inv: &Slots, axis: &TimeAxis) -> Option<GrowthBadge> {
    let base = axis.position(GROWTH_BASE_YEAR).and_then(|i| inv[i])?;
    let target = axis.position(GROWTH_TARGET_YEAR).and_then(|i| inv[i])?;
    if base == 0.0 {
        return None;
    }
    Some(GrowthBadge {
        year: GROWTH_TARGET_YEAR,
        percent: (target - base) / base.abs() * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAB: &str = "id,anio,valor\n1,2000,1500\n2,2001,1600\n3,2023,2200\n";
    const INV: &str = "id,anio,valor\n1,2000,50000\n2,2023,80000\n3,2025,60000\n";

    #[test]
    fn axis_is_the_fixed_range_with_gaps() {
        let dash = InvestmentDashboard::from_csv(VAB, INV);
        assert_eq!(dash.chart.axis_labels.len(), 26);
        let vab = &dash.chart.series[0].values;
        assert_eq!(vab[0], Some(1500.0));
        assert_eq!(vab[2], None); // 2002 absent from the file
    }

    #[test]
    fn investment_is_scaled_from_thousands_to_millions() {
        let dash = InvestmentDashboard::from_csv(VAB, INV);
        let inv = &dash.chart.series[1].values;
        assert_eq!(inv[0], Some(50.0));
    }

    #[test]
    fn badge_compares_2025_against_2023() {
        let dash = InvestmentDashboard::from_csv(VAB, INV);
        let badge = dash.badge.unwrap();
        assert_eq!(badge.year, 2025);
        assert!((badge.percent - (-25.0)).abs() < 1e-9);
    }

    #[test]
    fn badge_is_absent_when_a_year_is_missing() {
        let inv = "id,anio,valor\n1,2023,80000\n";
        let dash = InvestmentDashboard::from_csv(VAB, inv);
        assert!(dash.badge.is_none());
    }
}
