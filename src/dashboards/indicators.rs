//! Digital-government indicators dashboard (EGDI / EPI by country).
//! One line per country plus a derived regional average; a metric selector
//! switches between the two indices and rebuilds the chart.

use crate::charts::plotter::{AMBER, PRIMARY, SKY, SLATE, VIOLET};
use crate::charts::{ChartSpec, SeriesStyle};
use crate::config::DataSources;
use crate::data::{DataFetcher, Record, RowParser};
use crate::series::{ops, Entity, SeriesAligner, TimeAxis};

pub const FILE: &str = "EGDI_EPI.csv";

const MIN_FIELDS: usize = 5;
const COL_YEAR: usize = 1;
const COL_COUNTRY: usize = 2;
const COL_EGDI: usize = 3;
const COL_EPI: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorMetric {
    Egdi,
    Epi,
}

impl IndicatorMetric {
    pub const ALL: [IndicatorMetric; 2] = [IndicatorMetric::Egdi, IndicatorMetric::Epi];

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorMetric::Egdi => "EGDI",
            IndicatorMetric::Epi => "EPI",
        }
    }

    fn column(&self) -> usize {
        match self {
            IndicatorMetric::Egdi => COL_EGDI,
            IndicatorMetric::Epi => COL_EPI,
        }
    }
}

pub struct IndicatorsDashboard {
    records: Vec<Record>,
    axis: TimeAxis,
    pub metric: IndicatorMetric,
    pub chart: ChartSpec,
}

impl IndicatorsDashboard {
    pub fn load(fetcher: &DataFetcher, sources: &DataSources) -> anyhow::Result<Self> {
        let text = fetcher.fetch_text(&sources.url_for(FILE))?;
        Ok(Self::from_csv(&text))
    }

    pub fn from_csv(text: &str) -> Self {
        let records = RowParser::new(MIN_FIELDS).parse(text);
        let axis = TimeAxis::from_records(&records, COL_YEAR);
        let mut dashboard = Self {
            records,
            axis,
            metric: IndicatorMetric::Egdi,
            chart: ChartSpec::new("", Vec::new()),
        };
        dashboard.rebuild();
        dashboard
    }

    /// Selector change: re-runs the aggregator and replaces the chart.
    pub fn set_metric(&mut self, metric: IndicatorMetric) {
        if metric != self.metric {
            self.metric = metric;
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let aligner = SeriesAligner::new(&self.records, COL_COUNTRY, COL_YEAR);
        let col = self.metric.column();

        let ecuador = aligner.align(&Entity::exact("Ecuador"), col, &self.axis);
        let colombia = aligner.align(&Entity::exact("Colombia"), col, &self.axis);
        let argentina = aligner.align(&Entity::exact("Argentina"), col, &self.axis);
        let sweden = aligner.align(&Entity::exact("Suecia"), col, &self.axis);
        let regional = ops::mean(&[&ecuador, &colombia, &argentina]);

        let mut chart = ChartSpec::new(
            format!("{} by country", self.metric.label()),
            self.axis.labels(),
        )
        .with_y_label("Index (0-1)");
        // Series order is the stable legend index contract.
        chart.push_series("Ecuador", ecuador, SeriesStyle::line(PRIMARY).filled());
        chart.push_series("Colombia", colombia, SeriesStyle::line(AMBER));
        chart.push_series("Argentina", argentina, SeriesStyle::line(SKY));
        chart.push_series("Suecia", sweden, SeriesStyle::line(VIOLET));
        chart.push_series("Regional Avg", regional, SeriesStyle::line(SLATE).dashed());

        self.chart = chart;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,anio,pais,egdi,epi
1,2020,Ecuador,0.7,0.6
2,2020,Colombia,0.8,0.7
3,2022,Ecuador,0.75,0.65
4,2022,Colombia,0.82,0.72
5,2022,Argentina,0.78,0.7
6,2022,Suecia,0.95,0.9
";

    #[test]
    fn builds_five_series_over_observed_years() {
        let dash = IndicatorsDashboard::from_csv(CSV);
        assert_eq!(dash.chart.axis_labels, vec!["2020", "2022"]);
        assert_eq!(dash.chart.series.len(), 5);
        for series in &dash.chart.series {
            assert_eq!(series.values.len(), 2);
        }
    }

    #[test]
    fn regional_average_uses_only_present_countries() {
        let dash = IndicatorsDashboard::from_csv(CSV);
        let regional = &dash.chart.series[4].values;
        // 2020: Argentina absent, mean of Ecuador and Colombia.
        assert_eq!(regional[0], Some((0.7 + 0.8) / 2.0));
        assert_eq!(regional[1], Some((0.75 + 0.82 + 0.78) / 3.0));
    }

    #[test]
    fn metric_selector_replaces_the_chart() {
        let mut dash = IndicatorsDashboard::from_csv(CSV);
        dash.set_metric(IndicatorMetric::Epi);
        assert_eq!(dash.chart.title, "EPI by country");
        assert_eq!(dash.chart.series[0].values[0], Some(0.6));
    }
}
