//! Service trade balance dashboard (credit vs debit by sector).
//! The sector selector picks which column pair feeds the bar chart.

use crate::charts::plotter::{EMERALD, ROSE};
use crate::charts::{ChartSpec, SeriesStyle};
use crate::config::DataSources;
use crate::data::{DataFetcher, Record, RowParser};
use crate::series::{Entity, SeriesAligner, TimeAxis};

pub const FILE: &str = "servicios_exportacion(millones_dolares).csv";

const MIN_FIELDS: usize = 11;
const COL_YEAR: usize = 1;
// Early years are sparse; the chart starts where the data gets dense.
const FIRST_YEAR: i32 = 2016;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    It,
    Telecom,
    Information,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::It, Sector::Telecom, Sector::Information];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::It => "IT services",
            Sector::Telecom => "Telecommunications",
            Sector::Information => "Information services",
        }
    }

    fn credit_col(&self) -> usize {
        match self {
            Sector::Telecom => 3,
            Sector::It => 6,
            Sector::Information => 9,
        }
    }

    fn debit_col(&self) -> usize {
        self.credit_col() + 1
    }

    pub fn conclusion(&self) -> &'static str {
        match self {
            Sector::It => {
                "Strong external dependence in software: technology exports (credit) \
                 are trying to take off, but imports (debit) of IT services and \
                 licenses remain far larger year after year."
            }
            Sector::Telecom => {
                "Telecommunications shows the opposite structure: the country earns \
                 more (credit) than it pays abroad (debit) for network services, \
                 reflecting a more consolidated local infrastructure."
            }
            Sector::Information => {
                "Information services is the smallest sector, with a steady deficit \
                 driven by consumption of foreign databases and platforms over the \
                 local offer."
            }
        }
    }
}

pub struct TradeDashboard {
    records: Vec<Record>,
    axis: TimeAxis,
    pub sector: Sector,
    pub chart: ChartSpec,
}

impl TradeDashboard {
    pub fn load(fetcher: &DataFetcher, sources: &DataSources) -> anyhow::Result<Self> {
        let text = fetcher.fetch_text(&sources.url_for(FILE))?;
        Ok(Self::from_csv(&text))
    }

    pub fn from_csv(text: &str) -> Self {
        let records = RowParser::new(MIN_FIELDS).parse(text);
        let axis = TimeAxis::from_records(&records, COL_YEAR).since(FIRST_YEAR);
        let mut dashboard = Self {
            records,
            axis,
            sector: Sector::It,
            chart: ChartSpec::new("", Vec::new()),
        };
        dashboard.rebuild();
        dashboard
    }

    /// Selector change: rebuilds the credit/debit chart for the new sector.
    pub fn set_sector(&mut self, sector: Sector) {
        if sector != self.sector {
            self.sector = sector;
            self.rebuild();
        }
    }

    pub fn conclusion(&self) -> &'static str {
        self.sector.conclusion()
    }

    fn rebuild(&mut self) {
        // Single-subject file: no entity column, alignment is by year alone.
        let aligner = SeriesAligner::new(&self.records, 0, COL_YEAR);
        let credit = aligner.align(&Entity::any(), self.sector.credit_col(), &self.axis);
        let debit = aligner.align(&Entity::any(), self.sector.debit_col(), &self.axis);

        let mut chart =
            ChartSpec::new(self.sector.label(), self.axis.labels()).with_y_label("$ millions");
        chart.push_series("Credit (exports)", credit, SeriesStyle::bar(EMERALD));
        chart.push_series("Debit (imports)", debit, SeriesStyle::bar(ROSE));
        self.chart = chart;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,anio,label,tc,td,x,ic,id2,y,nc,nd
1,2015,a,1,2,.,10,20,.,100,200
2,2016,a,3,4,.,30,40,.,300,400
3,2017,a,5,6,.,50,60,.,500,600
";

    #[test]
    fn axis_starts_at_2016() {
        let dash = TradeDashboard::from_csv(CSV);
        assert_eq!(dash.chart.axis_labels, vec!["2016", "2017"]);
    }

    #[test]
    fn default_sector_is_it_with_credit_and_debit_bars() {
        let dash = TradeDashboard::from_csv(CSV);
        assert_eq!(dash.chart.series.len(), 2);
        assert_eq!(dash.chart.series[0].values, vec![Some(30.0), Some(50.0)]);
        assert_eq!(dash.chart.series[1].values, vec![Some(40.0), Some(60.0)]);
    }

    #[test]
    fn sector_selector_swaps_the_column_pair() {
        let mut dash = TradeDashboard::from_csv(CSV);
        dash.set_sector(Sector::Telecom);
        assert_eq!(dash.chart.title, "Telecommunications");
        assert_eq!(dash.chart.series[0].values, vec![Some(3.0), Some(5.0)]);
        dash.set_sector(Sector::Information);
        assert_eq!(dash.chart.series[1].values, vec![Some(400.0), Some(600.0)]);
    }
}
