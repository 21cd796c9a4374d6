//! Retail competition dashboard (Tuti vs the incumbents).
//! A view selector re-runs the aggregator over the retained records: sales,
//! market share, loss margin, or inventory turnover with cumulative savings.

use crate::charts::plotter::{AMBER, EMERALD, RED, VIOLET};
use crate::charts::{ChartSpec, SeriesStyle};
use crate::config::DataSources;
use crate::data::{DataFetcher, Record, RowParser};
use crate::dashboards::Kpi;
use crate::series::{ops, Entity, SeriesAligner, SharePolicy, TimeAxis};

pub const FILE: &str = "negocios.csv";

const MIN_FIELDS: usize = 7;
const COL_YEAR: usize = 1;
const COL_COMPANY: usize = 2;
const COL_SALES: usize = 3;
const COL_LOSS: usize = 4;
const COL_ASSETS: usize = 5;
const COL_INVENTORY: usize = 6;

/// Commission avoided by the cash-only model, as a fraction of sales.
const SAVINGS_RATE: f64 = 0.02;

fn entities() -> [Entity; 3] {
    [
        Entity::exact("TUTI"),
        Entity::contains("Tía", "Tía"),
        Entity::contains("Favorita", "Favorita"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetailView {
    Sales,
    MarketShare,
    LossMargin,
    Turnover,
}

impl RetailView {
    pub const ALL: [RetailView; 4] = [
        RetailView::Sales,
        RetailView::MarketShare,
        RetailView::LossMargin,
        RetailView::Turnover,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RetailView::Sales => "Sales",
            RetailView::MarketShare => "Market share",
            RetailView::LossMargin => "Loss margin",
            RetailView::Turnover => "Turnover & savings",
        }
    }
}

pub struct RetailDashboard {
    records: Vec<Record>,
    axis: TimeAxis,
    pub view: RetailView,
    pub chart: ChartSpec,
    /// Asset-efficiency bars for the latest year, one per company.
    pub efficiency: ChartSpec,
    pub kpis: Vec<Kpi>,
}

impl RetailDashboard {
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
            view: RetailView::Sales,
            chart: ChartSpec::new("", Vec::new()),
            efficiency: ChartSpec::new("", Vec::new()),
            kpis: Vec::new(),
        };
        dashboard.rebuild();
        dashboard.build_efficiency();
        dashboard.build_kpis();
        dashboard
    }

    /// Selector change: re-runs the aggregator and replaces the main chart.
    pub fn set_view(&mut self, view: RetailView) {
        if view != self.view {
            self.view = view;
            self.rebuild();
        }
    }

    fn aligner(&self) -> SeriesAligner<'_> {
        SeriesAligner::new(&self.records, COL_COMPANY, COL_YEAR)
    }

    fn rebuild(&mut self) {
        let aligner = self.aligner();
        let styles = [
            SeriesStyle::line(VIOLET).filled(),
            SeriesStyle::line(AMBER).dashed(),
            SeriesStyle::line(RED),
        ];

        let chart = match self.view {
            RetailView::Sales => {
                let mut chart = ChartSpec::new("Sales comparison", self.axis.labels())
                    .with_y_label("$ millions");
                for (entity, style) in entities().iter().zip(styles) {
                    let sales = aligner.align(entity, COL_SALES, &self.axis);
                    chart.push_series(entity.name(), sales, style);
                }
                chart
            }
            RetailView::MarketShare => {
                let all: Vec<Vec<Option<f64>>> = entities()
                    .iter()
                    .map(|e| aligner.align(e, COL_SALES, &self.axis))
                    .collect();
                let refs: Vec<&[Option<f64>]> = all.iter().map(Vec::as_slice).collect();
                let mut chart =
                    ChartSpec::new("Market share", self.axis.labels()).with_y_label("%");
                for ((entity, sales), style) in entities().iter().zip(&all).zip(styles) {
                    let shares = ops::share(sales, &refs, SharePolicy::PropagateMissing);
                    chart.push_series(entity.name(), shares, style.filled());
                }
                chart
            }
            RetailView::LossMargin => {
                let mut chart =
                    ChartSpec::new("Loss margin", self.axis.labels()).with_y_label("% of sales");
                for (entity, style) in entities().iter().zip(styles) {
                    let sales = aligner.align(entity, COL_SALES, &self.axis);
                    let loss = aligner.align(entity, COL_LOSS, &self.axis);
                    let margin = ops::scale(&ops::ratio(&loss, &sales), 100.0);
                    chart.push_series(entity.name(), margin, style);
                }
                chart
            }
            RetailView::Turnover => {
                let tuti = Entity::exact("TUTI");
                let sales = aligner.align(&tuti, COL_SALES, &self.axis);
                let inventory = aligner.align(&tuti, COL_INVENTORY, &self.axis);
                let turnover = ops::ratio(&sales, &inventory);
                let savings = ops::cumulative(&sales, SAVINGS_RATE);
                let mut chart = ChartSpec::new("Inventory turnover & savings", self.axis.labels())
                    .with_y_label("Turns / $M saved");
                chart.push_series("Inventory turnover (x)", turnover, SeriesStyle::bar(VIOLET));
                chart.push_series(
                    "Cumulative savings ($M)",
                    savings,
                    SeriesStyle::line(EMERALD),
                );
                chart
            }
        };
        self.chart = chart;
    }

    fn build_efficiency(&mut self) {
        let aligner = self.aligner();
        let names: Vec<String> = entities().iter().map(|e| e.name().to_string()).collect();
        let values: Vec<Option<f64>> = entities()
            .iter()
            .map(|entity| {
                let sales = aligner.align(entity, COL_SALES, &self.axis);
                let assets = aligner.align(entity, COL_ASSETS, &self.axis);
                ops::last_value(&ops::ratio(&sales, &assets))
            })
            .collect();

        let title = match self.axis.last() {
            Some(year) => format!("Asset turnover ({year})"),
            None => "Asset turnover".to_string(),
        };
        let mut chart = ChartSpec::new(title, names).with_y_label("Turns per year");
        chart.push_series("Sales / assets", values, SeriesStyle::bar(VIOLET));
        self.efficiency = chart;
    }

    fn build_kpis(&mut self) {
        let aligner = self.aligner();
        let [tuti, _, _] = entities();
        let sales = aligner.align(&tuti, COL_SALES, &self.axis);
        let inventory = aligner.align(&tuti, COL_INVENTORY, &self.axis);

        let savings = ops::last_value(&ops::cumulative(&sales, SAVINGS_RATE));
        let latest_sales = ops::last_value(&sales);
        let turnover = ops::last_value(&ops::ratio(&sales, &inventory));

        self.kpis = vec![
            Kpi::new(
                "Cumulative cash savings",
                savings.map_or("—".to_string(), |v| format!("+${v:.1}M")),
            ),
            Kpi::new(
                "Latest Tuti sales",
                latest_sales.map_or("—".to_string(), |v| format!("${v:.1}M")),
            ),
            Kpi::new(
                "Inventory turnover",
                turnover.map_or("—".to_string(), |v| format!("{v:.1}x")),
            ),
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,anio,empresa,ventas,perdida,activo,inventario
1,2023,TUTI,100,5,50,10
2,2023,Almacenes Tía S.A.,300,9,200,40
3,2023,Corporación Favorita C.A.,600,12,500,90
4,2024,TUTI,150,6,60,0
5,2024,Almacenes Tía S.A.,310,10,210,42
6,2024,Corporación Favorita C.A.,620,13,510,95
";

    #[test]
    fn sales_view_has_one_line_per_company() {
        let dash = RetailDashboard::from_csv(CSV);
        assert_eq!(dash.view, RetailView::Sales);
        assert_eq!(dash.chart.series.len(), 3);
        assert_eq!(dash.chart.series[0].values, vec![Some(100.0), Some(150.0)]);
    }

    #[test]
    fn market_share_is_percent_of_the_three_way_total() {
        let mut dash = RetailDashboard::from_csv(CSV);
        dash.set_view(RetailView::MarketShare);
        let tuti = &dash.chart.series[0].values;
        assert_eq!(tuti[0], Some(10.0)); // 100 / 1000
    }

    #[test]
    fn loss_margin_is_percent_of_sales() {
        let mut dash = RetailDashboard::from_csv(CSV);
        dash.set_view(RetailView::LossMargin);
        let tuti = &dash.chart.series[0].values;
        assert_eq!(tuti[0], Some(5.0));
        assert_eq!(tuti[1], Some(4.0));
    }

    #[test]
    fn turnover_view_guards_zero_inventory_and_accumulates_savings() {
        let mut dash = RetailDashboard::from_csv(CSV);
        dash.set_view(RetailView::Turnover);
        let turnover = &dash.chart.series[0].values;
        assert_eq!(turnover[0], Some(10.0));
        assert_eq!(turnover[1], None); // zero inventory in 2024
        let savings = &dash.chart.series[1].values;
        assert_eq!(savings[1], Some(5.0)); // (100 + 150) * 0.02
    }

    #[test]
    fn kpis_are_missing_safe() {
        let dash = RetailDashboard::from_csv(CSV);
        assert_eq!(dash.kpis[0].value, "+$5.0M");
        assert_eq!(dash.kpis[1].value, "$150.0M");
        assert_eq!(dash.kpis[2].value, "—"); // turnover undefined in 2024
    }

    #[test]
    fn efficiency_bars_use_the_latest_year() {
        let dash = RetailDashboard::from_csv(CSV);
        assert_eq!(dash.efficiency.axis_labels, vec!["TUTI", "Tía", "Favorita"]);
        let bars = &dash.efficiency.series[0].values;
        assert_eq!(bars[0], Some(150.0 / 60.0));
        assert_eq!(bars[2], Some(620.0 / 510.0));
    }
}
