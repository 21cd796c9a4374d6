//! Dashboards module - one submodule per dashboard widget.
//!
//! Each dashboard owns its parsed records, its canonical axis and the chart
//! spec(s) currently on display. Selector changes re-run the aggregator over
//! the retained records and replace the owned chart; nothing is shared
//! between invocations.

pub mod indicators;
pub mod investment;
pub mod retail;
pub mod timeline;
pub mod trade;

use crate::config::DataSources;
use crate::data::DataFetcher;

/// A computed headline figure shown above a dashboard's charts.
#[derive(Debug, Clone)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

impl Kpi {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The dashboard catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Indicators,
    Trade,
    Investment,
    Retail,
    Timeline,
}

impl DashboardKind {
    pub const ALL: [DashboardKind; 5] = [
        DashboardKind::Indicators,
        DashboardKind::Trade,
        DashboardKind::Investment,
        DashboardKind::Retail,
        DashboardKind::Timeline,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Indicators => "Digital Government",
            DashboardKind::Trade => "Service Trade",
            DashboardKind::Investment => "Investment & VAB",
            DashboardKind::Retail => "Retail Competition",
            DashboardKind::Timeline => "Timeline",
        }
    }

    /// Fetch and build the dashboard. Runs on a background thread; any fetch
    /// failure aborts the whole load and surfaces as one error state.
    pub fn load(
        self,
        fetcher: &DataFetcher,
        sources: &DataSources,
    ) -> anyhow::Result<DashboardView> {
        Ok(match self {
            DashboardKind::Indicators => {
                DashboardView::Indicators(indicators::IndicatorsDashboard::load(fetcher, sources)?)
            }
            DashboardKind::Trade => {
                DashboardView::Trade(trade::TradeDashboard::load(fetcher, sources)?)
            }
            DashboardKind::Investment => {
                DashboardView::Investment(investment::InvestmentDashboard::load(fetcher, sources)?)
            }
            DashboardKind::Retail => {
                DashboardView::Retail(retail::RetailDashboard::load(fetcher, sources)?)
            }
            DashboardKind::Timeline => {
                DashboardView::Timeline(timeline::TimelineDashboard::load(fetcher, sources)?)
            }
        })
    }
}

/// A loaded dashboard, owned by the UI until replaced by a newer load.
pub enum DashboardView {
    Indicators(indicators::IndicatorsDashboard),
    Trade(trade::TradeDashboard),
    Investment(investment::InvestmentDashboard),
    Retail(retail::RetailDashboard),
    Timeline(timeline::TimelineDashboard),
}

impl DashboardView {
    pub fn kind(&self) -> DashboardKind {
        match self {
            DashboardView::Indicators(_) => DashboardKind::Indicators,
            DashboardView::Trade(_) => DashboardKind::Trade,
            DashboardView::Investment(_) => DashboardKind::Investment,
            DashboardView::Retail(_) => DashboardKind::Retail,
            DashboardView::Timeline(_) => DashboardKind::Timeline,
        }
    }
}
