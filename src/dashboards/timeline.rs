//! Historical event timeline, loaded from a CSV of dated events.
//! Descriptions routinely contain commas inside quoted fields, which is why
//! the row parser's quote handling matters here.

use crate::charts::Rgb;
use crate::config::DataSources;
use crate::data::{DataFetcher, RowParser};

pub const FILE: &str = "linea_tiempo.csv";

const MIN_FIELDS: usize = 6;
const COL_YEAR: usize = 1;
const COL_DATE: usize = 2;
const COL_TITLE: usize = 3;
const COL_DESCRIPTION: usize = 4;
const COL_CATEGORY: usize = 5;

#[derive(Debug, Clone)]
pub struct TimelineEvent {
    pub year: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub category: String,
}

impl TimelineEvent {
    /// Accent color for the category dot and tag.
    pub fn accent(&self) -> Rgb {
        match self.category.to_lowercase().as_str() {
            "tecnología" => Rgb(59, 130, 246),
            "legal" => Rgb(168, 85, 247),
            "tecnología financiera" | "fintech" => Rgb(16, 185, 129),
            _ => Rgb(148, 163, 184),
        }
    }
}

pub struct TimelineDashboard {
    pub events: Vec<TimelineEvent>,
}

impl TimelineDashboard {
    pub fn load(fetcher: &DataFetcher, sources: &DataSources) -> anyhow::Result<Self> {
        let text = fetcher.fetch_text(&sources.url_for(FILE))?;
        Ok(Self::from_csv(&text))
    }

    pub fn from_csv(text: &str) -> Self {
        let events = RowParser::new(MIN_FIELDS)
            .parse(text)
            .iter()
            .map(|record| TimelineEvent {
                year: record.text(COL_YEAR).to_string(),
                date: record.text(COL_DATE).to_string(),
                title: record.text(COL_TITLE).to_string(),
                description: record.text(COL_DESCRIPTION).to_string(),
                category: record.text(COL_CATEGORY).to_string(),
            })
            .collect();
        Self { events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,anio,fecha,titulo,desc,categoria
1,2019,Marzo,Launch,\"First store opens, cash only\",Tecnología
2,2021,,Expansion,Nationwide rollout,Fintech
3,2022,Junio
";

    #[test]
    fn quoted_description_keeps_its_comma() {
        let dash = TimelineDashboard::from_csv(CSV);
        assert_eq!(dash.events.len(), 2); // third row is below the minimum
        assert_eq!(dash.events[0].description, "First store opens, cash only");
    }

    #[test]
    fn category_accent_is_case_insensitive_with_fallback() {
        let dash = TimelineDashboard::from_csv(CSV);
        assert_eq!(dash.events[0].accent(), Rgb(59, 130, 246));
        assert_eq!(dash.events[1].accent(), Rgb(16, 185, 129));
        let other = TimelineEvent {
            year: String::new(),
            date: String::new(),
            title: String::new(),
            description: String::new(),
            category: "Otro".into(),
        };
        assert_eq!(other.accent(), Rgb(148, 163, 184));
    }

    #[test]
    fn empty_date_is_allowed() {
        let dash = TimelineDashboard::from_csv(CSV);
        assert_eq!(dash.events[1].date, "");
    }
}
