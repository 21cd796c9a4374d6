//! Renderer-agnostic chart description.
//! The pipeline emits this shape and assumes nothing about the sink that
//! draws it; both the interactive viewer and the static renderer consume it.

use serde::Serialize;

/// Visual hint color, converted by each sink to its own color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
}

/// Per-series visual hints, chosen by the dashboard, not by the pipeline.
#[derive(Debug, Clone)]
pub struct SeriesStyle {
    pub kind: SeriesKind,
    pub color: Rgb,
    pub fill: bool,
    pub dashed: bool,
}

impl SeriesStyle {
    pub fn line(color: Rgb) -> Self {
        Self {
            kind: SeriesKind::Line,
            color,
            fill: false,
            dashed: false,
        }
    }

    pub fn bar(color: Rgb) -> Self {
        Self {
            kind: SeriesKind::Bar,
            color,
            fill: true,
            dashed: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// One named series; a `null`/`None` value is an explicit gap.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSpec {
    pub name: String,
    pub values: Vec<Option<f64>>,
    #[serde(skip)]
    pub style: SeriesStyle,
}

/// A finished chart: axis labels plus named series with visual hints.
///
/// Serializes to the `{ "axisLabels": [...], "series": [...] }` shape the
/// presentation contract specifies, with gaps as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(skip)]
    pub title: String,
    #[serde(skip)]
    pub y_label: String,
    pub axis_labels: Vec<String>,
    pub series: Vec<SeriesSpec>,
    /// Visibility per series, keyed by stable index (legend toggles).
    #[serde(skip)]
    hidden: Vec<bool>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, axis_labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            y_label: String::new(),
            axis_labels,
            series: Vec::new(),
            hidden: Vec::new(),
        }
    }

    pub fn with_y_label(mut self, y_label: impl Into<String>) -> Self {
        self.y_label = y_label.into();
        self
    }

    pub fn push_series(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
        style: SeriesStyle,
    ) {
        self.series.push(SeriesSpec {
            name: name.into(),
            values,
            style,
        });
        self.hidden.push(false);
    }

    /// Legend control: flip visibility of the series at `index`.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.hidden.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        !self.hidden.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChartSpec {
        let mut spec = ChartSpec::new("Demo", vec!["2020".into(), "2021".into()]);
        spec.push_series(
            "A",
            vec![Some(1.0), None],
            SeriesStyle::line(Rgb(10, 20, 30)),
        );
        spec
    }

    #[test]
    fn serializes_to_presentation_shape_with_null_gaps() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "axisLabels": ["2020", "2021"],
                "series": [{ "name": "A", "values": [1.0, null] }]
            })
        );
    }

    #[test]
    fn toggle_is_keyed_by_stable_index() {
        let mut spec = sample();
        assert!(spec.is_visible(0));
        spec.toggle(0);
        assert!(!spec.is_visible(0));
        spec.toggle(0);
        assert!(spec.is_visible(0));
        // Out-of-range toggles are ignored.
        spec.toggle(9);
        assert!(spec.is_visible(9));
    }
}
