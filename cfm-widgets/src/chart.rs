//! Chart.js bar chart configuration for spent amounts per category.
//!
//! The structs mirror the configuration object Chart.js expects, so
//! serializing a [`BarChartConfig`] with `serde_json` yields the exact value
//! passed to `new Chart(ctx, config)`. Rendering, resizing and redraws belong
//! to Chart.js.

use serde::Serialize;

/// Dataset label shown in tooltips.
pub const SPENT_LABEL: &str = "Spent Amount";
/// Bar fill color.
pub const BAR_COLOR: &str = "#4b7bec";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

/// Build the spent-amount bar chart for `labels` and their `data` values.
///
/// Labels and values are paired by position. Lengths are not checked: a
/// mismatch simply leaves bars or labels without a partner.
pub fn create_chart(labels: Vec<String>, data: Vec<f64>) -> BarChartConfig {
    BarChartConfig {
        kind: "bar".to_string(),
        data: ChartData {
            labels,
            datasets: vec![BarDataset {
                label: SPENT_LABEL.to_string(),
                data,
                background_color: BAR_COLOR.to_string(),
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: Plugins {
                legend: Legend { display: false },
            },
            scales: Scales {
                y: Axis {
                    begin_at_zero: true,
                },
            },
        },
    }
}

impl BarChartConfig {
    /// JSON handed to Chart.js. Falls back to an empty string, which the
    /// bridge treats as nothing to draw.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn two_bars_single_dataset() {
        let config = create_chart(vec!["A".to_string(), "B".to_string()], vec![10.0, 20.0]);
        assert_eq!(config.kind, "bar");
        assert_eq!(config.data.labels, vec!["A", "B"]);
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.data.datasets[0].data, vec![10.0, 20.0]);
        assert_eq!(config.data.datasets[0].label, SPENT_LABEL);
        assert!(!config.options.plugins.legend.display);
        assert!(config.options.scales.y.begin_at_zero);
        assert!(config.options.responsive);
    }

    #[test]
    fn serializes_to_chartjs_shape() {
        let config = create_chart(vec!["A".to_string(), "B".to_string()], vec![10.0, 20.0]);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "bar",
                "data": {
                    "labels": ["A", "B"],
                    "datasets": [{
                        "label": "Spent Amount",
                        "data": [10.0, 20.0],
                        "backgroundColor": "#4b7bec"
                    }]
                },
                "options": {
                    "responsive": true,
                    "plugins": { "legend": { "display": false } },
                    "scales": { "y": { "beginAtZero": true } }
                }
            })
        );
    }

    #[test]
    fn mismatched_lengths_pass_through() {
        let config = create_chart(vec!["Only".to_string()], vec![1.0, 2.0, 3.0]);
        assert_eq!(config.data.labels.len(), 1);
        assert_eq!(config.data.datasets[0].data.len(), 3);
    }

    #[test]
    fn empty_chart_still_has_a_dataset() {
        let config = create_chart(Vec::new(), Vec::new());
        assert_eq!(config.data.datasets.len(), 1);
        assert!(config.data.datasets[0].data.is_empty());
    }

    #[test]
    fn to_json_round_trips_through_value() {
        let config = create_chart(vec!["Library".to_string()], vec![2500.5]);
        let parsed: serde_json::Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(parsed["data"]["datasets"][0]["data"][0], json!(2500.5));
    }
}
