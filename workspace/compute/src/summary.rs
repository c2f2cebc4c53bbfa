use common::{EnvironmentSummary, Summary};

const MISSING_VALUE: &str = "N/A";

/// Display-ready summary panel content.
///
/// Values stay plain text; the frontend writes them as text nodes, never as
/// markup.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub headline: String,
    pub average_rate: String,
    pub min_rate: String,
    pub max_rate: String,
    pub causes: Vec<String>,
    pub reduction_methods: Vec<String>,
    pub environment: Option<EnvironmentView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentView {
    pub temperature: String,
    pub rainfall: String,
    pub pollution: String,
}

impl SummaryView {
    pub fn new(summary: &Summary, environment: Option<&EnvironmentSummary>) -> Self {
        Self {
            headline: summary.text.clone(),
            average_rate: format_rate(summary.average_rate),
            min_rate: format_rate(summary.min_rate),
            max_rate: format_rate(summary.max_rate),
            causes: summary.causes.clone(),
            reduction_methods: summary.reduction_methods.clone(),
            environment: environment.map(EnvironmentView::new),
        }
    }
}

impl EnvironmentView {
    fn new(environment: &EnvironmentSummary) -> Self {
        Self {
            temperature: format_measure(environment.avg_temp, " °C"),
            rainfall: format_measure(environment.avg_rainfall, " mm"),
            pollution: format_measure(environment.avg_pollution, ""),
        }
    }
}

fn format_rate(value: f64) -> String {
    format!("{value}%")
}

fn format_measure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value}{unit}"),
        _ => MISSING_VALUE.to_string(),
    }
}
