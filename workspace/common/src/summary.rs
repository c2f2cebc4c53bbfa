use serde::{Deserialize, Serialize};

/// Response body of `GET /api/summary/{location}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: Summary,
    pub future: Forecast,
    /// Climate averages for the district. Older service builds omit it.
    #[serde(default)]
    pub environment: Option<EnvironmentSummary>,
}

/// Narrative summary of a district's deforestation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub average_rate: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub causes: Vec<String>,
    pub reduction_methods: Vec<String>,
}

/// Predicted rates; `years` and `rates` are parallel arrays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub rates: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentSummary {
    pub avg_temp: Option<f64>,
    pub avg_rainfall: Option<f64>,
    pub avg_pollution: Option<f64>,
}
