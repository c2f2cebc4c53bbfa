use thiserror::Error;

/// Error types for the dashboard pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// No location was selected, or the selection was only whitespace
    #[error("No location selected")]
    EmptyLocation,

    /// The service answered with a non-success status
    #[error("HTTP error: {endpoint} returned {status}")]
    Http { endpoint: String, status: u16 },

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be read or parsed
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The chart library rejected a chart
    #[error("Chart rendering error: {0}")]
    Render(String),

    /// The browser refused to save the report
    #[error("Download error: {0}")]
    Download(String),
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
