//! Wire types shared by the dashboard pipeline and the browser frontend.
//! These structs mirror the JSON returned by the deforestation service so
//! every crate deserializes the same shapes.

mod history;
mod locations;
mod summary;

pub use history::{HistoryPoint, HistoryResponse, RateValue};
pub use locations::KNOWN_LOCATIONS;
pub use summary::{EnvironmentSummary, Forecast, Summary, SummaryResponse};
