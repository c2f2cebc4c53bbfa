//! Platform-independent pipeline behind the deforestation dashboard.
//!
//! The browser crate plugs its HTTP client and DOM bindings into the
//! [`DashboardApi`] and [`DashboardView`] seams; everything between the two
//! (validation, parallel fetching, chart datasets, stale-result handling)
//! lives here and runs natively under test.

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod location;
pub mod sequence;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use chart::{ChartRenderer, ChartSlot, ChartSlots, ChartSpec};
pub use dashboard::{AnalyzeOutcome, Dashboard, DashboardApi, DashboardView};
pub use error::{DashboardError, Result};
pub use location::{Location, report_filename};
pub use summary::{EnvironmentView, SummaryView};
