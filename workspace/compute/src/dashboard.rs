//! The dashboard controller.
//!
//! `Dashboard` runs the two user actions against a [`DashboardApi`] (the
//! deforestation service) and a [`DashboardView`] (the page). Failures are
//! logged and returned to the caller; the view is only touched on success.

use async_trait::async_trait;
use common::{HistoryResponse, SummaryResponse};
use tracing::{debug, error, info, instrument};

use crate::chart::ChartSpec;
use crate::error::Result;
use crate::location::{Location, report_filename};
use crate::sequence::ActionSequence;
use crate::summary::SummaryView;

pub const EMPTY_ANALYZE_ALERT: &str = "Please select a location first!";
pub const EMPTY_DOWNLOAD_ALERT: &str = "Select a location first!";

/// The three reads the dashboard makes against the service.
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn history(&self, location: &Location) -> Result<HistoryResponse>;

    async fn summary(&self, location: &Location) -> Result<SummaryResponse>;

    /// Raw PDF bytes of the district report.
    async fn report(&self, location: &Location) -> Result<Vec<u8>>;
}

/// The page regions the dashboard writes to.
pub trait DashboardView {
    /// Blocking notice to the user.
    fn alert(&self, message: &str);

    fn render_charts(&self, history: &ChartSpec, forecast: &ChartSpec) -> Result<()>;

    /// Unhides the summary region and replaces its content.
    fn render_summary(&self, summary: SummaryView);

    fn save_file(&self, filename: &str, bytes: Vec<u8>) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    Rendered,
    /// A later analyze started while this one was in flight; its data was dropped.
    Superseded,
}

pub struct Dashboard<A, V> {
    api: A,
    view: V,
    analyze_sequence: ActionSequence,
}

impl<A, V> Dashboard<A, V>
where
    A: DashboardApi,
    V: DashboardView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            analyze_sequence: ActionSequence::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetches history and summary for `raw_location` in parallel and renders
    /// both charts and the summary once both reads succeed.
    #[instrument(skip(self))]
    pub async fn analyze(&self, raw_location: &str) -> Result<AnalyzeOutcome> {
        let location = match Location::parse(raw_location) {
            Ok(location) => location,
            Err(err) => {
                self.view.alert(EMPTY_ANALYZE_ALERT);
                return Err(err);
            }
        };

        let ticket = self.analyze_sequence.begin();
        debug!(%location, "Fetching history and summary");

        let (history, summary) = futures::join!(
            self.api.history(&location),
            self.api.summary(&location)
        );

        let (history, summary) = match (history, summary) {
            (Ok(history), Ok(summary)) => (history, summary),
            (Err(err), _) | (_, Err(err)) => {
                error!(%location, error = %err, "Failed to fetch dashboard data");
                return Err(err);
            }
        };

        if !self.analyze_sequence.is_current(ticket) {
            debug!(%location, "Dropping superseded analyze result");
            return Ok(AnalyzeOutcome::Superseded);
        }

        self.render(&history, &summary)?;
        info!(%location, points = history.history.len(), "Dashboard rendered");
        Ok(AnalyzeOutcome::Rendered)
    }

    /// Draws both charts, then the summary panel.
    pub fn render(&self, history: &HistoryResponse, summary: &SummaryResponse) -> Result<()> {
        let history_spec = ChartSpec::historical(&history.history);
        let forecast_spec = ChartSpec::predicted(&summary.future);

        if let Err(err) = self.view.render_charts(&history_spec, &forecast_spec) {
            error!(error = %err, "Failed to render charts");
            return Err(err);
        }

        self.view.render_summary(SummaryView::new(
            &summary.summary,
            summary.environment.as_ref(),
        ));
        Ok(())
    }

    /// Fetches the district report and hands it to the browser as
    /// `Deforestation_Report_<location>.pdf`. Returns the file name used.
    #[instrument(skip(self))]
    pub async fn download_report(&self, raw_location: &str) -> Result<String> {
        let location = match Location::parse(raw_location) {
            Ok(location) => location,
            Err(err) => {
                self.view.alert(EMPTY_DOWNLOAD_ALERT);
                return Err(err);
            }
        };

        let bytes = match self.api.report(&location).await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(%location, error = %err, "Failed to download report");
                return Err(err);
            }
        };

        let filename = report_filename(&location);
        if let Err(err) = self.view.save_file(&filename, bytes) {
            error!(%location, error = %err, "Failed to save report");
            return Err(err);
        }

        info!(%location, %filename, "Report download triggered");
        Ok(filename)
    }
}
