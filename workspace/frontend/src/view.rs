use std::cell::RefCell;

use compute::{ChartSlots, ChartSpec, DashboardView, Result, SummaryView};
use yew::Callback;

use crate::charts::{PlotlyRenderer, HISTORY_CHART_ID, PREDICTION_CHART_ID};
use crate::download::{save_bytes, PDF_MIME};

/// The dashboard page as seen by the controller.
///
/// Charts are drawn imperatively through Plotly; the summary is handed back
/// to Yew through `on_summary` and rendered as text nodes.
pub struct BrowserView {
    slots: RefCell<ChartSlots<PlotlyRenderer>>,
    on_summary: Callback<SummaryView>,
}

impl BrowserView {
    pub fn new(on_summary: Callback<SummaryView>) -> Self {
        Self {
            slots: RefCell::new(ChartSlots::new(
                PlotlyRenderer::new(HISTORY_CHART_ID),
                PlotlyRenderer::new(PREDICTION_CHART_ID),
            )),
            on_summary,
        }
    }
}

impl DashboardView for BrowserView {
    fn alert(&self, message: &str) {
        log::warn!("Alerting user: {}", message);
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::error!("window.alert failed");
            }
        }
    }

    fn render_charts(&self, history: &ChartSpec, forecast: &ChartSpec) -> Result<()> {
        self.slots.borrow_mut().render(history, forecast)
    }

    fn render_summary(&self, summary: SummaryView) {
        self.on_summary.emit(summary);
    }

    fn save_file(&self, filename: &str, bytes: Vec<u8>) -> Result<()> {
        save_bytes(filename, PDF_MIME, &bytes)
    }
}
