//! Fakes for exercising the dashboard without a browser or a service.

use std::cell::{Cell, Ref, RefCell};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use common::{Forecast, HistoryPoint, HistoryResponse, Summary, SummaryResponse};
use futures::channel::oneshot;
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::chart::{ChartRenderer, ChartSlots, ChartSpec};
use crate::dashboard::{DashboardApi, DashboardView};
use crate::error::{DashboardError, Result};
use crate::location::Location;
use crate::summary::SummaryView;

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Records the level and message of every event emitted on the current
/// thread while its guard is alive.
#[derive(Clone, Default)]
pub struct CapturedEvents {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturedEvents {
    pub fn install() -> (Self, DefaultGuard) {
        let captured = Self::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        (captured, tracing::subscriber::set_default(subscriber))
    }

    pub fn contains(&self, level: Level, message: &str) -> bool {
        self.events
            .lock()
            .unwrap()
            .iter()
            .any(|(recorded, text)| *recorded == level && text == message)
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageField::default();
        event.record(&mut message);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), message.0));
    }
}

#[derive(Default)]
struct MessageField(String);

impl Visit for MessageField {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

pub fn sample_history() -> Vec<HistoryPoint> {
    vec![
        HistoryPoint {
            year: 2019,
            deforestation_rate: "1.2".into(),
        },
        HistoryPoint {
            year: 2020,
            deforestation_rate: "1.5".into(),
        },
    ]
}

pub fn sample_forecast() -> Forecast {
    Forecast {
        years: vec![2021, 2022, 2023],
        rates: vec![1.8, 2.1, 2.4],
    }
}

pub fn sample_summary(text: &str) -> Summary {
    Summary {
        text: text.to_string(),
        average_rate: 1.0,
        min_rate: 0.5,
        max_rate: 1.5,
        causes: vec!["A".into(), "B".into()],
        reduction_methods: vec!["C".into()],
    }
}

/// Answers every location with the sample payloads. The summary headline is
/// the location itself so tests can tell which response got rendered.
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<String>>,
    history_status: Cell<Option<u16>>,
    summary_status: Cell<Option<u16>>,
    report_status: Cell<Option<u16>>,
    history_gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
}

impl FakeApi {
    pub fn with_history_status(self, status: u16) -> Self {
        self.history_status.set(Some(status));
        self
    }

    pub fn with_summary_status(self, status: u16) -> Self {
        self.summary_status.set(Some(status));
        self
    }

    pub fn with_report_status(self, status: u16) -> Self {
        self.report_status.set(Some(status));
        self
    }

    pub fn set_summary_status(&self, status: Option<u16>) {
        self.summary_status.set(status);
    }

    /// Holds the history response for `location` until `gate` fires.
    pub fn hold_history(&self, location: &str, gate: oneshot::Receiver<()>) {
        self.history_gates
            .borrow_mut()
            .insert(location.to_string(), gate);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, endpoint: &str, location: &Location) {
        self.calls
            .borrow_mut()
            .push(format!("{endpoint}:{location}"));
    }
}

fn failure(endpoint: &str, location: &Location, status: Option<u16>) -> Result<()> {
    match status {
        Some(status) => Err(DashboardError::Http {
            endpoint: format!("/api/{endpoint}/{location}"),
            status,
        }),
        None => Ok(()),
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn history(&self, location: &Location) -> Result<HistoryResponse> {
        self.record("history", location);
        let gate = self.history_gates.borrow_mut().remove(location.as_str());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        failure("data", location, self.history_status.get())?;
        Ok(HistoryResponse {
            history: sample_history(),
        })
    }

    async fn summary(&self, location: &Location) -> Result<SummaryResponse> {
        self.record("summary", location);
        failure("summary", location, self.summary_status.get())?;
        Ok(SummaryResponse {
            summary: sample_summary(location.as_str()),
            future: sample_forecast(),
            environment: None,
        })
    }

    async fn report(&self, location: &Location) -> Result<Vec<u8>> {
        self.record("report", location);
        failure("report", location, self.report_status.get())?;
        Ok(b"%PDF-1.4 fake".to_vec())
    }
}

/// Counts live chart handles the way a canvas would see them.
#[derive(Debug, Default)]
pub struct CountingRenderer {
    next_id: u64,
    live: HashSet<u64>,
    created: usize,
    destroyed: usize,
    last_spec: Option<ChartSpec>,
    fail_next: Cell<bool>,
}

impl CountingRenderer {
    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub fn last_spec(&self) -> Option<&ChartSpec> {
        self.last_spec.as_ref()
    }

    pub fn fail_next_create(&self) {
        self.fail_next.set(true);
    }
}

impl ChartRenderer for CountingRenderer {
    type Handle = u64;

    fn create(&mut self, spec: &ChartSpec) -> Result<u64> {
        if self.fail_next.replace(false) {
            return Err(DashboardError::Render("canvas unavailable".into()));
        }
        self.next_id += 1;
        self.live.insert(self.next_id);
        self.created += 1;
        self.last_spec = Some(spec.clone());
        Ok(self.next_id)
    }

    fn destroy(&mut self, handle: u64) {
        assert!(self.live.remove(&handle), "destroyed a handle that was not live");
        self.destroyed += 1;
    }
}

pub struct RecordingView {
    alerts: RefCell<Vec<String>>,
    slots: RefCell<ChartSlots<CountingRenderer>>,
    summary: RefCell<Option<SummaryView>>,
    saved: RefCell<Vec<(String, Vec<u8>)>>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            alerts: RefCell::default(),
            slots: RefCell::new(ChartSlots::new(
                CountingRenderer::default(),
                CountingRenderer::default(),
            )),
            summary: RefCell::default(),
            saved: RefCell::default(),
        }
    }
}

impl RecordingView {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn slots(&self) -> Ref<'_, ChartSlots<CountingRenderer>> {
        self.slots.borrow()
    }

    /// `None` while the summary region is still hidden.
    pub fn summary(&self) -> Option<SummaryView> {
        self.summary.borrow().clone()
    }

    pub fn saved_files(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.borrow().clone()
    }
}

impl DashboardView for RecordingView {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn render_charts(&self, history: &ChartSpec, forecast: &ChartSpec) -> Result<()> {
        self.slots.borrow_mut().render(history, forecast)
    }

    fn render_summary(&self, summary: SummaryView) {
        *self.summary.borrow_mut() = Some(summary);
    }

    fn save_file(&self, filename: &str, bytes: Vec<u8>) -> Result<()> {
        self.saved.borrow_mut().push((filename.to_string(), bytes));
        Ok(())
    }
}
