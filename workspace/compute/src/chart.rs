//! Chart datasets and the slots that own live chart instances.

use common::{Forecast, HistoryPoint};
use tracing::{debug, trace};

use crate::error::Result;

const HISTORY_LABEL: &str = "Deforestation Rate (%)";
const HISTORY_BORDER: &str = "#c62828";
const HISTORY_BACKGROUND: &str = "rgba(198, 40, 40, 0.1)";

const PREDICTION_LABEL: &str = "Predicted Rate (%)";
const PREDICTION_BORDER: &str = "#2e7d32";
const PREDICTION_BACKGROUND: &str = "rgba(46, 125, 50, 0.1)";

const LINE_TENSION: f64 = 0.3;

/// Everything a renderer needs to draw one single-series line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub label: String,
    pub labels: Vec<i32>,
    pub values: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
    pub show_legend: bool,
}

impl ChartSpec {
    /// Observed rates in the order the service sent them. String rates are
    /// coerced to floats.
    pub fn historical(history: &[HistoryPoint]) -> Self {
        let labels = history.iter().map(|point| point.year).collect();
        let values = history
            .iter()
            .map(|point| point.deforestation_rate.as_f64())
            .collect();

        Self::line(HISTORY_LABEL, labels, values, HISTORY_BORDER, HISTORY_BACKGROUND)
    }

    pub fn predicted(forecast: &Forecast) -> Self {
        Self::line(
            PREDICTION_LABEL,
            forecast.years.clone(),
            forecast.rates.clone(),
            PREDICTION_BORDER,
            PREDICTION_BACKGROUND,
        )
    }

    fn line(
        label: &str,
        labels: Vec<i32>,
        values: Vec<f64>,
        border_color: &str,
        background_color: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            labels,
            values,
            border_color: border_color.to_string(),
            background_color: background_color.to_string(),
            tension: LINE_TENSION,
            show_legend: true,
        }
    }
}

/// A chart library bound to one display region.
pub trait ChartRenderer {
    type Handle;

    fn create(&mut self, spec: &ChartSpec) -> Result<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owner of the single live chart instance of a display region.
///
/// The previous instance is always destroyed before a new one is created, so
/// a region is never bound to more than one renderer.
#[derive(Debug)]
pub struct ChartSlot<R: ChartRenderer> {
    name: &'static str,
    renderer: R,
    current: Option<R::Handle>,
}

impl<R: ChartRenderer> ChartSlot<R> {
    pub fn new(name: &'static str, renderer: R) -> Self {
        Self {
            name,
            renderer,
            current: None,
        }
    }

    pub fn replace(&mut self, spec: &ChartSpec) -> Result<()> {
        self.clear();
        trace!(slot = self.name, points = spec.values.len(), "Creating chart");
        let handle = self.renderer.create(spec)?;
        self.current = Some(handle);
        Ok(())
    }

    /// Destroys the live instance, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take() {
            debug!(slot = self.name, "Destroying previous chart");
            self.renderer.destroy(handle);
        }
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

/// The two chart regions of the dashboard.
pub struct ChartSlots<R: ChartRenderer> {
    pub historical: ChartSlot<R>,
    pub predicted: ChartSlot<R>,
}

impl<R: ChartRenderer> ChartSlots<R> {
    pub fn new(historical: R, predicted: R) -> Self {
        Self {
            historical: ChartSlot::new("historical", historical),
            predicted: ChartSlot::new("predicted", predicted),
        }
    }

    /// Destroys both live charts before creating either.
    pub fn render(&mut self, history: &ChartSpec, forecast: &ChartSpec) -> Result<()> {
        self.historical.clear();
        self.predicted.clear();
        self.historical.replace(history)?;
        self.predicted.replace(forecast)
    }
}
