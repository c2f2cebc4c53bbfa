//! Plotly.js bindings for the two dashboard charts.

use compute::{ChartRenderer, ChartSpec, DashboardError, Result};
use plotly::common::{Fill, Line, LineShape, Mode};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;

pub const HISTORY_CHART_ID: &str = "history-chart";
pub const PREDICTION_CHART_ID: &str = "prediction-chart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(
        div_id: &str,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> std::result::Result<(), JsValue>;
}

/// A live Plotly chart; identified by the div it was drawn into.
#[derive(Debug)]
pub struct PlotHandle {
    div_id: &'static str,
}

/// Draws into one fixed div.
#[derive(Debug, Clone, Copy)]
pub struct PlotlyRenderer {
    div_id: &'static str,
}

impl PlotlyRenderer {
    pub fn new(div_id: &'static str) -> Self {
        Self { div_id }
    }
}

impl ChartRenderer for PlotlyRenderer {
    type Handle = PlotHandle;

    fn create(&mut self, spec: &ChartSpec) -> Result<PlotHandle> {
        let trace = Scatter::new(spec.labels.clone(), spec.values.clone())
            .name(&spec.label)
            .mode(Mode::LinesMarkers)
            .fill(Fill::ToZeroY)
            .fill_color(spec.background_color.clone())
            .line(
                Line::new()
                    .color(spec.border_color.clone())
                    .width(2.0)
                    .shape(LineShape::Spline)
                    .smoothing(spec.tension),
            );

        let layout = Layout::new()
            .show_legend(spec.show_legend)
            .height(320);

        let config = serde_json::json!({"responsive": true, "displayModeBar": false});

        // Plain JSON keeps nested objects as JS objects rather than Maps
        let data_js = js_sys::Array::new();
        data_js.push(&to_js(&trace)?);

        log::trace!("Plotting {} points into #{}", spec.values.len(), self.div_id);
        new_plot(self.div_id, data_js.into(), to_js(&layout)?, to_js(&config)?)
            .map_err(|e| DashboardError::Render(format!("{:?}", e)))?;

        Ok(PlotHandle {
            div_id: self.div_id,
        })
    }

    fn destroy(&mut self, handle: PlotHandle) {
        if let Err(e) = purge(handle.div_id) {
            log::warn!("Failed to purge chart #{}: {:?}", handle.div_id, e);
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value).map_err(|e| DashboardError::Render(e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|e| DashboardError::Render(format!("{:?}", e)))
}
