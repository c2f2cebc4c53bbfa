use compute::{Dashboard, SummaryView};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::charts::ChartCard;
use super::controls::LocationControls;
use super::summary::SummaryPanel;
use crate::api_client::HttpDashboardApi;
use crate::charts::{HISTORY_CHART_ID, PREDICTION_CHART_ID};
use crate::view::BrowserView;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let selected = use_state(String::new);
    let summary = use_state(|| None::<SummaryView>);

    // One controller per mounted page; it owns the chart slots and the
    // analyze sequence shared by every click.
    let dashboard = {
        let summary = summary.clone();
        use_memo((), move |_| {
            let on_summary = Callback::from(move |view: SummaryView| summary.set(Some(view)));
            Dashboard::new(HttpDashboardApi, BrowserView::new(on_summary))
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |value: String| {
            log::trace!("Location selected: {}", value);
            selected.set(value);
        })
    };

    // Failures are logged by the controller and leave the page untouched.
    let on_analyze = {
        let dashboard = dashboard.clone();
        let selected = selected.clone();
        Callback::from(move |_: ()| {
            let dashboard = dashboard.clone();
            let location = (*selected).clone();
            log::debug!("User clicked analyze for {:?}", location);
            spawn_local(async move {
                let _ = dashboard.analyze(&location).await;
            });
        })
    };

    let on_download = {
        let dashboard = dashboard.clone();
        let selected = selected.clone();
        Callback::from(move |_: ()| {
            let dashboard = dashboard.clone();
            let location = (*selected).clone();
            log::debug!("User clicked download for {:?}", location);
            spawn_local(async move {
                let _ = dashboard.download_report(&location).await;
            });
        })
    };

    html! {
        <>
            <LocationControls
                selected={(*selected).clone()}
                {on_select}
                {on_analyze}
                {on_download}
            />
            <SummaryPanel summary={(*summary).clone()} />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <ChartCard title="Historical Deforestation Rate" div_id={HISTORY_CHART_ID} />
                <ChartCard title="Predicted Deforestation Rate" div_id={PREDICTION_CHART_ID} />
            </div>
        </>
    }
}
