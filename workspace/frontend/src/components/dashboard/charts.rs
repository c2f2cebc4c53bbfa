use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    /// Id Plotly draws into; must stay stable across renders.
    pub div_id: &'static str,
}

#[function_component(ChartCard)]
pub fn chart_card(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&props.title}</h2>
                <div id={props.div_id} class="chart-container" style="width: 100%; height: 320px;"></div>
            </div>
        </div>
    }
}
