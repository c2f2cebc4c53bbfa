use compute::{EnvironmentView, SummaryView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// `None` keeps the panel hidden.
    pub summary: Option<SummaryView>,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &Props) -> Html {
    let hidden = props.summary.is_none();

    html! {
        <div id="summary" class={classes!("card", "bg-base-100", "shadow", "mt-6", hidden.then_some("hidden"))}>
            {if let Some(summary) = &props.summary {
                html! {
                    <div class="card-body">
                        <h3 class="card-title">{"📊 Summary"}</h3>
                        <p>{&summary.headline}</p>
                        <p><b>{"Average Rate:"}</b>{" "}{&summary.average_rate}</p>
                        <p>
                            <b>{"Min Rate:"}</b>{" "}{&summary.min_rate}
                            {" | "}
                            <b>{"Max Rate:"}</b>{" "}{&summary.max_rate}
                        </p>
                        {render_environment(summary.environment.as_ref())}
                        <h4 class="font-semibold mt-2">{"🌍 Causes:"}</h4>
                        <ul class="list-disc list-inside" id="summary-causes">
                            { for summary.causes.iter().map(|cause| html! { <li>{cause}</li> }) }
                        </ul>
                        <h4 class="font-semibold mt-2">{"🌱 Reduction Methods:"}</h4>
                        <ul class="list-disc list-inside" id="summary-reduction-methods">
                            { for summary.reduction_methods.iter().map(|method| html! { <li>{method}</li> }) }
                        </ul>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_environment(environment: Option<&EnvironmentView>) -> Html {
    let Some(environment) = environment else {
        return html! {};
    };

    html! {
        <div class="stats stats-vertical md:stats-horizontal bg-base-200 mt-2">
            <div class="stat">
                <div class="stat-title">{"Avg. Temperature"}</div>
                <div class="stat-value text-lg">{&environment.temperature}</div>
            </div>
            <div class="stat">
                <div class="stat-title">{"Avg. Rainfall"}</div>
                <div class="stat-value text-lg">{&environment.rainfall}</div>
            </div>
            <div class="stat">
                <div class="stat-title">{"Pollution Index"}</div>
                <div class="stat-value text-lg">{&environment.pollution}</div>
            </div>
        </div>
    }
}
