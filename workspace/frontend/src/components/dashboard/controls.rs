use common::KNOWN_LOCATIONS;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: String,
    pub on_select: Callback<String>,
    pub on_analyze: Callback<()>,
    pub on_download: Callback<()>,
}

/// District selector plus the two action buttons.
#[function_component(LocationControls)]
pub fn location_controls(props: &Props) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    let onclick_analyze = {
        let on_analyze = props.on_analyze.clone();
        Callback::from(move |_: MouseEvent| on_analyze.emit(()))
    };

    let onclick_download = {
        let on_download = props.on_download.clone();
        Callback::from(move |_: MouseEvent| on_download.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body flex flex-col md:flex-row md:items-end gap-4">
                <label class="form-control w-full max-w-xs">
                    <div class="label">
                        <span class="label-text">{"District"}</span>
                    </div>
                    <select id="location" class="select select-bordered" {onchange}>
                        <option value="" selected={props.selected.is_empty()}>{"Select a district"}</option>
                        { for KNOWN_LOCATIONS.iter().map(|name| html! {
                            <option value={*name} selected={props.selected == *name}>{*name}</option>
                        })}
                    </select>
                </label>
                <div class="flex gap-2">
                    <button id="analyzeBtn" class="btn btn-primary" onclick={onclick_analyze}>
                        <i class="fas fa-chart-line"></i>
                        {" Analyze"}
                    </button>
                    <button id="downloadBtn" class="btn btn-outline" onclick={onclick_download}>
                        <i class="fas fa-file-pdf"></i>
                        {" Download Report"}
                    </button>
                </div>
            </div>
        </div>
    }
}
