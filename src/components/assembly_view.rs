use crate::controller::UiAction;
use crate::render::AssemblyEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AssemblyViewProps {
    pub entries: Vec<AssemblyEntry>,
    pub submit_enabled: bool,
    pub on_action: Callback<UiAction>,
    #[prop_or(false)]
    pub debug: bool,
}

#[function_component]
pub fn AssemblyView(props: &AssemblyViewProps) -> Html {
    let reset_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(UiAction::Reset))
    };
    let submit_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(UiAction::Submit))
    };
    let complete_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(UiAction::Autocomplete))
    };

    html! {<div id="main-column" style="display:flex; flex-direction:column; gap:8px;">
        <ul id="assembly" style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px; min-height:120px;">
            { for props.entries.iter().map(|entry| {
                let idx = entry.index;
                let cb = props.on_action.clone();
                let del_cb = Callback::from(move |_| cb.emit(UiAction::RemoveComponent(idx)));
                html! {
                    <li style={format!("display:flex; justify-content:space-between; align-items:center; padding:6px 8px; border-radius:6px; background-size:cover; background-image:url({});", entry.image)}>
                        <span class="badge badge-light">{ entry.label.clone() }</span>
                        <button type="button" class="del-btn" data-idx={idx.to_string()} onclick={del_cb}>{"❌"}</button>
                    </li>
                }
            }) }
        </ul>
        <div style="display:flex; gap:8px;">
            <button id="reset-btn" onclick={reset_cb}>{"Reset"}</button>
            <button id="submit-btn" onclick={submit_cb} disabled={!props.submit_enabled}>{"Submit"}</button>
            { if props.debug { html!{ <button onclick={complete_cb} style="opacity:0.6;">{"Autocomplete"}</button> } } else { html!{} } }
        </div>
    </div>}
}
