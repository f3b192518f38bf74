use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorModalProps {
    pub message: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ErrorModal(props: &ErrorModalProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div id="error" style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #f85149; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px; color:#f85149;">{"Wrong sandwich"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div class="modal-body">{ message }</div>
            <button onclick={close_cb}>{"Try again"}</button>
        </div>
    </div>}
}
