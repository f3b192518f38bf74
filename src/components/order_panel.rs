use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderPanelProps {
    pub order: AttrValue,
    pub timer: AttrValue,
    pub counter: AttrValue,
}

#[function_component]
pub fn OrderPanel(props: &OrderPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={icon_style}>{"🥪"}</span>
                <span style={label_style}>{"Order"}</span>
                <span id="order" style={format!("{} color:#58a6ff;", value_style)}>{ props.order.clone() }</span>
            </div>
            <div style={row_style}>
                <span style={icon_style}>{"⏱"}</span>
                <span style={label_style}>{"Time left"}</span>
                <span id="timer" style={format!("{} color:#f0883e;", value_style)}>{ props.timer.clone() }</span>
            </div>
            <div style={row_style}>
                <span style={icon_style}>{"✔"}</span>
                <span style={label_style}>{"Completed"}</span>
                <span id="counter" style={format!("{} color:#2ea043;", value_style)}>{ props.counter.clone() }</span>
            </div>
        </div>
    }
}
