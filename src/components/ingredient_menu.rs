use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IngredientPickerProps {
    pub category: AttrValue,
    pub items: Vec<String>,
    pub on_add: Callback<String>,
}

/// One category dropdown with its add button. The selection is cleared after each add.
#[function_component]
pub fn IngredientPicker(props: &IngredientPickerProps) -> Html {
    let selected = use_state(String::new);

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };
    let add_cb = {
        let selected = selected.clone();
        let cb = props.on_add.clone();
        Callback::from(move |_| {
            cb.emit((*selected).clone());
            selected.set(String::new());
        })
    };

    html! {<div class="input-group" style="display:flex; gap:6px; align-items:center;">
        <span style="min-width:80px; font-weight:500;">{ props.category.clone() }</span>
        <select onchange={on_change} style="flex:1;">
            <option value="" selected={selected.is_empty()}>{"Choose…"}</option>
            { for props.items.iter().map(|item| html! {
                <option value={item.clone()} selected={*selected == *item}>{ item.clone() }</option>
            }) }
        </select>
        <button class="add-btn" onclick={add_cb} disabled={selected.is_empty()}>{"Add"}</button>
    </div>}
}

#[derive(Properties, PartialEq, Clone)]
pub struct IngredientMenuProps {
    pub groups: Vec<(String, Vec<String>)>,
    pub on_add: Callback<String>,
}

#[function_component]
pub fn IngredientMenu(props: &IngredientMenuProps) -> Html {
    html! {<div id="menu-column" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:260px; display:flex; flex-direction:column; gap:6px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Ingredients"}</div>
        { for props.groups.iter().map(|(category, items)| html! {
            <IngredientPicker
                key={category.clone()}
                category={category.clone()}
                items={items.clone()}
                on_add={props.on_add.clone()}
            />
        }) }
    </div>}
}
