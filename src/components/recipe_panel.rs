use crate::controller::UiAction;
use crate::render::RecipeHint;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipePanelProps {
    pub recipes: Vec<String>,
    pub hint: Option<RecipeHint>,
    pub on_action: Callback<UiAction>,
}

#[function_component]
pub fn RecipePanel(props: &RecipePanelProps) -> Html {
    let on_change = {
        let cb = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let name = select.value();
            cb.emit(UiAction::PreviewRecipe((!name.is_empty()).then_some(name)));
        })
    };
    let shown = props.hint.as_ref().map(|h| h.recipe.as_str()).unwrap_or("");

    html! {<div id="recipe" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Recipes"}</div>
        <select onchange={on_change} style="width:100%;">
            <option value="" selected={shown.is_empty()}>{"Look up a recipe…"}</option>
            { for props.recipes.iter().map(|name| html! {
                <option value={name.clone()} selected={shown == name.as_str()}>{ name.clone() }</option>
            }) }
        </select>
        <ul style="margin:6px 0 0 18px; padding:0; font-size:13px;">
            { for props.hint.iter().flat_map(|h| h.items.iter()).map(|item| html! { <li>{ item.clone() }</li> }) }
        </ul>
    </div>}
}
