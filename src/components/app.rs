use super::{
    assembly_view::AssemblyView, error_modal::ErrorModal, ingredient_menu::IngredientMenu,
    order_panel::OrderPanel, recipe_panel::RecipePanel,
};
use crate::config::PageConfig;
use crate::controller::{Controller, Phase, UiAction};
use crate::live::{FormSubmitter, LiveChannel, OtreeLive};
use gloo::timers::callback::Interval;
use std::rc::Rc;
use tracing::error;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<PageConfig>,
}

/// Composition root: owns the controller, wires the live channel, the round
/// interval and the components' actions into it.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let controller = {
        let config = props.config.clone();
        use_mut_ref(move || Controller::new(config, OtreeLive, FormSubmitter::default()))
    };
    let redraw = use_force_update();

    // Subscribe, send `start` and run the round clock for the page's lifetime
    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let subscription = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                OtreeLive.subscribe(Box::new(move |delivery| {
                    controller.borrow_mut().handle_inbound(delivery);
                    redraw.force_update();
                }))
            };
            let subscription = match subscription {
                Ok(s) => Some(s),
                Err(e) => {
                    error!("live channel unavailable: {e}");
                    None
                }
            };

            controller.borrow_mut().start();
            redraw.force_update();

            let second_tick = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Interval::new(1000, move || {
                    // The interval keeps firing after expiry; only live rounds redraw.
                    let was_running = controller.borrow().phase() != Phase::Finished;
                    controller.borrow_mut().tick();
                    if was_running {
                        redraw.force_update();
                    }
                })
            };

            move || {
                drop(second_tick);
                if let Some(subscription) = subscription {
                    subscription.dispose();
                }
            }
        });
    }

    let on_action = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |action: UiAction| {
            controller.borrow_mut().dispatch(action);
            redraw.force_update();
        })
    };
    let on_add = {
        let cb = on_action.clone();
        Callback::from(move |name: String| cb.emit(UiAction::AddComponent(name)))
    };
    let on_close_error = {
        let cb = on_action.clone();
        Callback::from(move |_| cb.emit(UiAction::DismissError))
    };

    let screen = controller.borrow().screen().clone();
    let config = &props.config;

    html! {
        <div id="root" style="position:relative; display:flex; gap:16px; padding:12px; align-items:flex-start;">
            <IngredientMenu groups={config.ingredient_groups()} on_add={on_add} />
            <div style="display:flex; flex-direction:column; gap:12px;">
                <OrderPanel
                    order={screen.order.clone()}
                    timer={screen.timer.clone()}
                    counter={screen.counter.clone()}
                />
                <AssemblyView
                    entries={screen.assembly.clone()}
                    submit_enabled={screen.submit_enabled}
                    on_action={on_action.clone()}
                    debug={config.debug}
                />
            </div>
            <RecipePanel
                recipes={config.recipe_names().map(str::to_string).collect::<Vec<_>>()}
                hint={screen.recipe_hint.clone()}
                on_action={on_action.clone()}
            />
            <ErrorModal message={screen.error.clone()} on_close={on_close_error} />
        </div>
    }
}
