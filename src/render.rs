//! Projection of the round state onto the presentation surface.
//!
//! `Screen` is the surface: a plain snapshot the yew components draw from.
//! Every `render_*` call overwrites its own region of the screen and nothing else,
//! so repeating a call with the same input is harmless. The recipe hint and the
//! error notice live only here; the round state never tracks them.

use std::rc::Rc;

use tracing::warn;

use crate::config::PageConfig;
use crate::model::GameState;
use crate::util::format_clock;

pub const ORDER_PLACEHOLDER: &str = "Waiting for order…";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblyEntry {
    /// Position in the assembly, handed back by the remove button.
    pub index: usize,
    pub label: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeHint {
    pub recipe: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    pub order: String,
    pub timer: String,
    pub counter: String,
    pub assembly: Vec<AssemblyEntry>,
    pub submit_enabled: bool,
    pub recipe_hint: Option<RecipeHint>,
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Renderer {
    config: Rc<PageConfig>,
}

impl Renderer {
    pub fn new(config: Rc<PageConfig>) -> Self {
        Self { config }
    }

    pub fn render_all(&self, screen: &mut Screen, state: &GameState, remaining: i64) {
        self.render_order(screen, state.order.as_deref());
        self.render_timer(screen, remaining);
        self.render_counter(screen, state.count);
        self.render_assembly(screen, state.assembled());
    }

    pub fn render_order(&self, screen: &mut Screen, order: Option<&str>) {
        screen.order = order.unwrap_or(ORDER_PLACEHOLDER).to_string();
    }

    pub fn render_timer(&self, screen: &mut Screen, remaining: i64) {
        screen.timer = format_clock(remaining);
    }

    pub fn render_counter(&self, screen: &mut Screen, count: u32) {
        screen.counter = count.to_string();
    }

    pub fn render_assembly(&self, screen: &mut Screen, components: &[String]) {
        screen.assembly = components
            .iter()
            .enumerate()
            .map(|(index, name)| AssemblyEntry {
                index,
                label: name.clone(),
                image: self.config.image_for(name),
            })
            .collect();
        screen.submit_enabled = !components.is_empty();
    }

    pub fn show_recipe_hint(&self, screen: &mut Screen, recipe: &str) {
        match self.config.recipe(recipe) {
            Some(items) => {
                screen.recipe_hint = Some(RecipeHint {
                    recipe: recipe.to_string(),
                    items: items.to_vec(),
                });
            }
            None => {
                warn!("no recipe named {recipe:?} in menu");
                screen.recipe_hint = None;
            }
        }
    }

    pub fn hide_recipe_hint(&self, screen: &mut Screen) {
        screen.recipe_hint = None;
    }

    pub fn show_error(&self, screen: &mut Screen, message: impl Into<String>) {
        screen.error = Some(message.into());
    }

    pub fn hide_error(&self, screen: &mut Screen) {
        screen.error = None;
    }
}

pub fn mismatch_message(mismatches: u32) -> String {
    format!("{mismatches} ingredients mismatched")
}
