//! Core round state for the sandwich shop.
//! Pure data: no rendering, no messaging.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Round length in seconds, fixed for the page's lifetime.
    duration: u32,
    /// Target recipe issued by the server; `None` until the first order arrives.
    pub order: Option<String>,
    /// Player's assembly, most recently added component first.
    assembled: Vec<String>,
    /// Completed orders as last reported by the server.
    pub count: u32,
}

impl GameState {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            order: None,
            assembled: Vec::new(),
            count: 0,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn assembled(&self) -> &[String] {
        &self.assembled
    }

    pub fn reset(&mut self) {
        self.assembled.clear();
    }

    /// Prepends `name`; unknown components are accepted, the server validates.
    pub fn add_component(&mut self, name: impl Into<String>) {
        self.assembled.insert(0, name.into());
    }

    /// Removes the entry at `idx`. Out-of-range indices leave the assembly untouched
    /// and return `None`.
    pub fn remove_component(&mut self, idx: usize) -> Option<String> {
        if idx < self.assembled.len() {
            Some(self.assembled.remove(idx))
        } else {
            None
        }
    }

    /// Replaces the assembly wholesale, used by the debug autocomplete.
    pub fn fill_from_recipe(&mut self, recipe: &[String]) {
        self.assembled = recipe.to_vec();
    }

    /// Applies a server-issued order; a new order always starts from an empty assembly.
    pub fn set_order(&mut self, order: impl Into<String>) {
        self.order = Some(order.into());
        self.reset();
    }
}
