//! Static page configuration handed over by the experiment page in `js_vars`.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::util::default_image_path;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageConfig {
    /// Round length in seconds.
    pub duration: u32,
    /// Component -> image URL.
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    /// Recipe -> expected components in order.
    #[serde(default)]
    pub menu: BTreeMap<String, Vec<String>>,
    /// Category -> components, for the ingredient pickers.
    #[serde(default)]
    pub ingredients: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads `window.js_vars` from the hosting page.
    pub fn from_page() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::Missing("window"))?;
        let vars = js_sys::Reflect::get(&window, &JsValue::from_str("js_vars"))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .ok_or(ConfigError::Missing("js_vars"))?;
        let raw = js_sys::JSON::stringify(&vars)
            .ok()
            .and_then(|s| s.as_string())
            .ok_or(ConfigError::Missing("js_vars"))?;
        Self::from_json(&raw)
    }

    pub fn image_for(&self, component: &str) -> String {
        self.images
            .get(component)
            .cloned()
            .unwrap_or_else(|| default_image_path(component))
    }

    pub fn recipe(&self, name: &str) -> Option<&[String]> {
        self.menu.get(name).map(Vec::as_slice)
    }

    pub fn recipe_names(&self) -> impl Iterator<Item = &str> {
        self.menu.keys().map(String::as_str)
    }

    /// Picker groups; without an explicit grouping every known image is one group.
    pub fn ingredient_groups(&self) -> Vec<(String, Vec<String>)> {
        match &self.ingredients {
            Some(groups) => groups
                .iter()
                .map(|(category, items)| (category.clone(), items.clone()))
                .collect(),
            None => vec![("Ingredients".to_string(), self.images.keys().cloned().collect())],
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or(LevelFilter::INFO)
    }
}
