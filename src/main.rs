use std::rc::Rc;

mod components;
mod config;
mod controller;
mod error;
mod live;
mod logging;
mod model;
mod protocol;
mod render;
mod state;
mod util;

use components::app::{App, AppProps};
use config::PageConfig;

fn main() {
    let config = match PageConfig::from_page() {
        Ok(cfg) => cfg,
        Err(e) => {
            logging::init(tracing::level_filters::LevelFilter::INFO);
            tracing::error!("cannot start sandwich round: {e}");
            return;
        }
    };
    logging::init(config.level());
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
