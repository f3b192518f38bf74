pub mod app;
pub mod assembly_view;
pub mod error_modal;
pub mod ingredient_menu;
pub mod order_panel;
pub mod recipe_panel;
