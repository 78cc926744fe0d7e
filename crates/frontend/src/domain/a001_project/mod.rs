pub mod api;
pub mod markup;
pub mod ui;
