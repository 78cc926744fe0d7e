pub mod components;
pub mod dom_utils;
pub mod icons;
pub mod page_config;
