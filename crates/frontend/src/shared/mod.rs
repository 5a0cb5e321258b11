pub mod api_utils;
pub mod components;
pub mod config;
pub mod export;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod record_form;
pub mod toast;
