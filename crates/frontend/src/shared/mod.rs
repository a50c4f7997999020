pub mod app_info;
pub mod bridge;
pub mod clipboard;
pub mod components;
pub mod dialog;
pub mod icons;
pub mod modal;
pub mod path_utils;
pub mod settings;
pub mod theme;
pub mod toast;
