mod config_buttons;
mod config_item_list;
mod save_config_dialog;
mod select_config;

pub use config_buttons::ConfigButtons;
pub use config_item_list::ConfigItemList;
pub use save_config_dialog::SaveConfigDialog;
pub use select_config::SelectDatabaseConfig;
