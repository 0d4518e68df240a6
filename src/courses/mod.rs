mod config;
mod error;
pub mod layout;
mod resolve;

pub use config::{
    config_file_path, load_or_default, save, workspace_root, NavConfig, CONFIG_FILE_NAME,
};
pub use error::NavError;
pub use layout::{
    ensure_dir, WeekLayout, CLASSWORK_SUBDIR, HOMEWORK_ANSWERS_SUBDIR, HOMEWORK_SRC_SUBDIR,
    HOMEWORK_SUBDIR,
};
pub use resolve::{find_latest, list_entry_names, LeafMode, NavRequest, Navigator};
