//! External paths for the application
use home::home_dir;
use std::{path::PathBuf, sync::LazyLock};

/// Default config dir for the application
///
/// [None] if the home dir can't be determined.
pub static CONFIG_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    if cfg!(debug_assertions) {
        return Some(PathBuf::from("test"));
    }

    home_dir().map(|home| home.join(".config/bicycle/"))
});

/// Default config file for the application
pub static CONFIG_FILE: LazyLock<Option<PathBuf>> =
    LazyLock::new(|| CONFIG_PATH.as_ref().map(|dir| dir.join("config.toml")));
