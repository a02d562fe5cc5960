mod config_reader;

pub use config_reader::{CONFIG_FILE, LEARNPATH_DIR, default_config_path, load_config};
