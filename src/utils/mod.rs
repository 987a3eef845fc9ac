pub mod environment;

pub use environment::{LOG_DIR_ENV, default_log_dir, resolve_log_dir};
