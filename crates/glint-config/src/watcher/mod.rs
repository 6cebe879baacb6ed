//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file's directory, with a
//! debounce window so an editor's write-then-rename save produces one
//! reload.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEFAULT_DEBOUNCE};
