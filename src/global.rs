//! Process-wide convenience accessor.
//!
//! A thin wrapper around one shared [`SettingsStore`], for programs that
//! want ambient `global::get_str(..)` calls instead of threading a store
//! through every component. Construct [`SettingsStore`] values directly
//! when isolated stores suit the program better; nothing here is
//! required.

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

use crate::store::SettingsStore;

static STORE: OnceLock<SettingsStore> = OnceLock::new();

/// The shared store, created on first use.
pub fn store() -> &'static SettingsStore {
    STORE.get_or_init(SettingsStore::new)
}

/// See [`SettingsStore::set_file`].
pub fn set_file<P: Into<PathBuf>>(path: P) {
    store().set_file(path);
}

/// See [`SettingsStore::last_loaded`].
pub fn last_loaded() -> SystemTime {
    store().last_loaded()
}

/// See [`SettingsStore::get_str`].
pub fn get_str(key: &str, default: &str) -> String {
    store().get_str(key, default)
}

/// See [`SettingsStore::get_int`].
pub fn get_int(key: &str, default: i32) -> i32 {
    store().get_int(key, default)
}

/// See [`SettingsStore::get_int64`].
pub fn get_int64(key: &str, default: i64) -> i64 {
    store().get_int64(key, default)
}

/// See [`SettingsStore::get_bool`].
pub fn get_bool(key: &str, default: bool) -> bool {
    store().get_bool(key, default)
}

/// See [`SettingsStore::get_strings`].
pub fn get_strings(key: &str) -> Vec<String> {
    store().get_strings(key)
}

/// See [`SettingsStore::get_strings_with`].
pub fn get_strings_with<F>(key: &str, transform: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    store().get_strings_with(key, transform)
}

/// See [`SettingsStore::require_set`].
pub fn require_set(keys: &[&str]) -> bool {
    store().require_set(keys)
}

/// See [`SettingsStore::get_duration`].
pub fn get_duration(key: &str, default: Duration) -> Duration {
    store().get_duration(key, default)
}
