//! The settings store: cached entries plus lazy stat-based reload.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;
use tracing::debug;

use crate::duration::parse_duration;
use crate::parse::parse_line;

/// File consulted by a store created with [`SettingsStore::new`].
pub const DEFAULT_FILE: &str = "config.ini";

/// Everything the lock guards: the file being watched, the entries parsed
/// from it, and the modification time they were parsed at. The three are
/// only ever updated together.
struct Inner {
    path: PathBuf,
    entries: HashMap<String, String>,
    last_loaded: SystemTime,
}

/// A lazily reloading key/value settings store.
///
/// The store caches the parsed contents of one flat `KEY=VALUE` file and
/// checks the file's modification time on every lookup, reloading before
/// the lookup when the file has changed on disk. Keys are
/// case-insensitive. Every accessor takes a default and always returns a
/// value; a missing file, a malformed line, or an unparsable value
/// degrades to the default instead of surfacing an error.
pub struct SettingsStore {
    inner: Mutex<Inner>,
}

impl SettingsStore {
    /// Create a store reading [`DEFAULT_FILE`] from the working
    /// directory, loading it immediately.
    pub fn new() -> Self {
        Self::with_file(DEFAULT_FILE)
    }

    /// Create a store reading from `path`, loading it immediately.
    ///
    /// A missing or unreadable file is not an error: the store starts
    /// empty and every getter serves its default until the file appears.
    pub fn with_file<P: Into<PathBuf>>(path: P) -> Self {
        let mut inner = Inner {
            path: path.into(),
            entries: HashMap::new(),
            last_loaded: SystemTime::UNIX_EPOCH,
        };
        reload(&mut inner);
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Repoint the store at a new file and reload from it immediately.
    pub fn set_file<P: Into<PathBuf>>(&self, path: P) {
        let mut inner = self.inner.lock();
        inner.path = path.into();
        inner.last_loaded = SystemTime::UNIX_EPOCH;
        reload(&mut inner);
    }

    /// Modification time of the file as of the last successful stat.
    ///
    /// Starts at the Unix epoch, which is what forces the first lookup
    /// on a freshly repointed store to load the file.
    pub fn last_loaded(&self) -> SystemTime {
        self.inner.lock().last_loaded
    }

    /// Look up `key` (case-insensitive), returning `default` when unset.
    ///
    /// This is the central accessor: it stats the file on every call and
    /// reloads first when the modification time is strictly newer than
    /// the last load. Stat, reload, and lookup happen under one lock
    /// acquisition, so a reload triggered here is complete before any
    /// other caller can observe the store.
    pub fn get_str(&self, key: &str, default: &str) -> String {
        let mut inner = self.inner.lock();
        if let Ok(modified) = std::fs::metadata(&inner.path).and_then(|m| m.modified())
            && modified > inner.last_loaded
        {
            reload(&mut inner);
        }
        match inner.entries.get(&key.to_uppercase()) {
            Some(value) => value.clone(),
            None => default.to_string(),
        }
    }

    /// Look up `key` as an `i32`, returning `default` when unset or not
    /// an integer.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get_str(key, &default.to_string())
            .parse()
            .unwrap_or(default)
    }

    /// Look up `key` as an `i64`, returning `default` when unset or not
    /// an integer.
    pub fn get_int64(&self, key: &str, default: i64) -> i64 {
        self.get_str(key, &default.to_string())
            .parse()
            .unwrap_or(default)
    }

    /// Look up `key` as a boolean, returning `default` when unset or not
    /// recognizably boolean.
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `on`/`off`, and `1`/`0`,
    /// case-insensitively.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_str(key, "").to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            _ => default,
        }
    }

    /// Look up `key` as a comma-separated list.
    ///
    /// Pieces are trimmed and empty pieces dropped; an unset key yields
    /// an empty vector, never an absent one.
    pub fn get_strings(&self, key: &str) -> Vec<String> {
        self.get_strings_with(key, str::to_string)
    }

    /// Like [`Self::get_strings`], applying `transform` to each piece.
    pub fn get_strings_with<F>(&self, key: &str, transform: F) -> Vec<String>
    where
        F: Fn(&str) -> String,
    {
        let raw = self.get_str(key, "");
        if raw.is_empty() {
            return Vec::new();
        }
        raw.split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(transform)
            .collect()
    }

    /// True when every key in `keys` resolves to a non-empty string.
    /// Stops at the first unset or empty one.
    pub fn require_set(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| !self.get_str(key, "").is_empty())
    }

    /// Look up `key` as a duration expression such as `"300ms"` or
    /// `"2h45m"`, returning `default` when unset or unparsable.
    pub fn get_duration(&self, key: &str, default: Duration) -> Duration {
        parse_duration(&self.get_str(key, "")).unwrap_or(default)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild `inner.entries` from `inner.path`.
///
/// The entry map is replaced wholesale; a missing or unreadable file
/// leaves it empty. The last-loaded timestamp is taken from a fresh stat
/// after the scan and kept unchanged when the stat fails.
fn reload(inner: &mut Inner) {
    let mut entries = HashMap::new();
    match File::open(&inner.path) {
        Ok(file) => {
            for line in BufReader::new(file).lines() {
                // A read error mid-scan keeps whatever parsed so far.
                let Ok(line) = line else { break };
                if let Some((key, value)) = parse_line(&line) {
                    entries.insert(key, value);
                }
            }
            debug!(path = %inner.path.display(), entries = entries.len(), "settings reloaded");
        }
        Err(err) => {
            debug!(path = %inner.path.display(), error = %err, "settings file unreadable, serving defaults");
        }
    }
    inner.entries = entries;
    if let Ok(modified) = std::fs::metadata(&inner.path).and_then(|m| m.modified()) {
        inner.last_loaded = modified;
    }
}
