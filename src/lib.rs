//! inistore - lazy-reloading INI-style settings.
//!
//! A small settings accessor for flat `KEY=VALUE` files: parse once,
//! cache in memory, and transparently reload when the file's modification
//! time advances. Every getter takes a default and always returns a
//! value; missing files, malformed lines, and unparsable values all
//! degrade to the default instead of surfacing errors.
//!
//! ```no_run
//! use inistore::SettingsStore;
//! use std::time::Duration;
//!
//! let settings = SettingsStore::with_file("app.ini");
//! let host = settings.get_str("host", "localhost");
//! let port = settings.get_int("port", 6667);
//! let idle = settings.get_duration("idle_timeout", Duration::from_secs(90));
//! ```
//!
//! For programs that prefer one ambient store, the [`global`] module
//! wraps a shared instance behind the same surface.

mod parse;

pub mod duration;
pub mod global;
pub mod store;

pub use duration::{DurationError, parse_duration};
pub use store::{DEFAULT_FILE, SettingsStore};
