//! The process-wide convenience accessor.
//!
//! Lives in its own test binary: the shared store is process state, so
//! everything exercising it stays in one test function.

use std::time::{Duration, SystemTime};

use inistore::global;

#[test]
fn global_wrapper_tracks_one_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    std::fs::write(
        &path,
        "HOST=irc.example.net\nPORT=6667\nADMINS = alice , bob\nTIMEOUT=45s\nVERBOSE=yes\n",
    )
    .unwrap();

    global::set_file(&path);

    assert_eq!(global::get_str("host", ""), "irc.example.net");
    assert_eq!(global::get_int("PORT", 0), 6667);
    assert_eq!(global::get_int64("PORT", 0), 6667);
    assert!(global::get_bool("VERBOSE", false));
    assert_eq!(global::get_strings("ADMINS"), vec!["alice", "bob"]);
    assert_eq!(
        global::get_strings_with("ADMINS", |s| s.to_uppercase()),
        vec!["ALICE", "BOB"]
    );
    assert_eq!(
        global::get_duration("TIMEOUT", Duration::ZERO),
        Duration::from_secs(45)
    );
    assert!(global::require_set(&["HOST", "PORT"]));
    assert!(!global::require_set(&["HOST", "MISSING"]));
    assert!(global::last_loaded() > SystemTime::UNIX_EPOCH);

    // The same instance is handed back on every call.
    assert!(std::ptr::eq(global::store(), global::store()));
}
