//! Integration tests for logger behavior.

use course_advisor::logger::{current_level, set_level, set_level_from_str, Level};
use course_advisor::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("Warning"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("DEBUG"));
    assert_eq!(current_level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn levels_are_ordered_by_severity() {
    assert!(Level::Error < Level::Warn);
    assert!(Level::Info < Level::Debug);
    assert_eq!(Level::parse("err"), Some(Level::Error));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}
