//! Tests for global key handling

use super::*;
use crate::config::Config;
use crate::entity::EntityKind;
use crate::saved_filter::SavedFilter;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app, test_context};

#[test]
fn test_esc_quits_without_output() {
    let mut app = test_app(EntityKind::Lead);
    assert!(handle_global_keys(&mut app, key(KeyCode::Esc)));
    assert!(app.should_quit());
    assert_eq!(app.output_mode(), None);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app(EntityKind::Lead);
    assert!(handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)
    ));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_o_quits_with_criteria_output() {
    let mut app = test_app(EntityKind::Lead);
    handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('o'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
    assert_eq!(app.output_mode(), Some(OutputMode::Criteria));
}

#[test]
fn test_f2_without_filters_warns() {
    let mut app = test_app(EntityKind::Task);
    assert!(handle_global_keys(&mut app, key(KeyCode::F(2))));
    assert!(!app.panel.saved_filters().is_visible());
    assert_eq!(
        app.notification.current_message(),
        Some("No saved filters for tasks")
    );
}

#[test]
fn test_f2_opens_popup() {
    let config = Config {
        saved_filters: vec![SavedFilter {
            name: "Hot".to_string(),
            entity: EntityKind::Lead,
            fields: vec![],
        }],
        ..Config::default()
    };
    let mut app = App::new(EntityKind::Lead, test_context(), &config);

    handle_global_keys(&mut app, key(KeyCode::F(2)));
    assert!(app.panel.saved_filters().is_visible());
}

#[test]
fn test_plain_characters_are_not_global() {
    let mut app = test_app(EntityKind::Lead);
    assert!(!handle_global_keys(&mut app, key(KeyCode::Char('q'))));
    assert!(!app.should_quit());
}
