//! Tests for panel_events

use super::*;
use crate::criteria::SearchField;
use crate::entity::EntityKind;
use crate::events::PanelEvent;
use crate::panel::layout::ActiveLayout;
use crate::test_utils::test_helpers::{key, key_with_mods, test_panel};

fn type_text<C: AppContext>(panel: &mut SearchPanel<C>, text: &str) {
    for c in text.chars() {
        handle_panel_key(panel, key(KeyCode::Char(c))).unwrap();
    }
}

#[test]
fn test_typing_and_enter_submits_name() {
    let (mut panel, receiver) = test_panel(EntityKind::Lead);
    type_text(&mut panel, "Acme");
    handle_panel_key(&mut panel, key(KeyCode::Enter)).unwrap();

    match receiver.try_recv().unwrap() {
        PanelEvent::SearchRequested(criteria) => {
            assert_eq!(criteria.get("lead-name"), SearchField::and("Acme").as_ref());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_space_in_name_field_is_text() {
    let (mut panel, receiver) = test_panel(EntityKind::Lead);
    type_text(&mut panel, "a b");
    handle_panel_key(&mut panel, key(KeyCode::Enter)).unwrap();

    match receiver.try_recv().unwrap() {
        PanelEvent::SearchRequested(criteria) => {
            assert_eq!(criteria.get("lead-name"), SearchField::and("a b").as_ref());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_tab_then_space_toggles_my_items() {
    let (mut panel, receiver) = test_panel(EntityKind::Lead);
    handle_panel_key(&mut panel, key(KeyCode::Tab)).unwrap();
    handle_panel_key(&mut panel, key(KeyCode::Char(' '))).unwrap();
    handle_panel_key(&mut panel, key(KeyCode::Tab)).unwrap();
    handle_panel_key(&mut panel, key(KeyCode::Enter)).unwrap();

    match receiver.try_recv().unwrap() {
        PanelEvent::SearchRequested(criteria) => {
            assert!(criteria.get("lead-assignuser").is_some());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_ctrl_a_toggles_layout() {
    let (mut panel, _receiver) = test_panel(EntityKind::Task);
    let ctrl_a = key_with_mods(KeyCode::Char('a'), KeyModifiers::CONTROL);

    assert!(handle_panel_key(&mut panel, ctrl_a).unwrap());
    assert!(panel.layout().is_advanced());
    handle_panel_key(&mut panel, ctrl_a).unwrap();
    assert!(matches!(panel.layout(), ActiveLayout::Basic(_)));
}

#[test]
fn test_advanced_link_via_back_tab() {
    let (mut panel, _receiver) = test_panel(EntityKind::Lead);
    handle_panel_key(&mut panel, key(KeyCode::BackTab)).unwrap();
    handle_panel_key(&mut panel, key(KeyCode::Enter)).unwrap();
    assert!(panel.layout().is_advanced());
}

#[test]
fn test_ctrl_n_requires_permission_header() {
    let (mut panel, receiver) = test_panel(EntityKind::Lead);
    let ctrl_n = key_with_mods(KeyCode::Char('n'), KeyModifiers::CONTROL);

    assert!(!handle_panel_key(&mut panel, ctrl_n).unwrap());
    panel.build_title();
    assert!(handle_panel_key(&mut panel, ctrl_n).unwrap());
    assert_eq!(
        receiver.try_recv().unwrap(),
        PanelEvent::GotoAdd {
            entity: EntityKind::Lead
        }
    );
}

#[test]
fn test_ctrl_t_cycles_text_mode_in_advanced() {
    let (mut panel, receiver) = test_panel(EntityKind::Lead);
    panel.select_advanced_layout();
    handle_panel_key(
        &mut panel,
        key_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL),
    )
    .unwrap();
    type_text(&mut panel, "acme");
    handle_panel_key(&mut panel, key(KeyCode::Enter)).unwrap();

    match receiver.try_recv().unwrap() {
        PanelEvent::SearchRequested(criteria) => {
            assert!(matches!(
                criteria.get("lead-name"),
                Some(SearchField::Text {
                    mode: crate::criteria::StringMode::Or,
                    ..
                })
            ));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_left_right_on_button_is_not_consumed() {
    let (mut panel, _receiver) = test_panel(EntityKind::Lead);
    handle_panel_key(&mut panel, key(KeyCode::Tab)).unwrap();
    assert!(!handle_panel_key(&mut panel, key(KeyCode::Right)).unwrap());
}

#[test]
fn test_unbound_key_outside_input_is_not_consumed() {
    let (mut panel, _receiver) = test_panel(EntityKind::Lead);
    handle_panel_key(&mut panel, key(KeyCode::Tab)).unwrap();
    assert!(!handle_panel_key(&mut panel, key(KeyCode::Char('x'))).unwrap());
}
