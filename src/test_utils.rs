//! Shared test utilities for crmfind
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::context::SessionContext;
    use crate::entity::{EntityKind, PanelDefinition, Permission};
    use crate::events::{self, EventReceiver};
    use crate::panel::SearchPanel;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// User `jdoe` in account 42 / project 7 with every write permission
    /// and all pickers populated
    pub fn test_context() -> SessionContext {
        let mut config = Config::default();
        config.session.username = "jdoe".to_string();
        config.session.account_id = Some(42);
        config.session.project_id = Some(7);
        config.session.write_permissions = vec![
            Permission::CrmLead,
            Permission::CrmAccount,
            Permission::ProjectTask,
        ];
        config.selectors.users = vec!["jdoe".to_string(), "asmith".to_string()];
        config.selectors.project_members = vec!["jdoe".to_string(), "mlee".to_string()];
        config.selectors.milestones = vec!["M1".to_string(), "M2".to_string()];
        SessionContext::from_config(&config)
    }

    /// Panel wired to a fresh channel; keep the receiver alive to observe
    /// dispatched events
    pub fn test_panel(entity: EntityKind) -> (SearchPanel<SessionContext>, EventReceiver) {
        let (sender, receiver) = events::channel();
        let panel = SearchPanel::new(PanelDefinition::for_entity(entity), test_context(), sender);
        (panel, receiver)
    }

    pub fn test_app(entity: EntityKind) -> App {
        App::new(entity, test_context(), &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
