//! Session context
//!
//! The external services a search panel consults: who the user is, which
//! account/project they are working in, what they may write, and how
//! strings are localized.

use std::collections::{HashMap, HashSet};

use crate::config::{Config, SelectorConfig};
use crate::entity::{EntityKind, Permission, ScopeKind, SelectorKind};

/// Localizable strings shown by the panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ViewListTitle(EntityKind),
    NewButton(EntityKind),
    NamePrompt(EntityKind),
    ButtonSearch,
    ButtonClear,
    ButtonAdvancedSearch,
    ButtonBasicSearch,
    SearchMyItems,
    SavedFilterNone,
}

impl MessageKey {
    /// Stable id used for overrides in the `[messages]` config table
    pub fn id(&self) -> String {
        match self {
            MessageKey::ViewListTitle(entity) => format!("{}.view_list_title", entity),
            MessageKey::NewButton(entity) => format!("{}.button_new", entity),
            MessageKey::NamePrompt(entity) => format!("{}.name_prompt", entity),
            MessageKey::ButtonSearch => "generic.button_search".to_string(),
            MessageKey::ButtonClear => "generic.button_clear".to_string(),
            MessageKey::ButtonAdvancedSearch => "generic.button_advanced_search".to_string(),
            MessageKey::ButtonBasicSearch => "generic.button_basic_search".to_string(),
            MessageKey::SearchMyItems => "generic.search_my_items".to_string(),
            MessageKey::SavedFilterNone => "generic.saved_filter_none".to_string(),
        }
    }

    pub fn default_text(&self) -> String {
        match self {
            MessageKey::ViewListTitle(entity) => match entity {
                EntityKind::Lead => "Leads".to_string(),
                EntityKind::Task => "Tasks".to_string(),
                EntityKind::Account => "Accounts".to_string(),
            },
            MessageKey::NewButton(entity) => match entity {
                EntityKind::Lead => "New Lead".to_string(),
                EntityKind::Task => "New Task".to_string(),
                EntityKind::Account => "New Account".to_string(),
            },
            MessageKey::NamePrompt(entity) => format!("Query by {} name", entity),
            MessageKey::ButtonSearch => "Search".to_string(),
            MessageKey::ButtonClear => "Clear".to_string(),
            MessageKey::ButtonAdvancedSearch => "Advanced Search".to_string(),
            MessageKey::ButtonBasicSearch => "Basic Search".to_string(),
            MessageKey::SearchMyItems => "My Items".to_string(),
            MessageKey::SavedFilterNone => "All".to_string(),
        }
    }
}

/// Collaborator services a panel depends on.
///
/// Every call is synchronous and infallible from the panel's point of view.
pub trait AppContext {
    fn username(&self) -> &str;

    /// Current id for the given scope, read fresh on every submission.
    /// `None` when the session has no id for that scope.
    fn scope_id(&self, kind: ScopeKind) -> Option<i64>;

    fn can_write(&self, permission: Permission) -> bool;

    fn message(&self, key: MessageKey) -> String {
        key.default_text()
    }

    /// Options for a specialized picker, `None` when unavailable
    fn selector_options(&self, selector: SelectorKind) -> Option<Vec<String>>;
}

/// Context backed by the configuration file and CLI overrides
#[derive(Debug, Clone)]
pub struct SessionContext {
    username: String,
    account_id: Option<i64>,
    project_id: Option<i64>,
    write_permissions: HashSet<Permission>,
    selectors: SelectorConfig,
    messages: HashMap<String, String>,
}

impl SessionContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            username: config.session.username.clone(),
            account_id: config.session.account_id,
            project_id: config.session.project_id,
            write_permissions: config.session.write_permissions.iter().copied().collect(),
            selectors: config.selectors.clone(),
            messages: config.messages.clone(),
        }
    }

    pub fn set_username(&mut self, username: &str) {
        self.username = username.to_string();
    }

    pub fn set_scope(&mut self, kind: ScopeKind, id: i64) {
        match kind {
            ScopeKind::Account => self.account_id = Some(id),
            ScopeKind::Project => self.project_id = Some(id),
        }
    }

    pub fn grant(&mut self, permission: Permission) {
        self.write_permissions.insert(permission);
    }

    pub fn revoke(&mut self, permission: Permission) {
        self.write_permissions.remove(&permission);
    }
}

impl AppContext for SessionContext {
    fn username(&self) -> &str {
        &self.username
    }

    fn scope_id(&self, kind: ScopeKind) -> Option<i64> {
        match kind {
            ScopeKind::Account => self.account_id,
            ScopeKind::Project => self.project_id,
        }
    }

    fn can_write(&self, permission: Permission) -> bool {
        self.write_permissions.contains(&permission)
    }

    fn message(&self, key: MessageKey) -> String {
        self.messages
            .get(&key.id())
            .cloned()
            .unwrap_or_else(|| key.default_text())
    }

    fn selector_options(&self, selector: SelectorKind) -> Option<Vec<String>> {
        self.selectors.options(selector).map(<[String]>::to_vec)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
