//! Entity catalogue
//!
//! Entity kinds, the scope each one is searched under, and the field
//! descriptors every search panel exposes.

mod definition;
mod param;

pub use definition::{ControlResolver, PanelDefinition};
pub use param::{Param, ParamType, SelectorKind};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::criteria::SearchField;
use crate::error::CrmfindError;

/// Record types that get their own search panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Lead,
    Task,
    Account,
}

/// Tenant boundary a criteria object is always restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Account,
    Project,
}

impl ScopeKind {
    /// Name of the scoping field in serialized criteria
    pub fn field_name(self) -> &'static str {
        match self {
            ScopeKind::Account => "saccountid",
            ScopeKind::Project => "projectid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScopeKind::Account => "account",
            ScopeKind::Project => "project",
        }
    }
}

/// Write capabilities checked before enabling "create new" actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    CrmLead,
    CrmAccount,
    ProjectTask,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Lead, EntityKind::Task, EntityKind::Account];

    pub fn id(self) -> &'static str {
        match self {
            EntityKind::Lead => "lead",
            EntityKind::Task => "task",
            EntityKind::Account => "account",
        }
    }

    pub fn scope_kind(self) -> ScopeKind {
        match self {
            EntityKind::Lead | EntityKind::Account => ScopeKind::Account,
            EntityKind::Task => ScopeKind::Project,
        }
    }

    pub fn write_permission(self) -> Permission {
        match self {
            EntityKind::Lead => Permission::CrmLead,
            EntityKind::Task => Permission::ProjectTask,
            EntityKind::Account => Permission::CrmAccount,
        }
    }

    /// Field the basic layout's free-text input is matched against
    pub fn name_field(self) -> &'static str {
        match self {
            EntityKind::Lead => "lead-name",
            EntityKind::Task => "task-name",
            EntityKind::Account => "account-name",
        }
    }

    pub fn assignee_field(self) -> &'static str {
        match self {
            EntityKind::Lead => "lead-assignuser",
            EntityKind::Task => "task-assignuser",
            EntityKind::Account => "account-assignuser",
        }
    }

    /// Predicate restricting results to records assigned to `username`.
    ///
    /// CRM records match assignees by set membership; tasks store a single
    /// assignee and match it as an AND text search.
    pub fn assignee_predicate(self, username: &str) -> Option<SearchField> {
        match self {
            EntityKind::Lead | EntityKind::Account => SearchField::set([username]),
            EntityKind::Task => SearchField::and(username),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EntityKind::Lead => "◎",
            EntityKind::Task => "☑",
            EntityKind::Account => "▣",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EntityKind {
    type Err = CrmfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|entity| {
                entity.id() == wanted || wanted.strip_suffix('s') == Some(entity.id())
            })
            .ok_or_else(|| CrmfindError::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_names() {
        assert_eq!("lead".parse::<EntityKind>().unwrap(), EntityKind::Lead);
        assert_eq!("Tasks".parse::<EntityKind>().unwrap(), EntityKind::Task);
        assert_eq!(" account ".parse::<EntityKind>().unwrap(), EntityKind::Account);
    }

    #[test]
    fn test_parse_unknown_entity_fails() {
        let err = "opportunity".parse::<EntityKind>().unwrap_err();
        assert!(err.to_string().contains("opportunity"));
    }

    #[test]
    fn test_scope_kinds() {
        assert_eq!(EntityKind::Lead.scope_kind(), ScopeKind::Account);
        assert_eq!(EntityKind::Account.scope_kind(), ScopeKind::Account);
        assert_eq!(EntityKind::Task.scope_kind(), ScopeKind::Project);
        assert_eq!(ScopeKind::Account.field_name(), "saccountid");
        assert_eq!(ScopeKind::Project.field_name(), "projectid");
    }

    #[test]
    fn test_assignee_predicate_shape_differs_per_entity() {
        assert!(matches!(
            EntityKind::Lead.assignee_predicate("jdoe"),
            Some(SearchField::Set { .. })
        ));
        assert!(matches!(
            EntityKind::Task.assignee_predicate("jdoe"),
            Some(SearchField::Text { .. })
        ));
    }

    #[test]
    fn test_permission_ids_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            perms: Vec<Permission>,
        }
        let parsed: Wrapper =
            toml::from_str(r#"perms = ["crm-lead", "crm-account", "project-task"]"#).unwrap();
        assert_eq!(
            parsed.perms,
            vec![
                Permission::CrmLead,
                Permission::CrmAccount,
                Permission::ProjectTask
            ]
        );
    }
}
