// Configuration type definitions

use std::collections::HashMap;

use serde::Deserialize;

use crate::entity::{Permission, SelectorKind};
use crate::saved_filter::SavedFilter;

/// Identity and scope of the signed-in user.
///
/// Scope ids have no default: a search without a configured (or
/// `--scope`-supplied) id is refused rather than sent to a guessed tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub write_permissions: Vec<Permission>,
}

fn default_username() -> String {
    "anonymous".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            username: default_username(),
            account_id: None,
            project_id: None,
            write_permissions: Vec::new(),
        }
    }
}

/// Panel behaviour section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PanelConfig {
    #[serde(default)]
    pub start_in_advanced: bool,
}

/// Option lists for the specialized pickers
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub project_members: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default = "default_task_statuses")]
    pub task_statuses: Vec<String>,
}

fn default_task_statuses() -> Vec<String> {
    ["Open", "InProgress", "Pending", "Closed"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            users: Vec::new(),
            project_members: Vec::new(),
            milestones: Vec::new(),
            task_statuses: default_task_statuses(),
        }
    }
}

impl SelectorConfig {
    /// Options for a picker, or `None` when nothing is configured for it
    pub fn options(&self, selector: SelectorKind) -> Option<&[String]> {
        let options = match selector {
            SelectorKind::ActiveUsers => &self.users,
            SelectorKind::ProjectMembers => &self.project_members,
            SelectorKind::Milestones => &self.milestones,
            SelectorKind::TaskStatuses => &self.task_statuses,
        };
        if options.is_empty() {
            None
        } else {
            Some(options)
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    /// Localized overrides keyed by message id, e.g. `"generic.button_search"`
    #[serde(default)]
    pub messages: HashMap<String, String>,
    #[serde(default)]
    pub saved_filters: Vec<SavedFilter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use proptest::prelude::*;

    // Feature: config-system, Property: valid permission ids parse
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_valid_permission_parsing(
            perm in prop::sample::select(vec!["crm-lead", "crm-account", "project-task"])
        ) {
            let toml_content = format!(r#"
[session]
write_permissions = ["{}"]
"#, perm);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid permission: {}", perm);

            let expected = match perm {
                "crm-lead" => Permission::CrmLead,
                "crm-account" => Permission::CrmAccount,
                "project-task" => Permission::ProjectTask,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().session.write_permissions, vec![expected]);
        }
    }

    // Feature: config-system, Property: missing session fields use defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_missing_session_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_username in prop::bool::ANY
        ) {
            let toml_content = if !include_section {
                String::new()
            } else if !include_username {
                "[session]\naccount_id = 5\n".to_string()
            } else {
                "[session]\nusername = \"jdoe\"\n".to_string()
            };

            let config: Config = toml::from_str(&toml_content).unwrap();

            if !include_section || !include_username {
                prop_assert_eq!(config.session.username, "anonymous");
            } else {
                prop_assert_eq!(config.session.username, "jdoe");
                prop_assert_eq!(config.session.account_id, None);
            }
        }
    }

    #[test]
    fn test_selector_options_empty_is_none() {
        let selectors = SelectorConfig::default();
        assert!(selectors.options(SelectorKind::ActiveUsers).is_none());
        assert_eq!(
            selectors.options(SelectorKind::TaskStatuses).map(|o| o.len()),
            Some(4)
        );
    }

    #[test]
    fn test_parse_selectors() {
        let toml = r#"
[selectors]
users = ["jdoe", "asmith"]
milestones = ["M1"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.selectors.options(SelectorKind::ActiveUsers),
            Some(&["jdoe".to_string(), "asmith".to_string()][..])
        );
        assert!(config.selectors.options(SelectorKind::ProjectMembers).is_none());
        assert!(config.selectors.options(SelectorKind::TaskStatuses).is_some());
    }

    #[test]
    fn test_parse_saved_filters() {
        let toml = r#"
[[saved_filters]]
name = "Open tasks"
entity = "task"

[[saved_filters.fields]]
key = "task-status"
value = ["Open"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.saved_filters.len(), 1);
        assert_eq!(config.saved_filters[0].entity, EntityKind::Task);
        assert_eq!(config.saved_filters[0].fields.len(), 1);
    }

    #[test]
    fn test_parse_messages() {
        let toml = r#"
[messages]
"generic.button_search" = "Buscar"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.messages.get("generic.button_search").map(String::as_str),
            Some("Buscar")
        );
    }

    #[test]
    fn test_bare_date_in_saved_filter_parses() {
        let toml = r#"
[session]
account_id = 42

[[saved_filters]]
name = "Due soon"
entity = "task"
fields = [
    { key = "task-duedate", op = "before", value = 2024-06-30 },
    { key = "task-status", value = true },
]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.session.account_id, Some(42));
        assert_eq!(config.saved_filters[0].fields.len(), 2);
    }

    #[test]
    fn test_invalid_permission_fails_parse() {
        let toml = r#"
[session]
write_permissions = ["root"]
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
