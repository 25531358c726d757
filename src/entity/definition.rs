use super::EntityKind;
use super::param::{ACCOUNT_PARAMS, LEAD_PARAMS, Param, SelectorKind, TASK_PARAMS};

/// Maps a field key to the specialized picker that should edit it.
///
/// Returning `None` makes the advanced layout fall back to the generic
/// control for the field's type.
pub trait ControlResolver {
    fn selector_for(&self, key: &str) -> Option<SelectorKind>;
}

/// Everything a search panel needs to know about one entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDefinition {
    pub entity: EntityKind,
    pub params: Vec<Param>,
    pub selectors: Vec<(&'static str, SelectorKind)>,
    /// Whether the header offers a "create new" action at all
    pub create_action: bool,
}

impl PanelDefinition {
    pub fn for_entity(entity: EntityKind) -> Self {
        match entity {
            EntityKind::Lead => Self {
                entity,
                params: LEAD_PARAMS.to_vec(),
                selectors: vec![("lead-assignuser", SelectorKind::ActiveUsers)],
                create_action: true,
            },
            EntityKind::Task => Self {
                entity,
                params: TASK_PARAMS.to_vec(),
                selectors: vec![
                    ("task-assignuser", SelectorKind::ProjectMembers),
                    ("task-milestone", SelectorKind::Milestones),
                    ("task-status", SelectorKind::TaskStatuses),
                ],
                create_action: false,
            },
            EntityKind::Account => Self {
                entity,
                params: ACCOUNT_PARAMS.to_vec(),
                selectors: vec![("account-assignuser", SelectorKind::ActiveUsers)],
                create_action: true,
            },
        }
    }

    pub fn param(&self, key: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.key == key)
    }
}

impl ControlResolver for PanelDefinition {
    fn selector_for(&self, key: &str) -> Option<SelectorKind> {
        self.selectors
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, selector)| *selector)
    }
}
