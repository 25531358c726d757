use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::search_field::SearchField;
use crate::entity::{EntityKind, ScopeKind};

/// The tenant predicate every criteria object carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeField {
    pub kind: ScopeKind,
    pub id: i64,
}

/// Query criteria for one entity type.
///
/// There is no way to build one without a scope, and the scope cannot be
/// changed or removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    entity: EntityKind,
    scope: ScopeField,
    fields: BTreeMap<String, SearchField>,
}

impl SearchCriteria {
    pub fn new(entity: EntityKind, scope_id: i64) -> Self {
        Self {
            entity,
            scope: ScopeField {
                kind: entity.scope_kind(),
                id: scope_id,
            },
            fields: BTreeMap::new(),
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    pub fn scope(&self) -> ScopeField {
        self.scope
    }

    /// Set or clear the predicate for `key`; `None` removes it
    pub fn set(&mut self, key: &str, field: Option<SearchField>) {
        match field {
            Some(field) => {
                self.fields.insert(key.to_string(), field);
            }
            None => {
                self.fields.remove(key);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&SearchField> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &SearchField)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of predicates besides the scope
    pub fn predicate_count(&self) -> usize {
        self.fields.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for SearchCriteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("entity", &self.entity)?;
        map.serialize_entry(self.scope.kind.field_name(), &self.scope.id)?;
        map.serialize_entry("filters", &self.fields)?;
        map.end()
    }
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} = {}]",
            self.entity,
            self.scope.kind.field_name(),
            self.scope.id
        )?;
        for (i, (key, field)) in self.fields.iter().enumerate() {
            let sep = if i == 0 { " " } else { "; " };
            write!(f, "{}{} {}", sep, key, field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "search_criteria_tests.rs"]
mod search_criteria_tests;
