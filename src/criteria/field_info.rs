use chrono::NaiveDate;
#[cfg(debug_assertions)]
use log::debug;
use serde::{Deserialize, Serialize};
use toml::value::Datetime;

use super::search_criteria::SearchCriteria;
use super::search_field::{DateOp, NumberOp, SearchField, StringMode};
use crate::entity::{PanelDefinition, Param, ParamType};

/// Raw value stored for a field in a saved filter.
///
/// `Other` catches anything no field type accepts (booleans, floats, inline
/// tables) so one odd value never rejects the whole config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    List(Vec<String>),
    /// Bare TOML date, e.g. `value = 2024-06-30`
    Date(Datetime),
    Other(toml::Value),
}

/// One descriptor/value pair, as carried by a "saved filter selected" event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFieldInfo {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    pub value: FieldValue,
}

impl SearchFieldInfo {
    pub fn new(key: &str, value: FieldValue) -> Self {
        Self {
            key: key.to_string(),
            op: None,
            value,
        }
    }

    pub fn with_op(mut self, op: &str) -> Self {
        self.op = Some(op.to_string());
        self
    }
}

/// Convert a stored value into a predicate according to the field's type.
///
/// Values that do not fit the type (a list for a date field, an unparsable
/// number) yield `None`.
pub fn field_for_param(param: &Param, op: Option<&str>, value: &FieldValue) -> Option<SearchField> {
    match param.field_type {
        ParamType::Text => {
            let mode = parse_op::<StringMode>(op);
            match value {
                FieldValue::Text(s) => SearchField::text(mode, s),
                FieldValue::Integer(n) => SearchField::text(mode, &n.to_string()),
                FieldValue::List(items) => SearchField::text(mode, &items.join(" ")),
                FieldValue::Date(dt) => SearchField::text(mode, &dt.to_string()),
                FieldValue::Other(_) => None,
            }
        }
        ParamType::Number => {
            let op = parse_op::<NumberOp>(op);
            match value {
                FieldValue::Integer(n) => Some(SearchField::Number { op, value: *n }),
                FieldValue::Text(s) => SearchField::parse_number(s, op),
                FieldValue::List(_) | FieldValue::Date(_) | FieldValue::Other(_) => None,
            }
        }
        ParamType::Date => {
            let op = parse_op::<DateOp>(op);
            match value {
                FieldValue::Text(s) => SearchField::parse_date(s, op),
                FieldValue::Date(dt) => {
                    calendar_date(dt).map(|date| SearchField::Date { op, date })
                }
                FieldValue::Integer(_) | FieldValue::List(_) | FieldValue::Other(_) => None,
            }
        }
        ParamType::Set => match value {
            FieldValue::List(items) => SearchField::set(items),
            FieldValue::Text(s) => SearchField::parse_set(s),
            FieldValue::Integer(n) => SearchField::set([n.to_string()]),
            FieldValue::Date(dt) => SearchField::set([dt.to_string()]),
            FieldValue::Other(_) => None,
        },
    }
}

/// Calendar part of a TOML date or datetime; a bare time has none
fn calendar_date(dt: &Datetime) -> Option<NaiveDate> {
    let d = dt.date?;
    NaiveDate::from_ymd_opt(i32::from(d.year), u32::from(d.month), u32::from(d.day))
}

fn parse_op<T: std::str::FromStr + Default>(op: Option<&str>) -> T {
    op.and_then(|s| s.parse().ok()).unwrap_or_default()
}

/// Build scoped criteria from descriptor/value pairs.
///
/// Keys that are not declared in `definition` are skipped.
pub fn build_criteria(
    definition: &PanelDefinition,
    scope_id: i64,
    infos: &[SearchFieldInfo],
) -> SearchCriteria {
    let mut criteria = SearchCriteria::new(definition.entity, scope_id);

    for info in infos {
        let Some(param) = definition.param(&info.key) else {
            #[cfg(debug_assertions)]
            debug!(
                "Criteria: skipping unknown field '{}' for {}",
                info.key, definition.entity
            );
            continue;
        };

        let field = field_for_param(param, info.op.as_deref(), &info.value);

        #[cfg(debug_assertions)]
        if field.is_none() {
            debug!("Criteria: value for '{}' did not fit its type", info.key);
        }

        criteria.set(param.key, field);
    }

    criteria
}

#[cfg(test)]
#[path = "field_info_tests.rs"]
mod field_info_tests;
