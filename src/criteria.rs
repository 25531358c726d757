//! Criteria module
//!
//! Typed filter predicates and the scoped criteria object a search panel
//! hands to whoever runs the query.

mod field_info;
mod search_criteria;
mod search_field;

pub use field_info::{FieldValue, SearchFieldInfo, build_criteria, field_for_param};
pub use search_criteria::{ScopeField, SearchCriteria};
pub use search_field::{DateOp, NumberOp, SearchField, StringMode};
