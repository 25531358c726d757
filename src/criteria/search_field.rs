use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Token matching mode for free-text predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringMode {
    #[default]
    And,
    Or,
}

impl StringMode {
    pub fn toggle(self) -> Self {
        match self {
            StringMode::And => StringMode::Or,
            StringMode::Or => StringMode::And,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StringMode::And => "AND",
            StringMode::Or => "OR",
        }
    }
}

impl FromStr for StringMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(StringMode::And),
            "or" => Ok(StringMode::Or),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberOp {
    #[default]
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
}

impl NumberOp {
    pub fn next(self) -> Self {
        match self {
            NumberOp::Equal => NumberOp::NotEqual,
            NumberOp::NotEqual => NumberOp::LessThan,
            NumberOp::LessThan => NumberOp::GreaterThan,
            NumberOp::GreaterThan => NumberOp::Equal,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            NumberOp::Equal => "=",
            NumberOp::NotEqual => "!=",
            NumberOp::LessThan => "<",
            NumberOp::GreaterThan => ">",
        }
    }
}

impl FromStr for NumberOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "=" | "eq" | "equal" => Ok(NumberOp::Equal),
            "!=" | "ne" | "not_equal" => Ok(NumberOp::NotEqual),
            "<" | "lt" | "less_than" => Ok(NumberOp::LessThan),
            ">" | "gt" | "greater_than" => Ok(NumberOp::GreaterThan),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOp {
    #[default]
    On,
    Before,
    After,
}

impl DateOp {
    pub fn next(self) -> Self {
        match self {
            DateOp::On => DateOp::Before,
            DateOp::Before => DateOp::After,
            DateOp::After => DateOp::On,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateOp::On => "on",
            DateOp::Before => "before",
            DateOp::After => "after",
        }
    }
}

impl FromStr for DateOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "=" => Ok(DateOp::On),
            "before" | "<" => Ok(DateOp::Before),
            "after" | ">" => Ok(DateOp::After),
            _ => Err(()),
        }
    }
}

/// A single filter predicate.
///
/// Constructors return `None` for blank or malformed input so callers can
/// pass the result straight to [`SearchCriteria::set`](super::SearchCriteria::set)
/// and get "filter not applied" for free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchField {
    Number { op: NumberOp, value: i64 },
    NumberRange { from: i64, to: i64 },
    Text { mode: StringMode, value: String },
    Set { values: BTreeSet<String> },
    Date { op: DateOp, date: NaiveDate },
}

impl SearchField {
    /// AND-token text match on the trimmed input
    pub fn and(input: &str) -> Option<Self> {
        Self::text(StringMode::And, input)
    }

    pub fn text(mode: StringMode, input: &str) -> Option<Self> {
        let value = input.trim();
        if value.is_empty() {
            return None;
        }
        Some(SearchField::Text {
            mode,
            value: value.to_string(),
        })
    }

    /// Set membership over the non-blank trimmed values
    pub fn set<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: BTreeSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(SearchField::Set { values })
    }

    /// Comma-separated list input
    pub fn parse_set(input: &str) -> Option<Self> {
        Self::set(input.split(','))
    }

    /// Accepts a single integer, or an inclusive `from..to` range
    pub fn parse_number(input: &str, op: NumberOp) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some((from, to)) = input.split_once("..") {
            let from: i64 = from.trim().parse().ok()?;
            let to: i64 = to.trim().parse().ok()?;
            return Some(SearchField::NumberRange {
                from: from.min(to),
                to: from.max(to),
            });
        }

        let value = input.parse().ok()?;
        Some(SearchField::Number { op, value })
    }

    /// Accepts `YYYY-MM-DD`
    pub fn parse_date(input: &str, op: DateOp) -> Option<Self> {
        let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()?;
        Some(SearchField::Date { op, date })
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Number { op, value } => write!(f, "{} {}", op.symbol(), value),
            SearchField::NumberRange { from, to } => write!(f, "in {}..{}", from, to),
            SearchField::Text { mode, value } => write!(f, "~ {}({:?})", mode.label(), value),
            SearchField::Set { values } => {
                let joined: Vec<&str> = values.iter().map(String::as_str).collect();
                write!(f, "in {{{}}}", joined.join(", "))
            }
            SearchField::Date { op, date } => {
                write!(f, "{} {}", op.label(), date.format(DATE_FORMAT))
            }
        }
    }
}

#[cfg(test)]
#[path = "search_field_tests.rs"]
mod search_field_tests;
