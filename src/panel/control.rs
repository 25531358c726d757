use ratatui::style::Style;
use tui_textarea::TextArea;

#[cfg(debug_assertions)]
use log::debug;

use crate::context::AppContext;
use crate::criteria::{DateOp, NumberOp, SearchField, StringMode};
use crate::entity::{ControlResolver, Param, ParamType, SelectorKind};
use crate::theme;

/// Creates a single-line TextArea configured for panel inputs.
pub fn create_input_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

pub fn textarea_value<'a>(textarea: &'a TextArea<'static>) -> &'a str {
    textarea.lines().first().map(|s| s.as_str()).unwrap_or("")
}

pub fn textarea_cursor(textarea: &TextArea<'static>) -> usize {
    textarea.cursor().1
}

/// Replace the content of `textarea` with `value`
pub fn set_textarea_value(textarea: &mut TextArea<'static>, value: &str) {
    *textarea = create_input_textarea();
    textarea.insert_str(value);
}

/// Multi-select picker fed by an external option list
pub struct OptionSelect {
    selector: SelectorKind,
    options: Vec<String>,
    checked: Vec<bool>,
    cursor: usize,
}

impl OptionSelect {
    pub fn new(selector: SelectorKind, options: Vec<String>) -> Self {
        let checked = vec![false; options.len()];
        Self {
            selector,
            options,
            checked,
            cursor: 0,
        }
    }

    pub fn selector(&self) -> SelectorKind {
        self.selector
    }

    pub fn options(&self) -> impl Iterator<Item = (&str, bool)> {
        self.options
            .iter()
            .zip(self.checked.iter())
            .map(|(option, checked)| (option.as_str(), *checked))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, forward: bool) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    pub fn toggle_current(&mut self) {
        if let Some(checked) = self.checked.get_mut(self.cursor) {
            *checked = !*checked;
        }
    }

    /// Check the option named `value`, returns false when it is not offered
    pub fn check(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                self.checked[index] = true;
                true
            }
            None => false,
        }
    }

    pub fn chosen(&self) -> impl Iterator<Item = &str> {
        self.options().filter(|(_, checked)| *checked).map(|(o, _)| o)
    }

    fn clear(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = false);
        self.cursor = 0;
    }
}

/// Input control for one advanced-search row
pub enum Control {
    Text {
        input: TextArea<'static>,
        mode: StringMode,
    },
    Number {
        input: TextArea<'static>,
        op: NumberOp,
    },
    Date {
        input: TextArea<'static>,
        op: DateOp,
    },
    /// Comma-separated values for set fields without a picker
    List { input: TextArea<'static> },
    Select(OptionSelect),
}

impl Control {
    /// Generic control for a field type
    pub fn generic(field_type: ParamType) -> Self {
        match field_type {
            ParamType::Text => Control::Text {
                input: create_input_textarea(),
                mode: StringMode::default(),
            },
            ParamType::Number => Control::Number {
                input: create_input_textarea(),
                op: NumberOp::default(),
            },
            ParamType::Date => Control::Date {
                input: create_input_textarea(),
                op: DateOp::default(),
            },
            ParamType::Set => Control::List {
                input: create_input_textarea(),
            },
        }
    }

    /// Specialized picker when the resolver knows the key and options are
    /// available, generic control otherwise
    pub fn resolve(param: &Param, resolver: &dyn ControlResolver, ctx: &dyn AppContext) -> Self {
        if let Some(selector) = resolver.selector_for(param.key) {
            if let Some(options) = ctx.selector_options(selector)
                && !options.is_empty()
            {
                return Control::Select(OptionSelect::new(selector, options));
            }

            #[cfg(debug_assertions)]
            debug!(
                "Control: no options for {:?} ({}), using generic control",
                selector, param.key
            );
        }
        Control::generic(param.field_type)
    }

    /// Current value as a predicate; blank or unparsable input is `None`
    pub fn search_field(&self) -> Option<SearchField> {
        match self {
            Control::Text { input, mode } => SearchField::text(*mode, textarea_value(input)),
            Control::Number { input, op } => SearchField::parse_number(textarea_value(input), *op),
            Control::Date { input, op } => SearchField::parse_date(textarea_value(input), *op),
            Control::List { input } => SearchField::parse_set(textarea_value(input)),
            Control::Select(select) => SearchField::set(select.chosen()),
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut TextArea<'static>> {
        match self {
            Control::Text { input, .. }
            | Control::Number { input, .. }
            | Control::Date { input, .. }
            | Control::List { input } => Some(input),
            Control::Select(_) => None,
        }
    }

    pub fn input(&self) -> Option<&TextArea<'static>> {
        match self {
            Control::Text { input, .. }
            | Control::Number { input, .. }
            | Control::Date { input, .. }
            | Control::List { input } => Some(input),
            Control::Select(_) => None,
        }
    }

    pub fn select_mut(&mut self) -> Option<&mut OptionSelect> {
        match self {
            Control::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Put a raw value into the control: text for inputs, a comma-separated
    /// list of options for pickers
    pub fn set_value(&mut self, value: &str) {
        match self {
            Control::Select(select) => {
                select.clear();
                for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    select.check(item);
                }
            }
            _ => {
                if let Some(input) = self.input_mut() {
                    set_textarea_value(input, value);
                }
            }
        }
    }

    pub fn cycle_operator(&mut self) {
        match self {
            Control::Text { mode, .. } => *mode = mode.toggle(),
            Control::Number { op, .. } => *op = op.next(),
            Control::Date { op, .. } => *op = op.next(),
            Control::List { .. } | Control::Select(_) => {}
        }
    }

    pub fn operator_label(&self) -> Option<&'static str> {
        match self {
            Control::Text { mode, .. } => Some(mode.label()),
            Control::Number { op, .. } => Some(op.symbol()),
            Control::Date { op, .. } => Some(op.label()),
            Control::List { .. } | Control::Select(_) => None,
        }
    }

    /// Placeholder shown while the input is empty
    pub fn hint(&self) -> &'static str {
        match self {
            Control::Text { .. } => "",
            Control::Number { .. } => "n or a..b",
            Control::Date { .. } => "YYYY-MM-DD",
            Control::List { .. } => "a, b, c",
            Control::Select(_) => "",
        }
    }

    pub fn clear(&mut self) {
        match self {
            Control::Select(select) => select.clear(),
            _ => {
                if let Some(input) = self.input_mut() {
                    *input = create_input_textarea();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "control_tests.rs"]
mod control_tests;
