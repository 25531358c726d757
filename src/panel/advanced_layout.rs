use tui_textarea::TextArea;

#[cfg(debug_assertions)]
use log::debug;

use super::control::{Control, textarea_cursor, textarea_value};
use super::layout::{ControlView, LayoutAction, LayoutBody, SearchLayout, WidgetView};
use crate::context::{AppContext, MessageKey};
use crate::criteria::SearchCriteria;
use crate::entity::{PanelDefinition, Param};

/// One descriptor and the control editing it
pub struct ParamRow {
    pub param: Param,
    pub control: Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancedFocus {
    Row(usize),
    SearchButton,
    ClearButton,
    BasicLink,
}

/// Descriptor-driven form with one row per field
pub struct AdvancedLayout {
    rows: Vec<ParamRow>,
    // rows first, then the three buttons
    focus: usize,
}

impl AdvancedLayout {
    pub fn new(definition: &PanelDefinition, ctx: &dyn AppContext) -> Self {
        let rows = definition
            .params
            .iter()
            .map(|param| ParamRow {
                param: param.clone(),
                control: Control::resolve(param, definition, ctx),
            })
            .collect();

        Self { rows, focus: 0 }
    }

    pub fn rows(&self) -> &[ParamRow] {
        &self.rows
    }

    pub fn control_mut(&mut self, key: &str) -> Option<&mut Control> {
        self.rows
            .iter_mut()
            .find(|row| row.param.key == key)
            .map(|row| &mut row.control)
    }

    fn stop_count(&self) -> usize {
        self.rows.len() + 3
    }

    pub fn focus(&self) -> AdvancedFocus {
        let rows = self.rows.len();
        match self.focus {
            i if i < rows => AdvancedFocus::Row(i),
            i if i == rows => AdvancedFocus::SearchButton,
            i if i == rows + 1 => AdvancedFocus::ClearButton,
            _ => AdvancedFocus::BasicLink,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.stop_count();
    }

    pub fn focus_prev(&mut self) {
        let count = self.stop_count();
        self.focus = (self.focus + count - 1) % count;
    }

    fn focused_control_mut(&mut self) -> Option<&mut Control> {
        match self.focus() {
            AdvancedFocus::Row(i) => self.rows.get_mut(i).map(|row| &mut row.control),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.control.clear();
        }
    }

    pub fn activate(&mut self) -> LayoutAction {
        match self.focus() {
            AdvancedFocus::Row(_) | AdvancedFocus::SearchButton => LayoutAction::Submit,
            AdvancedFocus::ClearButton => {
                self.clear();
                LayoutAction::Handled
            }
            AdvancedFocus::BasicLink => LayoutAction::SwitchLayout,
        }
    }

    pub fn press_space(&mut self) -> LayoutAction {
        if let Some(select) = self.focused_control_mut().and_then(Control::select_mut) {
            select.toggle_current();
            return LayoutAction::Handled;
        }
        self.activate()
    }

    pub fn move_option(&mut self, forward: bool) -> bool {
        match self.focused_control_mut().and_then(Control::select_mut) {
            Some(select) => {
                select.move_cursor(forward);
                true
            }
            None => false,
        }
    }

    pub fn cycle_operator(&mut self) {
        if let Some(control) = self.focused_control_mut() {
            control.cycle_operator();
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextArea<'static>> {
        self.focused_control_mut().and_then(Control::input_mut)
    }
}

fn row_widget(control: &Control) -> WidgetView {
    match control {
        Control::Select(select) => WidgetView::Options {
            options: select
                .options()
                .map(|(option, checked)| (option.to_string(), checked))
                .collect(),
            cursor: select.cursor(),
        },
        _ => {
            let (value, cursor) = control
                .input()
                .map(|input| (textarea_value(input).to_string(), textarea_cursor(input)))
                .unwrap_or_default();
            WidgetView::TextInput {
                value,
                prompt: control.hint().to_string(),
                cursor,
                operator: control.operator_label().map(str::to_string),
            }
        }
    }
}

impl SearchLayout for AdvancedLayout {
    fn construct_body(&self, ctx: &dyn AppContext) -> LayoutBody {
        let focus = self.focus();

        let mut rows: Vec<Vec<ControlView>> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                vec![ControlView::labeled(
                    row.param.label,
                    row_widget(&row.control),
                    focus == AdvancedFocus::Row(i),
                )]
            })
            .collect();

        rows.push(vec![
            ControlView::new(
                WidgetView::Button {
                    label: ctx.message(MessageKey::ButtonSearch),
                },
                focus == AdvancedFocus::SearchButton,
            ),
            ControlView::new(
                WidgetView::Button {
                    label: ctx.message(MessageKey::ButtonClear),
                },
                focus == AdvancedFocus::ClearButton,
            ),
            ControlView::new(
                WidgetView::Link {
                    label: ctx.message(MessageKey::ButtonBasicSearch),
                },
                focus == AdvancedFocus::BasicLink,
            ),
        ]);

        LayoutBody { rows }
    }

    fn fill_criteria(&self, criteria: &mut SearchCriteria, _ctx: &dyn AppContext) {
        for row in &self.rows {
            let field = row.control.search_field();

            #[cfg(debug_assertions)]
            if field.is_none()
                && let Some(input) = row.control.input()
                && !textarea_value(input).trim().is_empty()
            {
                debug!(
                    "AdvancedLayout: ignoring unparsable value '{}' for {}",
                    textarea_value(input),
                    row.param.key
                );
            }

            criteria.set(row.param.key, field);
        }
    }
}

#[cfg(test)]
#[path = "advanced_layout_tests.rs"]
mod advanced_layout_tests;
