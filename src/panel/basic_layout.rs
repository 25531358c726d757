use tui_textarea::TextArea;

use super::control::{create_input_textarea, set_textarea_value, textarea_cursor, textarea_value};
use super::layout::{ControlView, LayoutAction, LayoutBody, SearchLayout, WidgetView};
use crate::context::{AppContext, MessageKey};
use crate::criteria::{SearchCriteria, SearchField};
use crate::entity::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasicFocus {
    #[default]
    NameField,
    MyItems,
    SearchButton,
    ClearButton,
    AdvancedLink,
}

impl BasicFocus {
    const ORDER: [BasicFocus; 5] = [
        BasicFocus::NameField,
        BasicFocus::MyItems,
        BasicFocus::SearchButton,
        BasicFocus::ClearButton,
        BasicFocus::AdvancedLink,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Name field plus a "my items" toggle
pub struct BasicLayout {
    entity: EntityKind,
    name: TextArea<'static>,
    my_items: bool,
    focus: BasicFocus,
}

impl BasicLayout {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            name: create_input_textarea(),
            my_items: false,
            focus: BasicFocus::default(),
        }
    }

    pub fn name(&self) -> &str {
        textarea_value(&self.name)
    }

    pub fn set_name(&mut self, value: &str) {
        set_textarea_value(&mut self.name, value);
    }

    pub fn my_items(&self) -> bool {
        self.my_items
    }

    pub fn set_my_items(&mut self, checked: bool) {
        self.my_items = checked;
    }

    pub fn focus(&self) -> BasicFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Empties the name field; the checkbox keeps its state
    pub fn clear(&mut self) {
        self.name = create_input_textarea();
    }

    pub fn activate(&mut self) -> LayoutAction {
        match self.focus {
            BasicFocus::NameField | BasicFocus::SearchButton => LayoutAction::Submit,
            BasicFocus::MyItems => {
                self.my_items = !self.my_items;
                LayoutAction::Handled
            }
            BasicFocus::ClearButton => {
                self.clear();
                LayoutAction::Handled
            }
            BasicFocus::AdvancedLink => LayoutAction::SwitchLayout,
        }
    }

    pub fn press_space(&mut self) -> LayoutAction {
        self.activate()
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextArea<'static>> {
        match self.focus {
            BasicFocus::NameField => Some(&mut self.name),
            _ => None,
        }
    }
}

impl SearchLayout for BasicLayout {
    fn construct_body(&self, ctx: &dyn AppContext) -> LayoutBody {
        let focused = |f: BasicFocus| self.focus == f;

        let name = ControlView::new(
            WidgetView::TextInput {
                value: self.name().to_string(),
                prompt: ctx.message(MessageKey::NamePrompt(self.entity)),
                cursor: textarea_cursor(&self.name),
                operator: None,
            },
            focused(BasicFocus::NameField),
        );

        let actions = vec![
            ControlView::new(
                WidgetView::Checkbox {
                    label: ctx.message(MessageKey::SearchMyItems),
                    checked: self.my_items,
                },
                focused(BasicFocus::MyItems),
            ),
            ControlView::new(
                WidgetView::Button {
                    label: ctx.message(MessageKey::ButtonSearch),
                },
                focused(BasicFocus::SearchButton),
            ),
            ControlView::new(
                WidgetView::Button {
                    label: ctx.message(MessageKey::ButtonClear),
                },
                focused(BasicFocus::ClearButton),
            ),
            ControlView::new(
                WidgetView::Link {
                    label: ctx.message(MessageKey::ButtonAdvancedSearch),
                },
                focused(BasicFocus::AdvancedLink),
            ),
        ];

        LayoutBody {
            rows: vec![vec![name], actions],
        }
    }

    fn fill_criteria(&self, criteria: &mut SearchCriteria, ctx: &dyn AppContext) {
        criteria.set(self.entity.name_field(), SearchField::and(self.name()));

        // Unchecked clears the key so a previous "mine" filter cannot linger
        let assignee = if self.my_items {
            self.entity.assignee_predicate(ctx.username())
        } else {
            None
        };
        criteria.set(self.entity.assignee_field(), assignee);
    }
}

#[cfg(test)]
#[path = "basic_layout_tests.rs"]
mod basic_layout_tests;
