//! Sub-view contract shared by the basic and advanced search layouts

use tui_textarea::TextArea;

use super::advanced_layout::AdvancedLayout;
use super::basic_layout::BasicLayout;
use crate::context::AppContext;
use crate::criteria::SearchCriteria;

/// Renderable description of one control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    TextInput {
        value: String,
        /// Shown dimmed while `value` is empty
        prompt: String,
        cursor: usize,
        operator: Option<String>,
    },
    Checkbox {
        label: String,
        checked: bool,
    },
    Button {
        label: String,
    },
    Link {
        label: String,
    },
    Options {
        options: Vec<(String, bool)>,
        cursor: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub label: Option<String>,
    pub widget: WidgetView,
    pub focused: bool,
}

impl ControlView {
    pub fn new(widget: WidgetView, focused: bool) -> Self {
        Self {
            label: None,
            widget,
            focused,
        }
    }

    pub fn labeled(label: &str, widget: WidgetView, focused: bool) -> Self {
        Self {
            label: Some(label.to_string()),
            widget,
            focused,
        }
    }
}

/// Rows of controls, top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutBody {
    pub rows: Vec<Vec<ControlView>>,
}

impl LayoutBody {
    pub fn focused_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|control| control.focused))
    }
}

/// What the panel should do after a layout handled a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
    Submit,
    SwitchLayout,
    Handled,
}

pub trait SearchLayout {
    /// Snapshot of the controls for rendering
    fn construct_body(&self, ctx: &dyn AppContext) -> LayoutBody;

    /// Write this layout's predicates into a criteria that already carries
    /// its scope
    fn fill_criteria(&self, criteria: &mut SearchCriteria, ctx: &dyn AppContext);
}

/// The sub-view currently shown by a panel
pub enum ActiveLayout {
    Basic(BasicLayout),
    Advanced(AdvancedLayout),
}

impl ActiveLayout {
    pub fn is_advanced(&self) -> bool {
        matches!(self, ActiveLayout::Advanced(_))
    }

    fn as_layout(&self) -> &dyn SearchLayout {
        match self {
            ActiveLayout::Basic(layout) => layout,
            ActiveLayout::Advanced(layout) => layout,
        }
    }

    pub fn construct_body(&self, ctx: &dyn AppContext) -> LayoutBody {
        self.as_layout().construct_body(ctx)
    }

    pub fn fill_criteria(&self, criteria: &mut SearchCriteria, ctx: &dyn AppContext) {
        self.as_layout().fill_criteria(criteria, ctx);
    }

    pub fn focus_next(&mut self) {
        match self {
            ActiveLayout::Basic(layout) => layout.focus_next(),
            ActiveLayout::Advanced(layout) => layout.focus_next(),
        }
    }

    pub fn focus_prev(&mut self) {
        match self {
            ActiveLayout::Basic(layout) => layout.focus_prev(),
            ActiveLayout::Advanced(layout) => layout.focus_prev(),
        }
    }

    /// Enter on the focused control
    pub fn activate(&mut self) -> LayoutAction {
        match self {
            ActiveLayout::Basic(layout) => layout.activate(),
            ActiveLayout::Advanced(layout) => layout.activate(),
        }
    }

    /// Space on a focused non-text control
    pub fn press_space(&mut self) -> LayoutAction {
        match self {
            ActiveLayout::Basic(layout) => layout.press_space(),
            ActiveLayout::Advanced(layout) => layout.press_space(),
        }
    }

    /// Left/Right inside a picker; returns false when nothing moved
    pub fn move_option(&mut self, forward: bool) -> bool {
        match self {
            ActiveLayout::Basic(_) => false,
            ActiveLayout::Advanced(layout) => layout.move_option(forward),
        }
    }

    pub fn cycle_operator(&mut self) {
        if let ActiveLayout::Advanced(layout) = self {
            layout.cycle_operator();
        }
    }

    /// Text input that owns the focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextArea<'static>> {
        match self {
            ActiveLayout::Basic(layout) => layout.focused_input_mut(),
            ActiveLayout::Advanced(layout) => layout.focused_input_mut(),
        }
    }
}
