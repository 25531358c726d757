use serde::{Deserialize, Serialize};

use crate::criteria::SearchFieldInfo;
use crate::entity::EntityKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedFilter {
    pub name: String,
    pub entity: EntityKind,
    #[serde(default)]
    pub fields: Vec<SearchFieldInfo>,
}

/// Combo-box state for the saved filters of one entity
#[derive(Debug, Default)]
pub struct SavedFilterState {
    filters: Vec<SavedFilter>,
    visible: bool,
    cursor: usize,
    selected: Option<usize>,
}

impl SavedFilterState {
    /// Keeps only the filters that belong to `entity`
    pub fn new(entity: EntityKind, filters: &[SavedFilter]) -> Self {
        Self {
            filters: filters
                .iter()
                .filter(|f| f.entity == entity)
                .cloned()
                .collect(),
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &[SavedFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Opens the popup with the cursor on the current selection.
    /// Does nothing when there are no filters to pick from.
    pub fn open(&mut self) {
        if self.filters.is_empty() {
            return;
        }
        self.visible = true;
        self.cursor = self.selected.unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        if !self.filters.is_empty() {
            self.cursor = (self.cursor + 1) % self.filters.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.filters.is_empty() {
            self.cursor = if self.cursor == 0 {
                self.filters.len() - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Marks the filter under the cursor as selected and closes the popup
    pub fn confirm(&mut self) -> Option<&SavedFilter> {
        self.visible = false;
        if self.cursor >= self.filters.len() {
            return None;
        }
        self.selected = Some(self.cursor);
        self.filters.get(self.cursor)
    }

    /// Selects a filter by name (case-insensitive)
    pub fn select_by_name(&mut self, name: &str) -> Option<&SavedFilter> {
        let index = self
            .filters
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name.trim()))?;
        self.selected = Some(index);
        self.cursor = index;
        self.filters.get(index)
    }

    pub fn selected(&self) -> Option<&SavedFilter> {
        self.selected.and_then(|i| self.filters.get(i))
    }

    /// Forget the selection, e.g. after a manual search
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
