#[cfg(debug_assertions)]
use log::debug;

use super::advanced_layout::AdvancedLayout;
use super::basic_layout::BasicLayout;
use super::header::{DisplayHeader, HeaderAction};
use super::layout::{ActiveLayout, LayoutBody};
use crate::context::{AppContext, MessageKey};
use crate::criteria::{SearchCriteria, SearchFieldInfo, build_criteria};
use crate::entity::{EntityKind, PanelDefinition};
use crate::error::CrmfindError;
use crate::events::{EventSender, PanelEvent};
use crate::saved_filter::{SavedFilter, SavedFilterState};

/// Search panel for one entity type.
///
/// Owns the active layout and turns every search trigger into a scoped
/// [`SearchCriteria`] posted on the event channel.
pub struct SearchPanel<C: AppContext> {
    definition: PanelDefinition,
    context: C,
    sender: EventSender,
    layout: ActiveLayout,
    saved_filters: SavedFilterState,
    // set by build_title
    create_enabled: bool,
}

impl<C: AppContext> SearchPanel<C> {
    pub fn new(definition: PanelDefinition, context: C, sender: EventSender) -> Self {
        let layout = ActiveLayout::Basic(BasicLayout::new(definition.entity));
        let saved_filters = SavedFilterState::new(definition.entity, &[]);
        Self {
            definition,
            context,
            sender,
            layout,
            saved_filters,
            create_enabled: false,
        }
    }

    pub fn with_saved_filters(mut self, filters: &[SavedFilter]) -> Self {
        self.saved_filters = SavedFilterState::new(self.definition.entity, filters);
        self
    }

    pub fn entity(&self) -> EntityKind {
        self.definition.entity
    }

    pub fn definition(&self) -> &PanelDefinition {
        &self.definition
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn layout(&self) -> &ActiveLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut ActiveLayout {
        &mut self.layout
    }

    pub fn saved_filters(&self) -> &SavedFilterState {
        &self.saved_filters
    }

    pub fn saved_filters_mut(&mut self) -> &mut SavedFilterState {
        &mut self.saved_filters
    }

    /// Builds the title bar and arms the create action.
    ///
    /// The action is enabled only when the user can write the entity.
    pub fn build_title(&mut self) -> DisplayHeader {
        let entity = self.definition.entity;
        let ctx = &self.context;

        self.create_enabled =
            self.definition.create_action && ctx.can_write(entity.write_permission());

        let create_action = self.definition.create_action.then(|| HeaderAction {
            label: ctx.message(MessageKey::NewButton(entity)),
            enabled: self.create_enabled,
        });

        let saved_filter = (!self.saved_filters.is_empty()).then(|| {
            self.saved_filters
                .selected()
                .map(|f| f.name.clone())
                .unwrap_or_else(|| ctx.message(MessageKey::SavedFilterNone))
        });

        DisplayHeader {
            icon: entity.icon(),
            title: ctx.message(MessageKey::ViewListTitle(entity)),
            create_action,
            saved_filter,
        }
    }

    /// Posts `GotoAdd` when the header's create action is enabled.
    /// Returns whether anything was sent.
    pub fn press_create(&self) -> Result<bool, CrmfindError> {
        if !self.create_enabled {
            #[cfg(debug_assertions)]
            debug!("SearchPanel: create action disabled for {}", self.entity());
            return Ok(false);
        }
        self.send(PanelEvent::GotoAdd {
            entity: self.entity(),
        })?;
        Ok(true)
    }

    pub fn select_basic_layout(&mut self) {
        self.layout = ActiveLayout::Basic(BasicLayout::new(self.definition.entity));
    }

    pub fn select_advanced_layout(&mut self) {
        self.layout = ActiveLayout::Advanced(AdvancedLayout::new(&self.definition, &self.context));
    }

    pub fn toggle_layout(&mut self) {
        if self.layout.is_advanced() {
            self.select_basic_layout();
        } else {
            self.select_advanced_layout();
        }
    }

    pub fn body(&self) -> LayoutBody {
        self.layout.construct_body(&self.context)
    }

    /// The context's current scope id for this entity
    fn current_scope(&self) -> Result<i64, CrmfindError> {
        let kind = self.definition.entity.scope_kind();
        self.context
            .scope_id(kind)
            .ok_or(CrmfindError::MissingScope(kind))
    }

    /// Fresh criteria scoped to the context's current id, filled by the
    /// active layout
    pub fn fill_criteria(&self) -> Result<SearchCriteria, CrmfindError> {
        let mut criteria = SearchCriteria::new(self.definition.entity, self.current_scope()?);
        self.layout.fill_criteria(&mut criteria, &self.context);
        Ok(criteria)
    }

    /// Fails with `MissingScope`, sending nothing, when the session has no
    /// id for the entity's scope
    pub fn submit_search(&mut self) -> Result<(), CrmfindError> {
        let criteria = self.fill_criteria()?;

        #[cfg(debug_assertions)]
        debug!("SearchPanel: submit {}", criteria);

        self.saved_filters.clear_selection();
        self.send(PanelEvent::SearchRequested(criteria))
    }

    /// Runs a saved filter's fields through the descriptor builder and
    /// dispatches the result under the current scope
    pub fn on_saved_filter_selected(&self, infos: &[SearchFieldInfo]) -> Result<(), CrmfindError> {
        let criteria = build_criteria(&self.definition, self.current_scope()?, infos);

        #[cfg(debug_assertions)]
        debug!("SearchPanel: saved filter {}", criteria);

        self.send(PanelEvent::SearchRequested(criteria))
    }

    pub fn select_saved_filter(&mut self, name: &str) -> Result<(), CrmfindError> {
        let fields = self
            .saved_filters
            .select_by_name(name)
            .map(|f| f.fields.clone())
            .ok_or_else(|| CrmfindError::UnknownSavedFilter(name.to_string()))?;
        self.on_saved_filter_selected(&fields)
    }

    /// Confirms the filter under the popup cursor. Returns whether a filter
    /// was run.
    pub fn confirm_saved_filter(&mut self) -> Result<bool, CrmfindError> {
        let Some(fields) = self.saved_filters.confirm().map(|f| f.fields.clone()) else {
            return Ok(false);
        };
        self.on_saved_filter_selected(&fields)?;
        Ok(true)
    }

    /// Pre-fills the basic name field; ignored while advanced is shown
    pub fn set_text_field(&mut self, value: &str) {
        if let ActiveLayout::Basic(layout) = &mut self.layout {
            layout.set_name(value);
        }
    }

    pub fn set_my_items(&mut self, checked: bool) {
        if let ActiveLayout::Basic(layout) = &mut self.layout {
            layout.set_my_items(checked);
        }
    }

    fn send(&self, event: PanelEvent) -> Result<(), CrmfindError> {
        self.sender
            .send(event)
            .map_err(|e| CrmfindError::EventChannelClosed(describe(&e.0)))
    }
}

fn describe(event: &PanelEvent) -> String {
    match event {
        PanelEvent::SearchRequested(criteria) => format!("{} search", criteria.entity()),
        PanelEvent::GotoAdd { entity } => format!("new {}", entity),
    }
}

#[cfg(test)]
#[path = "panel_state_tests.rs"]
mod panel_state_tests;
