#[cfg(debug_assertions)]
use log::debug;

use crate::config::Config;
use crate::context::SessionContext;
use crate::criteria::SearchCriteria;
use crate::entity::{EntityKind, PanelDefinition};
use crate::error::CrmfindError;
use crate::events::{self, EventReceiver, PanelEvent};
use crate::notification::NotificationState;
use crate::panel::SearchPanel;
use crate::requests::{LoggedRequest, RequestLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the last dispatched criteria as JSON on exit
    Criteria,
}

pub struct App {
    pub panel: SearchPanel<SessionContext>,
    pub requests: RequestLog,
    pub notification: NotificationState,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    receiver: EventReceiver,
}

impl App {
    pub fn new(entity: EntityKind, context: SessionContext, config: &Config) -> Self {
        let (sender, receiver) = events::channel();
        let mut panel = SearchPanel::new(PanelDefinition::for_entity(entity), context, sender)
            .with_saved_filters(&config.saved_filters);

        if config.panel.start_in_advanced {
            panel.select_advanced_layout();
        }

        Self {
            panel,
            requests: RequestLog::new(),
            notification: NotificationState::new(),
            output_mode: None,
            should_quit: false,
            receiver,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn last_criteria(&self) -> Option<&SearchCriteria> {
        self.requests.last_search()
    }

    /// Drain everything the panel has posted since the last tick
    pub fn poll_panel_events(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            #[cfg(debug_assertions)]
            debug!("App: received {:?}", event);

            match event {
                PanelEvent::SearchRequested(criteria) => {
                    let count = criteria.predicate_count();
                    let noun = if count == 1 { "filter" } else { "filters" };
                    self.notification
                        .show(&format!("Searching {}s ({} {})", criteria.entity(), count, noun));
                    self.requests.push(LoggedRequest::Search(criteria));
                }
                PanelEvent::GotoAdd { entity } => {
                    self.notification
                        .show(&format!("Opening new {} form", entity));
                    self.requests.push(LoggedRequest::Navigate(entity));
                }
            }
        }
    }

    pub fn report(&mut self, error: &CrmfindError) {
        self.notification.show_error(&error.to_string());
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
