//! Outbound panel events
//!
//! Panels never call the result list or the form router directly; they post
//! one of these onto an injected channel.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::criteria::SearchCriteria;
use crate::entity::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Run the query and refresh the result list
    SearchRequested(SearchCriteria),
    /// Open the create form for the entity
    GotoAdd { entity: EntityKind },
}

pub type EventSender = Sender<PanelEvent>;
pub type EventReceiver = Receiver<PanelEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}
