use std::collections::VecDeque;

use crate::criteria::SearchCriteria;
use crate::entity::EntityKind;

const DEFAULT_CAPACITY: usize = 50;

/// Something a panel asked the host to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggedRequest {
    Search(SearchCriteria),
    Navigate(EntityKind),
}

/// Bounded log of received panel requests, newest first
#[derive(Debug)]
pub struct RequestLog {
    entries: VecDeque<LoggedRequest>,
    capacity: usize,
}

impl Default for RequestLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, request: LoggedRequest) {
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(request);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LoggedRequest> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent search, skipping navigation requests
    pub fn last_search(&self) -> Option<&SearchCriteria> {
        self.entries.iter().find_map(|entry| match entry {
            LoggedRequest::Search(criteria) => Some(criteria),
            LoggedRequest::Navigate(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = RequestLog::new();
        log.push(LoggedRequest::Search(SearchCriteria::new(EntityKind::Lead, 1)));
        log.push(LoggedRequest::Search(SearchCriteria::new(EntityKind::Lead, 2)));

        let first = log.entries().next().unwrap();
        assert_eq!(
            first,
            &LoggedRequest::Search(SearchCriteria::new(EntityKind::Lead, 2))
        );
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = RequestLog::with_capacity(2);
        for id in 1..=3 {
            log.push(LoggedRequest::Search(SearchCriteria::new(EntityKind::Task, id)));
        }
        assert_eq!(log.len(), 2);
        let ids: Vec<i64> = log
            .entries()
            .filter_map(|e| match e {
                LoggedRequest::Search(c) => Some(c.scope().id),
                LoggedRequest::Navigate(_) => None,
            })
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_last_search_skips_navigation() {
        let mut log = RequestLog::new();
        assert!(log.last_search().is_none());

        log.push(LoggedRequest::Search(SearchCriteria::new(EntityKind::Lead, 9)));
        log.push(LoggedRequest::Navigate(EntityKind::Lead));
        assert_eq!(log.last_search().map(|c| c.scope().id), Some(9));
    }
}
