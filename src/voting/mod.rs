pub mod projector;

pub use projector::{project, should_reveal_results};

use crate::models::{expired_by, utc_from_nanos, utc_from_secs};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Option indices the current viewer has already chosen.
pub type Selection = HashSet<usize>;

// A vote item with its share of the total
#[derive(Debug, Clone, PartialEq)]
pub struct VoteItemView {
    pub index: usize,
    pub name: String,
    pub count: u64,
    pub percent: f64,
}

// Displayable state of one vote, rebuilt on every fetch
#[derive(Debug, Clone, PartialEq)]
pub struct VoteRecordView {
    pub hash: String,
    pub title: String,
    pub created_by: String,
    pub created_at: u64,
    pub expired_at: u64,
    pub max_selection: u8,
    pub public: bool,
    pub items: Vec<VoteItemView>,
    pub selection: Selection,
}

impl VoteRecordView {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    pub fn should_reveal(&self) -> bool {
        should_reveal_results(&self.selection)
    }

    pub fn total_count(&self) -> u128 {
        self.items.iter().map(|item| item.count as u128).sum()
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        utc_from_nanos(self.created_at)
    }

    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        utc_from_secs(self.expired_at)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        expired_by(self.expired_at, now)
    }

    pub fn item(&self, index: usize) -> Option<&VoteItemView> {
        self.items.iter().find(|item| item.index == index)
    }

    /// Progress-bar fill for an option; stays empty until results are revealed.
    pub fn progress(&self, index: usize) -> f64 {
        if !self.should_reveal() {
            return 0.0;
        }
        self.item(index).map(|item| item.percent).unwrap_or(0.0)
    }

    pub fn can_select(&self, index: usize) -> bool {
        self.item(index).is_some()
            && !self.is_selected(index)
            && self.selection.len() < self.max_selection as usize
    }
}
