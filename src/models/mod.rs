use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One selectable choice within a vote, with its running tally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteItem {
    pub index: usize,
    pub name: String,
    pub count: u64,
}

/// Full state of one poll as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub created_by: String,
    /// Nanoseconds since the unix epoch.
    pub created_at: u64,
    /// Seconds since the unix epoch.
    pub expired_at: u64,
    pub title: String,
    pub max_selection: u8,
    pub hash: String,
    pub public: bool,
    pub items: Vec<VoteItem>,
}

/// Answer of `getVote` and `vote`: the record plus the caller's own choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResponse {
    pub info: VoteRecord,
    #[serde(default)]
    pub selection: Vec<usize>,
}

/// Votes the caller created and votes the caller took part in, keyed by hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVoteRecord {
    pub owned: Vec<(String, VoteRecord)>,
    pub participated: Vec<(String, VoteRecord)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVoteRecord {
    pub title: String,
    pub names: Vec<String>,
}

// `created_at` is kept in nanoseconds, `expired_at` in seconds
pub(crate) fn utc_from_nanos(nanos: u64) -> DateTime<Utc> {
    Utc.timestamp_nanos(nanos as i64)
}

pub(crate) fn utc_from_secs(secs: u64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs as i64, 0).single()
}

pub(crate) fn expired_by(expired_at: u64, now: DateTime<Utc>) -> bool {
    match utc_from_secs(expired_at) {
        Some(expires_at) => now >= expires_at,
        None => false,
    }
}

impl VoteRecord {
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        utc_from_nanos(self.created_at)
    }

    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        utc_from_secs(self.expired_at)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        expired_by(self.expired_at, now)
    }
}

impl CreateVoteRecord {
    /// Builds a create request, dropping blank and repeated option names.
    pub fn new(title: impl Into<String>, names: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.trim().to_string();
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }

        Self {
            title: title.into(),
            names: unique,
        }
    }
}
