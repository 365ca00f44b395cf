#![allow(dead_code)]

use async_trait::async_trait;
use dvote_client::backend::VoteBackend;
use dvote_client::error::{ClientError, VoteError};
use dvote_client::models::{CreateVoteRecord, UserVoteRecord, VoteItem, VoteRecord, VoteResponse};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

pub const CALLER: &str = "2vxsx-fae";

pub fn record(hash: &str, title: &str, counts: &[u64]) -> VoteRecord {
    VoteRecord {
        created_by: "aaaaa-aa".to_string(),
        created_at: 1_700_000_000_000_000_000,
        expired_at: 4_000_000_000,
        title: title.to_string(),
        max_selection: 1,
        hash: hash.to_string(),
        public: true,
        items: counts
            .iter()
            .enumerate()
            .map(|(index, count)| VoteItem {
                index,
                name: format!("option{}", index),
                count: *count,
            })
            .collect(),
    }
}

/// In-memory stand-in for the vote canister, single caller.
#[derive(Default)]
pub struct MemoryBackend {
    pub votes: Mutex<HashMap<String, VoteRecord>>,
    pub selections: Mutex<HashMap<String, Vec<usize>>>,
    pub owned: Mutex<Vec<String>>,
    pub fail_get: Mutex<Option<VoteError>>,
    pub get_calls: AtomicUsize,
    pub vote_calls: AtomicUsize,
    pub entered: Notify,
    pub gate: Option<Notify>,
}

impl MemoryBackend {
    pub fn with_votes(records: Vec<VoteRecord>) -> Self {
        let backend = Self::default();
        {
            let mut votes = backend.votes.lock().unwrap();
            for record in records {
                votes.insert(record.hash.clone(), record);
            }
        }
        backend
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn fail_gets_with(&self, err: Option<VoteError>) {
        *self.fail_get.lock().unwrap() = err;
    }

    fn response(&self, hash: &str) -> Result<VoteResponse, ClientError> {
        let info = self
            .votes
            .lock()
            .unwrap()
            .get(hash)
            .cloned()
            .ok_or_else(|| VoteError::NotFound("Vote record not found".to_string()))?;
        let selection = self.selections.lock().unwrap().get(hash).cloned().unwrap_or_default();
        Ok(VoteResponse { info, selection })
    }
}

#[async_trait]
impl VoteBackend for MemoryBackend {
    async fn get_vote(&self, hash: &str) -> Result<VoteResponse, ClientError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_get.lock().unwrap().clone() {
            return Err(err.into());
        }
        self.response(hash)
    }

    async fn vote(&self, hash: &str, index: usize) -> Result<VoteResponse, ClientError> {
        self.vote_calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        {
            let mut votes = self.votes.lock().unwrap();
            let record = votes.get_mut(hash).ok_or_else(|| {
                VoteError::NotFound("Failed to vote, vote record not found".to_string())
            })?;
            if index >= record.items.len() {
                let message = "Vote item not found, index out of range".to_string();
                return Err(VoteError::BadRequest(message).into());
            }
            let mut selections = self.selections.lock().unwrap();
            let mine = selections.entry(hash.to_string()).or_default();
            if mine.contains(&index) {
                let message = "You already voted for this vote".to_string();
                return Err(VoteError::BadRequest(message).into());
            }
            mine.push(index);
            record.items[index].count += 1;
        }
        self.response(hash)
    }

    async fn get_public_vote(&self) -> Result<Vec<VoteRecord>, ClientError> {
        let votes: Vec<VoteRecord> = self.votes.lock().unwrap().values().cloned().collect();
        if votes.is_empty() {
            return Err(VoteError::NotFound("No vote record found".to_string()).into());
        }
        Ok(votes)
    }

    async fn get_my_vote(&self) -> Result<UserVoteRecord, ClientError> {
        let votes = self.votes.lock().unwrap();
        let owned: Vec<(String, VoteRecord)> = self
            .owned
            .lock()
            .unwrap()
            .iter()
            .filter_map(|hash| votes.get(hash).map(|r| (hash.clone(), r.clone())))
            .collect();
        let participated: Vec<(String, VoteRecord)> = self
            .selections
            .lock()
            .unwrap()
            .keys()
            .filter(|hash| !owned.iter().any(|(h, _)| h == *hash))
            .filter_map(|hash| votes.get(hash).map(|r| (hash.clone(), r.clone())))
            .collect();
        if owned.is_empty() && participated.is_empty() {
            return Err(VoteError::NotFound("No vote record found".to_string()).into());
        }
        Ok(UserVoteRecord { owned, participated })
    }

    async fn create_vote(&self, request: &CreateVoteRecord) -> Result<VoteRecord, ClientError> {
        let hash = format!("{}{}", CALLER, request.title).replace(' ', "-");
        let mut record = record(&hash, &request.title, &[]);
        record.created_by = CALLER.to_string();
        record.items = request
            .names
            .iter()
            .enumerate()
            .map(|(index, name)| VoteItem { index, name: name.clone(), count: 0 })
            .collect();
        self.votes.lock().unwrap().insert(hash.clone(), record.clone());
        self.owned.lock().unwrap().push(hash);
        Ok(record)
    }

    async fn whoami(&self) -> Result<String, ClientError> {
        Ok(CALLER.to_string())
    }
}
