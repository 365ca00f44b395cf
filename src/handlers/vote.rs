use crate::backend::VoteBackend;
use crate::handlers::Tip;
use crate::voting::{VoteRecordView, project};
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOutcome {
    Voted,
    Failed,
    LoginRequired,
    InFlight,
    NotSelectable,
}

#[derive(Debug, Default)]
struct PageState {
    view: Option<VoteRecordView>,
    tip: Option<Tip>,
}

// Clears the in-flight flag however the cast ends
struct CastGuard<'a>(&'a AtomicBool);

impl Drop for CastGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One open vote: fetches, casts, and keeps the latest view.
///
/// A failed call only sets a tip; the last good view stays on screen. At most
/// one cast is in flight per page, further clicks are refused locally until it
/// settles.
pub struct VotePage {
    backend: Arc<dyn VoteBackend>,
    hash: String,
    logged_in: bool,
    state: Mutex<PageState>,
    casting: AtomicBool,
}

impl VotePage {
    pub fn new(backend: Arc<dyn VoteBackend>, hash: impl Into<String>, logged_in: bool) -> Self {
        Self {
            backend,
            hash: hash.into(),
            logged_in,
            state: Mutex::new(PageState::default()),
            casting: AtomicBool::new(false),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        // The state is replaced wholesale, so a poisoned lock still holds a usable value
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> (Option<VoteRecordView>, Option<Tip>) {
        let state = self.state();
        (state.view.clone(), state.tip.clone())
    }

    pub fn view(&self) -> Option<VoteRecordView> {
        self.state().view.clone()
    }

    pub fn tip(&self) -> Option<Tip> {
        self.state().tip.clone()
    }

    pub fn dismiss_tip(&self) {
        self.state().tip = None;
    }

    pub fn is_casting(&self) -> bool {
        self.casting.load(Ordering::Acquire)
    }

    /// Fetches the vote and replaces the view; errors go to the tip.
    pub async fn load(&self) -> bool {
        match self.backend.get_vote(&self.hash).await {
            Ok(response) => {
                let view = project(response.info, response.selection);
                self.state().view = Some(view);
                true
            }
            Err(e) => {
                warn!("Failed to load vote {}: {}", self.hash, e);
                self.state().tip = Some(Tip::error(e.display_message()));
                false
            }
        }
    }

    /// Same as `load` but a failure leaves the tip alone.
    pub async fn refresh(&self) -> bool {
        match self.backend.get_vote(&self.hash).await {
            Ok(response) => {
                self.state().view = Some(project(response.info, response.selection));
                true
            }
            Err(e) => {
                warn!("Failed to refresh vote {}: {}", self.hash, e);
                false
            }
        }
    }

    pub async fn cast(&self, index: usize) -> CastOutcome {
        if !self.logged_in {
            self.state().tip = Some(Tip::error("Please login first!"));
            return CastOutcome::LoginRequired;
        }

        if self.casting.swap(true, Ordering::AcqRel) {
            info!("Vote on {} already in flight, ignoring option {}", self.hash, index);
            self.state().tip = Some(Tip::info("Your vote is being submitted, please wait"));
            return CastOutcome::InFlight;
        }
        let _guard = CastGuard(&self.casting);

        {
            let mut state = self.state();
            if let Some(view) = &state.view {
                if !view.can_select(index) {
                    let message = if view.item(index).is_none() {
                        "Vote item not found, index out of range".to_string()
                    } else if view.is_selected(index) {
                        "You already voted for this option".to_string()
                    } else {
                        format!("Max selection is {}", view.max_selection)
                    };
                    state.tip = Some(Tip::error(message));
                    return CastOutcome::NotSelectable;
                }
            }
        }

        info!("Casting vote on {} for option {}", self.hash, index);
        match self.backend.vote(&self.hash, index).await {
            Ok(response) => {
                let view = project(response.info, response.selection);
                let mut state = self.state();
                state.view = Some(view);
                state.tip = Some(Tip::success("vote succeed!"));
                CastOutcome::Voted
            }
            Err(e) => {
                warn!("Vote on {} failed: {}", self.hash, e);
                self.state().tip = Some(Tip::error(e.display_message()));
                CastOutcome::Failed
            }
        }
    }
}
