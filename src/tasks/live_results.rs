use crate::backend::VoteBackend;
use crate::voting::{VoteRecordView, project};
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

// Floor for the refresh period; a zero period would spin the ticker
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Re-fetches a vote on every tick and pushes a fresh view down `sender`.
///
/// Failed fetches are logged and skipped so the receiver keeps its last good
/// view. A zero `period` is raised to a millisecond. Returns once the
/// receiver is gone.
pub async fn watch_vote(
    backend: Arc<dyn VoteBackend>,
    hash: String,
    period: Duration,
    sender: mpsc::Sender<VoteRecordView>,
) {
    let period = period.max(MIN_PERIOD);
    info!("Watching vote {} every {:?}", hash, period);
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if sender.is_closed() {
            break;
        }

        match backend.get_vote(&hash).await {
            Ok(response) => {
                let view = project(response.info, response.selection);
                debug!("Vote {} now has {} vote(s)", hash, view.total_count());
                if sender.send(view).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to refresh vote {}: {}", hash, e);
            }
        }
    }

    info!("Stopped watching vote {}", hash);
}
