pub mod live_results;

pub use live_results::watch_vote;
