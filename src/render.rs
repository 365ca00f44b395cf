use crate::handlers::{ExplorePage, MinePage, Route, Severity, Tip};
use crate::voting::VoteRecordView;
use chrono::{DateTime, Utc};

const BAR_WIDTH: usize = 30;

pub fn progress_bar(value: f64) -> String {
    let value = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    let filled = ((value / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn tip(tip: &Tip) -> String {
    let label = match tip.severity {
        Severity::Error => "error",
        Severity::Success => "success",
        Severity::Info => "info",
    };
    format!("({}) {}", label, tip.message)
}

pub fn vote(view: Option<&VoteRecordView>, notice: Option<&Tip>, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    if let Some(view) = view {
        let reveal = view.should_reveal();
        out.push_str(&format!("**{}**\n", view.title));
        out.push_str(&format!(
            "Created by {} on {}\n",
            view.created_by,
            view.created_at_utc().format("%Y-%m-%d")
        ));

        for item in &view.items {
            let mut line = format!("Option - {} :", item.name);
            if reveal {
                line.push_str(&format!(" {:.2}% ({})", item.percent, item.count));
                if view.is_selected(item.index) {
                    line.push_str(" ✅");
                }
            }
            out.push_str(&line);
            out.push('\n');
            out.push_str(&progress_bar(view.progress(item.index)));
            out.push('\n');
        }

        out.push_str(&"-".repeat(BAR_WIDTH + 2));
        out.push('\n');
        if view.is_expired(now) {
            out.push_str("This vote has expired.\n");
        } else if let Some(expires_at) = view.expires_at_utc() {
            out.push_str(&format!(
                "Open until {}\n",
                expires_at.format("%Y-%m-%d %H:%M UTC")
            ));
        }
        out.push_str(&format!(
            "Tips: Click option to vote and max selection is {}.\n",
            view.max_selection
        ));
    }

    if let Some(notice) = notice {
        out.push_str(&tip(notice));
        out.push('\n');
    }
    out
}

pub fn explore(page: &ExplorePage, query: Option<&str>, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    if let Some(votes) = &page.votes {
        if votes.is_empty() {
            out.push_str("No public votes yet.\n");
        }
        for record in votes {
            let link = Route::Vote {
                hash: record.hash.clone(),
            }
            .link(query);
            let status = if record.is_expired(now) { ", closed" } else { "" };
            out.push_str(&format!(
                "{} ({} options, created {}{}) -> {}\n",
                record.title,
                record.items.len(),
                record.created_at_utc().format("%Y-%m-%d"),
                status,
                link
            ));
        }
    }
    if let Some(notice) = &page.tip {
        out.push_str(&tip(notice));
        out.push('\n');
    }
    out
}

pub fn mine(page: &MinePage, query: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(votes) = &page.votes {
        out.push_str("owned:\n");
        for (hash, record) in &votes.owned {
            let link = Route::Vote { hash: hash.clone() }.link(query);
            out.push_str(&format!("  {} -> {}\n", record.title, link));
        }
        out.push_str("participated:\n");
        for (_, record) in &votes.participated {
            out.push_str(&format!("  {}\n", record.title));
        }
    }
    if let Some(notice) = &page.tip {
        out.push_str(&tip(notice));
        out.push('\n');
    }
    out
}

pub fn error_page(message: &str) -> String {
    format!("Oops!\nSorry, an unexpected error has occurred.\n{}\n", message)
}
