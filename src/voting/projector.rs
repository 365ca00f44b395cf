use crate::models::VoteRecord;
use crate::voting::{Selection, VoteItemView, VoteRecordView};

/// Turns a backend vote record and the viewer's selection into a view.
///
/// Item order is kept as the backend sent it. Percentages are zero for
/// options without votes and for records whose total is zero.
pub fn project<I>(record: VoteRecord, selection: I) -> VoteRecordView
where
    I: IntoIterator<Item = usize>,
{
    // Summed wide so a corrupt tally cannot wrap
    let total: u128 = record.items.iter().map(|item| item.count as u128).sum();

    let items = record
        .items
        .into_iter()
        .map(|item| {
            let percent = if item.count == 0 || total == 0 {
                0.0
            } else {
                item.count as f64 / total as f64 * 100.0
            };
            VoteItemView {
                index: item.index,
                name: item.name,
                count: item.count,
                percent,
            }
        })
        .collect();

    VoteRecordView {
        hash: record.hash,
        title: record.title,
        created_by: record.created_by,
        created_at: record.created_at,
        expired_at: record.expired_at,
        max_selection: record.max_selection,
        public: record.public,
        items,
        selection: selection.into_iter().collect(),
    }
}

/// Results stay hidden until the viewer has picked something.
pub fn should_reveal_results(selection: &Selection) -> bool {
    !selection.is_empty()
}
