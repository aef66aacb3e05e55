use chrono::NaiveDate;
use civiq_types::{date_label, normalize_date, ChatSummary};

/// The three display buckets of the sidebar.
///
/// Precedence is pinned > archived > regular, so a record that is both pinned
/// and archived renders in the Pinned section only and every record lands in
/// exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedChats {
    pub pinned: Vec<ChatSummary>,
    pub archived: Vec<ChatSummary>,
    /// Regular chats grouped by creation date, newest group first.
    pub regular: Vec<DateGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    /// Display label, e.g. "01 June 2024", or "Undated" when the wire date
    /// could not be parsed.
    pub label: String,
    pub date: Option<NaiveDate>,
    /// Most-recently-added chat first.
    pub chats: Vec<ChatSummary>,
}

const UNDATED_LABEL: &str = "Undated";

/// Partition a flat collection into the display buckets.
///
/// Pinned and archived buckets keep collection order. Regular chats group by
/// normalized date; groups sort newest first with undated chats trailing, and
/// each group lists its chats in reverse insertion order.
pub fn group_chats(chats: &[ChatSummary]) -> GroupedChats {
    let mut grouped = GroupedChats::default();

    for chat in chats {
        if chat.pinned {
            grouped.pinned.push(chat.clone());
        } else if chat.archived {
            grouped.archived.push(chat.clone());
        } else {
            let date = normalize_date(&chat.date);
            match grouped.regular.iter_mut().find(|g| g.date == date) {
                Some(group) => group.chats.push(chat.clone()),
                None => grouped.regular.push(DateGroup {
                    label: date.map(date_label).unwrap_or_else(|| UNDATED_LABEL.to_string()),
                    date,
                    chats: vec![chat.clone()],
                }),
            }
        }
    }

    grouped.regular.sort_by(|a, b| match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    for group in &mut grouped.regular {
        group.chats.reverse();
    }

    grouped
}
