use sentiment_proto::v1::Feedback;
use sentiment_web_ui_shared::constants::RECENT_LIMIT;
use sentiment_web_ui_shared::utils::format_timestamp;
use yew::{html, Html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub message: String,
    pub meta: String,
}

impl From<&Feedback> for RecentEntry {
    fn from(item: &Feedback) -> Self {
        let who = item
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| format!("{} • ", n))
            .unwrap_or_default();
        let label = item
            .sentiment
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!(" [{}]", s))
            .unwrap_or_default();
        let when = item
            .timestamp
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!(" {}", format_timestamp(t)))
            .unwrap_or_default();

        RecentEntry {
            message: item.message.clone(),
            meta: format!("{}{}{}", who, label, when),
        }
    }
}

/// The entries to show, or `None` when this session isn't allowed to see them.
///
/// Server order is kept, only the head of the list is shown.
pub fn recent_entries(list: &[Feedback], is_admin: bool) -> Option<Vec<RecentEntry>> {
    if !is_admin {
        return None;
    }
    Some(list.iter().take(RECENT_LIMIT).map(RecentEntry::from).collect())
}

pub fn render_recent(entries: &[RecentEntry]) -> Html {
    html! {
        <ul id="recentList" class="list-unstyled">
        { for entries.iter().map(|entry| html! {
            <li>
                <div>{ entry.message.clone() }</div>
                <div class="recent-meta">{ entry.meta.clone() }</div>
            </li>
        }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::{recent_entries, RecentEntry};
    use crate::mock::feedback;

    #[test]
    fn only_admins_see_recent_feedback() {
        let list = vec![feedback(1, "great")];
        assert_eq!(recent_entries(&list, false), None);
        assert_eq!(recent_entries(&list, true).map(|l| l.len()), Some(1));
    }

    #[test]
    fn at_most_ten_in_server_order() {
        let list: Vec<_> = (1..=15)
            .rev()
            .map(|id| feedback(id, &format!("message {}", id)))
            .collect();

        let entries = recent_entries(&list, true).expect("admin sees the list");

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].message, "message 15");
        assert_eq!(entries[9].message, "message 6");
    }

    #[test]
    fn meta_line_skips_what_is_missing() {
        let mut item = feedback(3, "meh");
        assert_eq!(RecentEntry::from(&item).meta, "");

        item.name = Some("Ada".to_string());
        assert_eq!(RecentEntry::from(&item).meta, "Ada • ");

        item.sentiment = Some("Neutral".to_string());
        item.timestamp = Some("2024-05-01T10:20:30.123456".to_string());
        assert_eq!(
            RecentEntry::from(&item).meta,
            "Ada •  [Neutral] 2024-05-01 10:20:30"
        );

        item.name = None;
        assert_eq!(
            RecentEntry::from(&item).meta,
            " [Neutral] 2024-05-01 10:20:30"
        );
    }
}
