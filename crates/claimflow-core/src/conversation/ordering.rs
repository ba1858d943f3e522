//! Conversation ordering policy.
//!
//! List surfaces recompute their ordering from scratch on every refresh
//! rather than maintaining incremental state, so the policy lives here as a
//! pure function over the input collection.

use super::model::Conversation;

/// Orders conversations by descending recency for display.
///
/// Recency is [`Conversation::effective_recency`]: the last message's
/// creation time when a message exists, else the record's `updated_at`.
/// Equal timestamps are broken by conversation id ascending, so the order
/// is total and identical across repeated calls.
///
/// The input records are reordered, never mutated, added, or removed.
///
/// # Examples
///
/// ```
/// use claimflow_core::conversation::ordering::sort_by_recency;
///
/// let sorted = sort_by_recency(Vec::new());
/// assert!(sorted.is_empty());
/// ```
pub fn sort_by_recency(mut conversations: Vec<Conversation>) -> Vec<Conversation> {
    conversations.sort_by(|a, b| {
        b.effective_recency()
            .cmp(&a.effective_recency())
            .then_with(|| a.id.cmp(&b.id))
    });
    conversations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::model::MessageSummary;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashSet;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn conversation(id: &str, last_message_at: Option<i64>, updated_at: i64) -> Conversation {
        Conversation {
            id: id.to_string(),
            participant_ids: vec!["viewer".to_string(), "peer".to_string()],
            last_message: last_message_at.map(|secs| MessageSummary {
                sender_id: "peer".to_string(),
                content: "latest".to_string(),
                created_at: at(secs),
            }),
            updated_at: at(updated_at),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(sort_by_recency(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_element_unchanged() {
        let input = vec![conversation("only", Some(10), 5)];
        let sorted = sort_by_recency(input.clone());
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_sorted_descending_by_effective_recency() {
        let sorted = sort_by_recency(vec![
            conversation("a", Some(10), 5),
            conversation("b", Some(30), 5),
            conversation("c", Some(20), 5),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        for pair in sorted.windows(2) {
            assert!(pair[0].effective_recency() >= pair[1].effective_recency());
        }
    }

    #[test]
    fn test_missing_last_message_uses_updated_at() {
        // B has no message but was updated later than A's last message, so
        // B ranks first.
        let sorted = sort_by_recency(vec![
            conversation("a", Some(10), 1),
            conversation("b", None, 20),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_equal_timestamps_break_ties_by_id_ascending() {
        let input = vec![
            conversation("zulu", None, 5),
            conversation("alpha", None, 5),
            conversation("mike", None, 5),
        ];

        let sorted = sort_by_recency(input.clone());
        let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mike", "zulu"]);

        // The tie-break must hold across repeated calls regardless of input
        // order.
        let mut reversed = input;
        reversed.reverse();
        let resorted = sort_by_recency(reversed);
        let ids_again: Vec<&str> = resorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids_again, ids);
    }

    #[test]
    fn test_output_is_a_pure_permutation_of_input() {
        let input = vec![
            conversation("a", Some(40), 1),
            conversation("b", None, 50),
            conversation("c", Some(20), 60),
            conversation("d", None, 20),
        ];
        let originals: Vec<Conversation> = input.clone();

        let sorted = sort_by_recency(input);
        assert_eq!(sorted.len(), originals.len());

        let sorted_ids: HashSet<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        let original_ids: HashSet<&str> = originals.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(sorted_ids, original_ids);

        // Every record survives untouched, only positions change.
        for original in &originals {
            let found = sorted.iter().find(|c| c.id == original.id).unwrap();
            assert_eq!(found, original);
        }
    }
}
