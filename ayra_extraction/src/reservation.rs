//! Reservation extraction: first turn to match a field wins, per field.

use ayra_core::{ConversationTurn, ReservationDraft, TurnContent};

use crate::{datetime, fields};

pub(crate) fn extract(turns: &[ConversationTurn]) -> Option<ReservationDraft> {
    let mut draft = ReservationDraft::default();

    for turn in turns {
        let Some(content) = turn.content.as_ref().and_then(TurnContent::text) else {
            continue;
        };

        if draft.name.is_empty() {
            if let Some(name) = fields::name(content) {
                draft.name = name;
            }
        }
        if draft.phone.is_empty() {
            if let Some(phone) = fields::phone(content) {
                draft.phone = phone;
            }
        }
        if draft.date.is_empty() {
            if let Some(date) = fields::date(content) {
                draft.date = datetime::normalize_date(&date);
            }
        }
        if draft.time.is_empty() {
            if let Some(time) = fields::time(content) {
                draft.time = datetime::to_24h(&time);
            }
        }
        if draft.guests.is_none() {
            draft.guests = fields::guests(content);
        }
        if draft.special_requests.is_empty() {
            if let Some(requests) = fields::special_requests(content) {
                draft.special_requests = requests;
            }
        }
    }

    // Validity gate: a name plus at least one of date/time.
    if !draft.name.is_empty() && (!draft.date.is_empty() || !draft.time.is_empty()) {
        Some(draft)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turns(texts: &[&str]) -> Vec<ConversationTurn> {
        texts.iter().map(|t| ConversationTurn::text(*t)).collect()
    }

    #[test]
    fn first_match_wins_per_field() {
        let draft = extract(&turns(&["name is Alice", "name is Bob", "at 7pm"]))
            .unwrap_or_default();
        assert_eq!(draft.name, "Alice");
    }

    #[test]
    fn fields_fill_from_different_turns() {
        let draft = extract(&turns(&[
            "my name is Raj",
            "table for 4 on June 1st",
            "at 7:30pm, phone number is 98765",
        ]))
        .unwrap_or_default();
        assert_eq!(draft.name, "Raj");
        assert_eq!(draft.guests, Some(4));
        assert_eq!(draft.time, "19:30");
        assert_eq!(draft.phone, "98765");
        assert!(draft.date.ends_with("-06-01"));
    }

    #[test]
    fn name_alone_is_not_enough() {
        assert!(extract(&turns(&["name is Alice"])).is_none());
        assert!(extract(&turns(&["name is Alice", "at 7pm"])).is_some());
    }

    #[test]
    fn time_alone_is_not_enough() {
        assert!(extract(&turns(&["see you at 7pm"])).is_none());
    }
}
