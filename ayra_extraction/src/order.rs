//! Order extraction. Unlike the scalar fields, every turn with an order
//! phrase contributes items; fulfillment flips to delivery once any turn
//! mentions it and never flips back.

use ayra_core::{ConversationTurn, Fulfillment, OrderDraft, TurnContent};

use crate::fields;

pub(crate) fn extract(turns: &[ConversationTurn]) -> Option<OrderDraft> {
    let mut draft = OrderDraft::default();

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
        if draft.address.is_empty() {
            if let Some(address) = fields::address(content) {
                draft.address = address;
                draft.fulfillment = Fulfillment::Delivery;
            }
        }
        if fields::mentions_delivery(content) {
            draft.fulfillment = Fulfillment::Delivery;
        }

        draft.items.extend(fields::order_items(content));
    }

    // Validity gate: a name plus at least one item.
    if draft.name.is_empty() || draft.items.is_empty() {
        return None;
    }

    draft.total = draft.item_total();
    Some(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turns(texts: &[&str]) -> Vec<ConversationTurn> {
        texts.iter().map(|t| ConversationTurn::text(*t)).collect()
    }

    #[test]
    fn collects_items_across_turns() {
        let draft = extract(&turns(&[
            "name is Priya",
            "I want to order 2 dosas and a filter coffee.",
            "also I would like some gulab jamun.",
        ]))
        .unwrap_or_default();

        assert_eq!(draft.name, "Priya");
        assert_eq!(draft.items.len(), 3);
        assert_eq!(draft.items[0].quantity, 2);
        assert_eq!(draft.fulfillment, Fulfillment::Pickup);
        assert!(draft.total.abs() < f64::EPSILON);
    }

    #[test]
    fn address_switches_to_delivery() {
        let draft = extract(&turns(&[
            "name is Priya, I want a veg thali.",
            "deliver to is 5 MG Road.",
        ]))
        .unwrap_or_default();
        assert_eq!(draft.fulfillment, Fulfillment::Delivery);
        assert_eq!(draft.address, "5 MG Road");
    }

    #[test]
    fn delivery_phrase_alone_switches() {
        let draft = extract(&turns(&["name is Priya, I want a veg thali, delivery please."]))
            .unwrap_or_default();
        assert_eq!(draft.fulfillment, Fulfillment::Delivery);
        assert!(draft.address.is_empty());
    }

    #[test]
    fn items_required() {
        assert!(extract(&turns(&["name is Priya"])).is_none());
    }

    #[test]
    fn name_required() {
        assert!(extract(&turns(&["I want to order a pizza."])).is_none());
    }
}
