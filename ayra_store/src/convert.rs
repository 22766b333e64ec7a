//! Entity model <-> domain conversions.

use ayra_core::{
    Appointment, Conversation, ConversationTurn, Order, OrderItem, Reminder, Reservation, Vertical,
};
use ayra_entities::{
    conversations, hospital_appointments, hospital_reminders, restaurant_orders,
    restaurant_reservations,
};

/// Encode order items for the TEXT column.
pub fn items_to_json(items: &[OrderItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decode the items column; rows with mangled JSON become empty item lists
/// rather than failing the whole read.
pub fn items_from_json(raw: &str) -> Vec<OrderItem> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn reservation_from_model(m: restaurant_reservations::Model) -> Reservation {
    Reservation {
        id: m.id,
        name: m.name,
        phone: m.phone,
        date: m.date,
        time: m.time,
        guests: m.guests,
        special_requests: m.special_requests,
        status: m.status,
        created_at: m.created_at,
    }
}

pub fn order_from_model(m: restaurant_orders::Model) -> Order {
    Order {
        id: m.id,
        name: m.name,
        phone: m.phone,
        address: m.address,
        items: items_from_json(&m.items),
        total: m.total,
        fulfillment: m.fulfillment.parse().unwrap_or_default(),
        status: m.status,
        order_time: m.order_time,
        delivery_time: m.delivery_time,
        pickup_time: m.pickup_time,
    }
}

pub fn appointment_from_model(m: hospital_appointments::Model) -> Appointment {
    Appointment {
        id: m.id,
        patient_name: m.patient_name,
        patient_id: m.patient_id,
        phone: m.phone,
        doctor: m.doctor,
        department: m.department,
        date: m.date,
        time: m.time,
        reason: m.reason,
        status: m.status,
        created_at: m.created_at,
    }
}

pub fn reminder_from_model(m: hospital_reminders::Model) -> Reminder {
    Reminder {
        id: m.id,
        patient_name: m.patient_name,
        patient_id: m.patient_id,
        phone: m.phone,
        reminder_type: m.reminder_type,
        date: m.date,
        time: m.time,
        doctor: m.doctor,
        message: m.message,
        status: m.status,
        created_at: m.created_at,
        scheduled_for: m.scheduled_for,
        sent_at: m.sent_at,
    }
}

pub fn conversation_from_model(m: conversations::Model) -> anyhow::Result<Conversation> {
    let vertical: Vertical = m.vertical.parse()?;
    let turns: Vec<ConversationTurn> = serde_json::from_str(&m.data)?;

    Ok(Conversation {
        id: m.id,
        vertical,
        agent_type: m.agent_type,
        user_name: m.user_name,
        summary: m.summary,
        status: m.status,
        turns,
        created_at: m.timestamp,
    })
}

pub fn conversation_turns_json(row: &Conversation) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&row.turns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_round_trip() {
        let items = vec![OrderItem {
            name: "dal makhani".to_string(),
            quantity: 2,
            price: 220.0,
        }];
        let json = items_to_json(&items);
        assert_eq!(items_from_json(&json), items);
    }

    #[test]
    fn mangled_items_decode_empty() {
        assert!(items_from_json("not json").is_empty());
    }
}
