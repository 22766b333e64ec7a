//! The merged upcoming feed.
//!
//! Four independent reads (concurrent, no ordering dependency), one derived
//! instant per row, one stable ascending sort, one truncation. Unparsable
//! date/time values sort as "now" rather than crashing or dropping the row.
//! A failure in any of the four reads fails the whole call; no partial feed
//! is ever returned.

use chrono::Utc;

use ayra_core::{Activity, ActivityStore, FeedEntry};
use ayra_extraction::datetime;

/// Produce the next `limit` activities across all kinds, soonest first.
/// `limit` 0 yields an empty feed.
pub async fn list_upcoming(
    store: &dyn ActivityStore,
    limit: usize,
) -> anyhow::Result<Vec<FeedEntry>> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let today = Utc::now().date_naive();
    let (reservations, orders, appointments, reminders) = tokio::try_join!(
        store.list_reservations_from(today),
        store.list_open_orders(),
        store.list_appointments_from(today),
        store.list_scheduled_reminders(),
    )?;

    let now = Utc::now();
    let mut feed =
        Vec::with_capacity(reservations.len() + orders.len() + appointments.len() + reminders.len());

    feed.extend(reservations.into_iter().map(|r| FeedEntry {
        instant: datetime::combine_instant(&r.date, &r.time).unwrap_or(now),
        activity: Activity::Reservation(r),
    }));

    feed.extend(orders.into_iter().map(|o| {
        // Delivery slot beats pickup slot beats the time the order landed.
        let instant = match (o.delivery_time.as_deref(), o.pickup_time.as_deref()) {
            (Some(s), _) => datetime::parse_instant(s).unwrap_or(now),
            (None, Some(s)) => datetime::parse_instant(s).unwrap_or(now),
            (None, None) => o.order_time,
        };
        FeedEntry {
            instant,
            activity: Activity::Order(o),
        }
    }));

    feed.extend(appointments.into_iter().map(|a| FeedEntry {
        instant: datetime::combine_instant(&a.date, &a.time).unwrap_or(now),
        activity: Activity::Appointment(a),
    }));

    feed.extend(reminders.into_iter().map(|r| {
        let instant = r
            .scheduled_for
            .as_deref()
            .map_or_else(|| datetime::combine_instant(&r.date, &r.time), datetime::parse_instant)
            .unwrap_or(now);
        FeedEntry {
            instant,
            activity: Activity::Reminder(r),
        }
    }));

    // Stable sort: ties keep read order (reservations, orders,
    // appointments, reminders).
    feed.sort_by_key(|entry| entry.instant);
    feed.truncate(limit);

    Ok(feed)
}
