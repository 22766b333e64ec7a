//! Appointment extraction: same first-match-wins walk as reservations,
//! with the hospital-only fields added.

use ayra_core::{AppointmentDraft, ConversationTurn, TurnContent};

use crate::{datetime, fields};

pub(crate) fn extract(turns: &[ConversationTurn]) -> Option<AppointmentDraft> {
    let mut draft = AppointmentDraft::default();

    for turn in turns {
        let Some(content) = turn.content.as_ref().and_then(TurnContent::text) else {
            continue;
        };

        if draft.patient_name.is_empty() {
            if let Some(name) = fields::name(content) {
                draft.patient_name = name;
            }
        }
        if draft.patient_id.is_empty() {
            if let Some(id) = fields::patient_id(content) {
                draft.patient_id = id;
            }
        }
        if draft.phone.is_empty() {
            if let Some(phone) = fields::phone(content) {
                draft.phone = phone;
            }
        }
        if draft.doctor.is_empty() {
            if let Some(doctor) = fields::doctor(content) {
                draft.doctor = doctor;
            }
        }
        if draft.department.is_empty() {
            if let Some(department) = fields::department(content) {
                draft.department = department;
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
        if draft.reason.is_empty() {
            if let Some(reason) = fields::reason(content) {
                draft.reason = reason;
            }
        }
    }

    // Validity gate: a patient name plus at least one of date/time.
    if !draft.patient_name.is_empty() && (!draft.date.is_empty() || !draft.time.is_empty()) {
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
    fn full_appointment_from_one_turn() {
        let draft = extract(&turns(&[
            "My name is Meena Krishnamurthy. I'd like an appointment on 2023-06-15 \
             at 10:00am with department of cardiology.",
        ]))
        .unwrap_or_default();

        assert_eq!(draft.patient_name, "Meena Krishnamurthy");
        assert_eq!(draft.date, "2023-06-15");
        assert_eq!(draft.time, "10:00");
        assert_eq!(draft.department, "cardiology");
    }

    #[test]
    fn doctor_and_reason_fill_independently() {
        let draft = extract(&turns(&[
            "name is Arun",
            "I need to see Dr. Kapoor at 4pm",
            "the reason is back pain. thank you",
        ]))
        .unwrap_or_default();

        // The doctor rule is letters-and-spaces only, so it runs up to the
        // clock digits. Quirky, and exactly what the rule says.
        assert_eq!(draft.doctor, "Kapoor at");
        assert_eq!(draft.time, "16:00");
        assert_eq!(draft.reason, "back pain");
    }

    #[test]
    fn patient_name_with_date_or_time_required() {
        assert!(extract(&turns(&["name is Arun"])).is_none());
        assert!(extract(&turns(&["appointment on June 3rd"])).is_none());
        assert!(extract(&turns(&["name is Arun", "on June 3rd"])).is_some());
    }

    #[test]
    fn structured_turns_are_skipped() {
        let mut all = turns(&["name is Arun", "at 4pm"]);
        all.push(ConversationTurn {
            role: ayra_core::TurnRole::Tool,
            content: Some(TurnContent::Structured(
                serde_json::json!({"content": "name is Zoya"}),
            )),
            timestamp: None,
        });
        let draft = extract(&all).unwrap_or_default();
        assert_eq!(draft.patient_name, "Arun");
    }
}
