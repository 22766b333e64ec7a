//! Per-field lexical rules.
//!
//! Each matcher looks at a single turn's text and returns the trimmed
//! capture, or `None`. The rules are intentionally lexical; no language
//! understanding happens here.

use once_cell::sync::Lazy;
use regex::Regex;

use ayra_core::OrderItem;

macro_rules! rule {
    ($name:ident, $pattern:literal) => {
        #[allow(clippy::unwrap_used)]
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).unwrap());
    };
}

rule!(NAME_IS, r"(?i)name is ([A-Za-z\s]+)");
rule!(NAME_FOR, r"(?i)for ([A-Za-z\s]+)");
rule!(PHONE, r"(?i)phone (?:number|is) ([0-9+\s-]+)");
rule!(DATE_ISO, r"(\d{4}-\d{2}-\d{2})");
rule!(DATE_MONTH_DAY, r"(?i)(?:on|for) ([A-Za-z]+\s+\d{1,2}(?:st|nd|rd|th)?)");
rule!(DATE_DAY_OF_MONTH, r"(?i)(?:on|for) (\d{1,2}(?:st|nd|rd|th)? of [A-Za-z]+)");
rule!(DATE_NUMERIC, r"(\d{1,2}/\d{1,2}(?:/\d{2,4})?)");
rule!(TIME, r"(?i)at (\d{1,2}(?::\d{2})?\s*(?:am|pm))");
rule!(GUESTS_TABLE, r"(?i)table for (\d+)");
rule!(GUESTS_PEOPLE, r"(?i)(\d+) people");
rule!(GUESTS_PARTY, r"(?i)party of (\d+)");
rule!(
    REQUESTS,
    r"(?i)(?:special requests?|notes?|preferences?)(?:\s*:)?\s*(.+?)(?:\.|$)"
);
rule!(ADDRESS, r"(?i)(?:address|deliver to) (?:is|at) (.+?)(?:\.|$)");
rule!(DELIVERY_HINT, r"(?i)delivery|deliver to me|bring it to");
rule!(
    ITEMS,
    r"(?i)(?:order|like|want)(?:\s+to\s+order)?(?:\s+a|\s+an|\s+the|\s+some|\s+)?\s+(.+?)(?:\.|$)"
);
rule!(ITEM_SPLIT, r",|\s+and\s+");
rule!(ITEM_QUANTITY, r"(\d+)\s+(.+)");
rule!(
    PATIENT_ID,
    r"(?i)(?:patient|ID|identification) (?:number|id|is) ([a-zA-Z0-9\-]+)"
);
rule!(DOCTOR, r"(?i)(?:Dr\.|Doctor) ([A-Za-z\s]+)");
rule!(DEPARTMENT, r"(?i)(?:department|clinic|speciality) (?:of|is) ([A-Za-z\s]+)");
rule!(
    REASON,
    r"(?i)(?:appointment|visit|reason|consult) (?:for|is|about) ([^.]+)"
);

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// "name is X", falling back to "for X".
pub fn name(text: &str) -> Option<String> {
    capture(&NAME_IS, text).or_else(|| capture(&NAME_FOR, text))
}

pub fn phone(text: &str) -> Option<String> {
    capture(&PHONE, text)
}

/// Raw date phrase: ISO, "on June 15th", "on 15th of June", or D/M[/YYYY].
/// Calendar normalization happens in [`crate::datetime`].
pub fn date(text: &str) -> Option<String> {
    capture(&DATE_ISO, text)
        .or_else(|| capture(&DATE_MONTH_DAY, text))
        .or_else(|| capture(&DATE_DAY_OF_MONTH, text))
        .or_else(|| capture(&DATE_NUMERIC, text))
}

/// Raw "H[:MM]am|pm" phrase after "at".
pub fn time(text: &str) -> Option<String> {
    capture(&TIME, text)
}

pub fn guests(text: &str) -> Option<u32> {
    capture(&GUESTS_TABLE, text)
        .or_else(|| capture(&GUESTS_PEOPLE, text))
        .or_else(|| capture(&GUESTS_PARTY, text))
        .and_then(|n| n.parse().ok())
}

pub fn special_requests(text: &str) -> Option<String> {
    capture(&REQUESTS, text)
}

pub fn address(text: &str) -> Option<String> {
    capture(&ADDRESS, text)
}

pub fn mentions_delivery(text: &str) -> bool {
    DELIVERY_HINT.is_match(text)
}

pub fn patient_id(text: &str) -> Option<String> {
    capture(&PATIENT_ID, text)
}

pub fn doctor(text: &str) -> Option<String> {
    capture(&DOCTOR, text)
}

pub fn department(text: &str) -> Option<String> {
    capture(&DEPARTMENT, text)
}

pub fn reason(text: &str) -> Option<String> {
    capture(&REASON, text)
}

/// Parse an order phrase into items. Chunks split on commas or " and ";
/// a leading count becomes the quantity, otherwise 1. Prices are never
/// inferred from text.
pub fn order_items(text: &str) -> Vec<OrderItem> {
    let Some(phrase) = capture(&ITEMS, text) else {
        return Vec::new();
    };

    ITEM_SPLIT
        .split(&phrase)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            ITEM_QUANTITY
                .captures(chunk)
                .and_then(|caps| {
                    let quantity = caps.get(1)?.as_str().parse().ok()?;
                    Some(OrderItem {
                        name: caps.get(2)?.as_str().trim().to_string(),
                        quantity,
                        price: 0.0,
                    })
                })
                .unwrap_or_else(|| OrderItem {
                    name: chunk.to_string(),
                    quantity: 1,
                    price: 0.0,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_prefers_explicit_statement() {
        assert_eq!(name("my name is Alice Smith"), Some("Alice Smith".into()));
        assert_eq!(name("a table for Bob please"), Some("Bob please".into()));
        assert_eq!(name("hello there"), None);
    }

    #[test]
    fn phone_accepts_separators() {
        assert_eq!(
            phone("my phone number is 98765 43210"),
            Some("98765 43210".into())
        );
        assert_eq!(phone("phone is +91-98-7654"), Some("+91-98-7654".into()));
    }

    #[test]
    fn date_matches_all_forms() {
        assert_eq!(date("on June 15th"), Some("June 15th".into()));
        assert_eq!(date("for 3rd of March"), Some("3rd of March".into()));
        assert_eq!(date("come 15/6/2024 ok"), Some("15/6/2024".into()));
        assert_eq!(date("the 15/6 slot"), Some("15/6".into()));
        assert_eq!(date("scheduled 2023-06-15 here"), Some("2023-06-15".into()));
        assert_eq!(date("no date here"), None);
    }

    #[test]
    fn time_requires_meridiem() {
        assert_eq!(time("at 9:15pm"), Some("9:15pm".into()));
        assert_eq!(time("at 7 am"), Some("7 am".into()));
        assert_eq!(time("at 19:00"), None);
    }

    #[test]
    fn guests_from_any_phrasing() {
        assert_eq!(guests("table for 4"), Some(4));
        assert_eq!(guests("we are 6 people"), Some(6));
        assert_eq!(guests("party of 12"), Some(12));
        assert_eq!(guests("just me"), None);
    }

    #[test]
    fn requests_stop_at_period() {
        assert_eq!(
            special_requests("special requests: window seat. also cake"),
            Some("window seat".into())
        );
    }

    #[test]
    fn items_split_and_count() {
        let items = order_items("I want to order 2 pizzas and a salad.");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "pizzas");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].name, "a salad");
        assert_eq!(items[1].quantity, 1);
        assert!(items.iter().all(|i| i.price == 0.0));
    }

    #[test]
    fn delivery_hints() {
        assert!(mentions_delivery("please bring it to my office"));
        assert!(mentions_delivery("is delivery available"));
        assert!(!mentions_delivery("I will pick it up"));
    }

    #[test]
    fn hospital_fields() {
        assert_eq!(patient_id("my ID is PT-104"), Some("PT-104".into()));
        assert_eq!(doctor("with Dr. Rao"), Some("Rao".into()));
        assert_eq!(
            department("department of cardiology please"),
            Some("cardiology please".into())
        );
        assert_eq!(
            reason("the reason for chest pain. thanks"),
            Some("chest pain".into())
        );
    }
}
