use crate::models::AdviceItem;
use crate::views::{AdviceRow, AdviceTone, Listing};

pub const NO_ADVICE: &str =
    "💡 Keep tracking your finances! More insights will be available as you add more data.";

pub fn project_advice(items: &[AdviceItem]) -> Listing<AdviceRow> {
    let rows = items.iter().map(project_advice_item).collect();
    Listing::from_items(rows, NO_ADVICE)
}

pub fn project_advice_item(item: &AdviceItem) -> AdviceRow {
    AdviceRow {
        kind: item.kind.clone(),
        tone: tone_for(&item.kind),
        icon: item.icon.clone(),
        message: item.message.clone(),
        suggestion: item
            .suggestion
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string),
    }
}

/// Unknown types get the neutral styling rather than being rejected.
pub fn tone_for(kind: &str) -> AdviceTone {
    match kind {
        "alert" => AdviceTone::Alert,
        "positive" => AdviceTone::Positive,
        "warning" => AdviceTone::Warning,
        _ => AdviceTone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: &str, suggestion: Option<&str>) -> AdviceItem {
        AdviceItem {
            kind: kind.to_string(),
            icon: "🚨".to_string(),
            message: format!("{kind} message"),
            suggestion: suggestion.map(str::to_string),
        }
    }

    #[test]
    fn known_types_keep_their_tone() {
        assert_eq!(tone_for("alert"), AdviceTone::Alert);
        assert_eq!(tone_for("positive"), AdviceTone::Positive);
        assert_eq!(tone_for("warning"), AdviceTone::Warning);
    }

    #[test]
    fn unknown_types_fall_back_to_neutral() {
        for kind in ["caution", "info", "excellent", "", "ALERT"] {
            assert_eq!(tone_for(kind), AdviceTone::Neutral, "{kind}");
        }
        let row = project_advice_item(&item("planning", None));
        assert_eq!(row.kind, "planning");
        assert_eq!(row.tone, AdviceTone::Neutral);
    }

    #[test]
    fn fields_pass_through_in_order() {
        let listing = project_advice(&[
            item("alert", Some("Cut back")),
            item("positive", None),
            item("info", Some("   ")),
        ]);
        let rows = listing.items();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].message, "alert message");
        assert_eq!(rows[0].icon, "🚨");
        assert_eq!(rows[0].suggestion.as_deref(), Some("Cut back"));
        assert_eq!(rows[1].suggestion, None);
        assert_eq!(rows[2].suggestion, None);
    }

    #[test]
    fn no_advice_is_placeholder() {
        let listing = project_advice(&[]);
        assert!(listing.is_empty());
        assert_eq!(
            listing,
            Listing::Empty {
                placeholder: NO_ADVICE.to_string()
            }
        );
    }
}
