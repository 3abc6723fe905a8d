use crate::domain::OvenSnapshot;
use serde_json::Value;

const MICROWAVE_STATE_FIELD: &str = "LWOState";
const MICROWAVE_FIELD_PREFIX: &str = "LWO";

/// Classifies the field-naming convention of a `snapshot.ovenState` report.
///
/// Returns `None` when the report is not an object.
pub fn classify_oven_state(oven_state: &Value) -> Option<OvenSnapshot> {
    let fields = oven_state.as_object()?;

    let microwave_style = fields.contains_key(MICROWAVE_STATE_FIELD) || fields.keys().any(|key| key.starts_with(MICROWAVE_FIELD_PREFIX));
    if microwave_style {
        Some(OvenSnapshot::MicrowaveStyle)
    } else {
        Some(OvenSnapshot::Oven)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "LWOState": "INITIAL" }), Some(OvenSnapshot::MicrowaveStyle))]
    #[case(json!({ "LWOTemp": 0, "LWOCookMode": "MICROWAVE" }), Some(OvenSnapshot::MicrowaveStyle))]
    #[case(json!({ "upperState": "INITIAL", "LWOMode": "OFF" }), Some(OvenSnapshot::MicrowaveStyle))]
    #[case(json!({ "upperState": "INITIAL", "lowerState": "INITIAL" }), Some(OvenSnapshot::Oven))]
    #[case(json!({ "lwoState": "INITIAL" }), Some(OvenSnapshot::Oven))]
    #[case(json!({}), Some(OvenSnapshot::Oven))]
    #[case(json!(null), None)]
    #[case(json!(["LWOState"]), None)]
    #[case(json!("LWOState"), None)]
    fn classify(#[case] oven_state: Value, #[case] expected: Option<OvenSnapshot>) {
        assert_eq!(classify_oven_state(&oven_state), expected);
    }
}
