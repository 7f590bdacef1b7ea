//! Baggage verdict for a single item.
//!
//! Holds the four fields the model is asked for, plus the parser that
//! pulls them out of the model's free-text reply.

use serde_json::Value;

/// Placeholder used when the model reports no restrictions.
pub const NO_RESTRICTIONS: &str = "None";

/// Whether an item may travel in the cabin and in the hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaggageVerdict {
    /// Allowed through screening into the cabin.
    pub carry_on_allowed: bool,
    /// Allowed in baggage stowed in the hold.
    pub checked_baggage_allowed: bool,
    /// Short description of the item and its category.
    pub description: String,
    /// Size limits, quantity limits or other special requirements.
    pub restrictions: String,
}

/// Why a model reply could not be turned into a verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplyParseError {
    #[error("no JSON object found in reply")]
    NoObject,

    #[error("reply object is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("field '{0}' is missing")]
    MissingField(&'static str),

    #[error("field '{field}' has unusable value {value}")]
    BadValue { field: &'static str, value: String },
}

impl BaggageVerdict {
    /// Parse a model reply into a verdict.
    ///
    /// The model is told to answer with a bare JSON object but often wraps
    /// it in prose or code fences, so everything between the first `{` and
    /// the last `}` is decoded.
    pub fn from_reply(reply: &str) -> Result<Self, ReplyParseError> {
        let object = extract_object(reply).ok_or(ReplyParseError::NoObject)?;
        let value: Value = serde_json::from_str(object)
            .map_err(|e| ReplyParseError::InvalidJson(e.to_string()))?;
        let fields = value.as_object().ok_or(ReplyParseError::NoObject)?;

        let carry_on_allowed = read_flag(fields.get("carry_on_allowed"), "carry_on_allowed")?;
        let checked_baggage_allowed = read_flag(
            fields.get("checked_baggage_allowed"),
            "checked_baggage_allowed",
        )?;

        let description = match fields.get("description") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::String(_)) | Some(Value::Null) | None => {
                return Err(ReplyParseError::MissingField("description"))
            }
            Some(other) => {
                return Err(ReplyParseError::BadValue {
                    field: "description",
                    value: other.to_string(),
                })
            }
        };

        let restrictions = match fields.get("restrictions") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::String(_)) | Some(Value::Null) | None => NO_RESTRICTIONS.to_string(),
            // Some models answer with a list of rules
            Some(Value::Array(items)) => {
                let joined = items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join("; ");
                if joined.is_empty() {
                    NO_RESTRICTIONS.to_string()
                } else {
                    joined
                }
            }
            Some(other) => {
                return Err(ReplyParseError::BadValue {
                    field: "restrictions",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            carry_on_allowed,
            checked_baggage_allowed,
            description,
            restrictions,
        })
    }
}

fn extract_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (start < end).then(|| &reply[start..=end])
}

fn read_flag(value: Option<&Value>, field: &'static str) -> Result<bool, ReplyParseError> {
    match value {
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" => Ok(true),
            "false" | "no" => Ok(false),
            _ => Err(ReplyParseError::BadValue {
                field,
                value: s.clone(),
            }),
        },
        Some(Value::Null) | None => Err(ReplyParseError::MissingField(field)),
        Some(other) => Err(ReplyParseError::BadValue {
            field,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_object() {
        let reply = r#"{
            "carry_on_allowed": true,
            "checked_baggage_allowed": true,
            "description": "Portable electronics",
            "restrictions": "Remove from bag during screening"
        }"#;

        let verdict = BaggageVerdict::from_reply(reply).unwrap();
        assert!(verdict.carry_on_allowed);
        assert!(verdict.checked_baggage_allowed);
        assert_eq!(verdict.description, "Portable electronics");
        assert_eq!(verdict.restrictions, "Remove from bag during screening");
    }

    #[test]
    fn test_parse_object_wrapped_in_prose_and_fences() {
        let reply = "Here is the assessment:\n```json\n{\"carry_on_allowed\": false, \
                     \"checked_baggage_allowed\": true, \"description\": \"Large knife\", \
                     \"restrictions\": \"Sheathed and securely wrapped\"}\n```\nSafe travels!";

        let verdict = BaggageVerdict::from_reply(reply).unwrap();
        assert!(!verdict.carry_on_allowed);
        assert!(verdict.checked_baggage_allowed);
        assert_eq!(verdict.restrictions, "Sheathed and securely wrapped");
    }

    #[test]
    fn test_string_flags_are_accepted() {
        let reply = r#"{"carry_on_allowed": "Yes", "checked_baggage_allowed": "false",
                        "description": "Water bottle", "restrictions": "Empty at checkpoint"}"#;

        let verdict = BaggageVerdict::from_reply(reply).unwrap();
        assert!(verdict.carry_on_allowed);
        assert!(!verdict.checked_baggage_allowed);
    }

    #[test]
    fn test_empty_restrictions_become_placeholder() {
        let reply = r#"{"carry_on_allowed": true, "checked_baggage_allowed": true,
                        "description": "Phone charger", "restrictions": "  "}"#;

        let verdict = BaggageVerdict::from_reply(reply).unwrap();
        assert_eq!(verdict.restrictions, NO_RESTRICTIONS);
    }

    #[test]
    fn test_restriction_list_is_joined() {
        let reply = r#"{"carry_on_allowed": true, "checked_baggage_allowed": false,
                        "description": "Lithium battery",
                        "restrictions": ["Under 100 Wh", "Terminals taped"]}"#;

        let verdict = BaggageVerdict::from_reply(reply).unwrap();
        assert_eq!(verdict.restrictions, "Under 100 Wh; Terminals taped");
    }

    #[test]
    fn test_reply_without_object_is_rejected() {
        let err = BaggageVerdict::from_reply("I cannot help with that.").unwrap_err();
        assert_eq!(err, ReplyParseError::NoObject);
    }

    #[test]
    fn test_truncated_object_is_rejected() {
        let err = BaggageVerdict::from_reply(r#"{"carry_on_allowed": true, "#).unwrap_err();
        assert_eq!(err, ReplyParseError::NoObject);

        let err = BaggageVerdict::from_reply(r#"{"carry_on_allowed": tru}"#).unwrap_err();
        assert!(matches!(err, ReplyParseError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        let reply = r#"{"carry_on_allowed": true, "description": "Scissors", "restrictions": ""}"#;
        let err = BaggageVerdict::from_reply(reply).unwrap_err();
        assert_eq!(err, ReplyParseError::MissingField("checked_baggage_allowed"));
    }

    #[test]
    fn test_ambiguous_flag_is_rejected() {
        let reply = r#"{"carry_on_allowed": "depends", "checked_baggage_allowed": true,
                        "description": "Scissors", "restrictions": "Blades under 4 inches"}"#;
        let err = BaggageVerdict::from_reply(reply).unwrap_err();
        assert!(matches!(
            err,
            ReplyParseError::BadValue {
                field: "carry_on_allowed",
                ..
            }
        ));
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let reply = r#"{"carry_on_allowed": true, "checked_baggage_allowed": true,
                        "description": "", "restrictions": "None"}"#;
        let err = BaggageVerdict::from_reply(reply).unwrap_err();
        assert_eq!(err, ReplyParseError::MissingField("description"));
    }
}
