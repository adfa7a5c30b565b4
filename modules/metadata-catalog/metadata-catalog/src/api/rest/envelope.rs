//! Uniform response envelope.
//!
//! In memory an envelope is a tagged union of a success payload and a failure
//! description. Only `Serialize` flattens it into the nullable-field wire
//! shape (`relatedHTTPCode`, `exceptionClassName`, ... next to the payload
//! fields), and `Deserialize` rebuilds the union from that shape.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// HTTP code carried by every successful envelope.
pub const SUCCESS_CODE: u16 = 200;

/// Exception fields of a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail {
    pub related_http_code: u16,
    pub class_name: String,
    pub message_id: Option<String>,
    pub error_message: String,
    pub system_action: Option<String>,
    pub user_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<P> {
    Success(P),
    Failure(FailureDetail),
}

/// Response of every catalog operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<P> {
    pub action_description: Option<String>,
    pub outcome: Outcome<P>,
}

impl<P> ResponseEnvelope<P> {
    #[must_use]
    pub const fn success(payload: P) -> Self {
        Self {
            action_description: None,
            outcome: Outcome::Success(payload),
        }
    }

    #[must_use]
    pub const fn failure(detail: FailureDetail) -> Self {
        Self {
            action_description: None,
            outcome: Outcome::Failure(detail),
        }
    }

    /// Names the operation that produced the envelope.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action_description = Some(action.into());
        self
    }

    #[must_use]
    pub const fn related_http_code(&self) -> u16 {
        match &self.outcome {
            Outcome::Success(_) => SUCCESS_CODE,
            Outcome::Failure(f) => f.related_http_code,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&P> {
        match &self.outcome {
            Outcome::Success(p) => Some(p),
            Outcome::Failure(_) => None,
        }
    }

    #[must_use]
    pub const fn failure_detail(&self) -> Option<&FailureDetail> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(f),
        }
    }

    /// # Errors
    /// Returns the failure detail of a failed envelope.
    pub fn into_result(self) -> Result<P, FailureDetail> {
        match self.outcome {
            Outcome::Success(p) => Ok(p),
            Outcome::Failure(f) => Err(f),
        }
    }
}

#[derive(Serialize)]
struct WireEnvelopeRef<'a, P> {
    #[serde(rename = "actionDescription", skip_serializing_if = "Option::is_none")]
    action_description: Option<&'a str>,
    #[serde(rename = "relatedHTTPCode")]
    related_http_code: u16,
    #[serde(rename = "exceptionClassName", skip_serializing_if = "Option::is_none")]
    class_name: Option<&'a str>,
    #[serde(rename = "exceptionErrorMessageId", skip_serializing_if = "Option::is_none")]
    message_id: Option<&'a str>,
    #[serde(rename = "exceptionErrorMessage", skip_serializing_if = "Option::is_none")]
    error_message: Option<&'a str>,
    #[serde(rename = "exceptionSystemAction", skip_serializing_if = "Option::is_none")]
    system_action: Option<&'a str>,
    #[serde(rename = "exceptionUserAction", skip_serializing_if = "Option::is_none")]
    user_action: Option<&'a str>,
    #[serde(flatten)]
    payload: Option<&'a P>,
}

#[derive(Deserialize)]
struct WireEnvelope<P> {
    #[serde(rename = "actionDescription", default)]
    action_description: Option<String>,
    #[serde(rename = "relatedHTTPCode")]
    related_http_code: u16,
    #[serde(rename = "exceptionClassName", default)]
    class_name: Option<String>,
    #[serde(rename = "exceptionErrorMessageId", default)]
    message_id: Option<String>,
    #[serde(rename = "exceptionErrorMessage", default)]
    error_message: Option<String>,
    #[serde(rename = "exceptionSystemAction", default)]
    system_action: Option<String>,
    #[serde(rename = "exceptionUserAction", default)]
    user_action: Option<String>,
    #[serde(flatten)]
    payload: Option<P>,
}

impl<P: Serialize> Serialize for ResponseEnvelope<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let action_description = self.action_description.as_deref();
        let wire = match &self.outcome {
            Outcome::Success(payload) => WireEnvelopeRef {
                action_description,
                related_http_code: SUCCESS_CODE,
                class_name: None,
                message_id: None,
                error_message: None,
                system_action: None,
                user_action: None,
                payload: Some(payload),
            },
            Outcome::Failure(f) => WireEnvelopeRef {
                action_description,
                related_http_code: f.related_http_code,
                class_name: Some(&f.class_name),
                message_id: f.message_id.as_deref(),
                error_message: Some(&f.error_message),
                system_action: f.system_action.as_deref(),
                user_action: f.user_action.as_deref(),
                payload: None,
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for ResponseEnvelope<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireEnvelope::<P>::deserialize(deserializer)?;

        let outcome = match (wire.class_name, wire.payload) {
            (Some(class_name), _) => Outcome::Failure(FailureDetail {
                related_http_code: wire.related_http_code,
                class_name,
                message_id: wire.message_id,
                error_message: wire.error_message.unwrap_or_default(),
                system_action: wire.system_action,
                user_action: wire.user_action,
            }),
            (None, Some(payload)) if wire.related_http_code == SUCCESS_CODE => {
                Outcome::Success(payload)
            }
            (None, Some(_)) => {
                return Err(D::Error::custom(format!(
                    "relatedHTTPCode {} without exceptionClassName",
                    wire.related_http_code
                )));
            }
            (None, None) => return Err(D::Error::custom("envelope carries neither payload nor exception")),
        };

        Ok(Self {
            action_description: wire.action_description,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Names {
        types: Vec<String>,
    }

    fn failure() -> FailureDetail {
        FailureDetail {
            related_http_code: 400,
            class_name: "InvalidEntityError".to_owned(),
            message_id: None,
            error_message: "bad entity".to_owned(),
            system_action: Some("rejected".to_owned()),
            user_action: None,
        }
    }

    #[test]
    fn test_success_wire_shape() {
        let envelope = ResponseEnvelope::success(Names {
            types: vec!["Table".to_owned()],
        });
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "relatedHTTPCode": 200, "types": ["Table"] })
        );
    }

    #[test]
    fn test_failure_wire_shape_omits_nulls_and_payload() {
        let envelope: ResponseEnvelope<Names> =
            ResponseEnvelope::failure(failure()).with_action("getTable");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "actionDescription": "getTable",
                "relatedHTTPCode": 400,
                "exceptionClassName": "InvalidEntityError",
                "exceptionErrorMessage": "bad entity",
                "exceptionSystemAction": "rejected"
            })
        );
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let envelope: ResponseEnvelope<Names> = serde_json::from_value(json!({
            "relatedHTTPCode": 200,
            "types": ["Table", "Column"],
            "serverVersion": "4.3"
        }))
        .unwrap();
        assert_eq!(
            envelope.payload().map(|p| p.types.clone()),
            Some(vec!["Table".to_owned(), "Column".to_owned()])
        );
    }

    #[test]
    fn test_deserialize_failure() {
        let envelope: ResponseEnvelope<Names> = serde_json::from_value(json!({
            "relatedHTTPCode": 400,
            "exceptionClassName": "InvalidEntityError",
            "exceptionErrorMessage": "bad entity",
            "exceptionSystemAction": "rejected"
        }))
        .unwrap();
        assert_eq!(envelope.related_http_code(), 400);
        assert_eq!(envelope.into_result().unwrap_err(), failure());
    }

    #[test]
    fn test_deserialize_rejects_incoherent_envelopes() {
        let no_class: Result<ResponseEnvelope<Names>, _> =
            serde_json::from_value(json!({ "relatedHTTPCode": 404, "types": [] }));
        assert!(no_class.is_err());

        let empty: Result<ResponseEnvelope<Names>, _> =
            serde_json::from_value(json!({ "relatedHTTPCode": 200 }));
        assert!(empty.is_err());
    }

    #[test]
    fn test_accessors() {
        let ok = ResponseEnvelope::success(1_u8);
        assert!(ok.is_success());
        assert_eq!(ok.related_http_code(), 200);
        assert!(ok.failure_detail().is_none());

        let failed: ResponseEnvelope<u8> = ResponseEnvelope::failure(failure());
        assert!(!failed.is_success());
        assert_eq!(failed.payload(), None);
        assert_eq!(failed.failure_detail().map(|f| f.related_http_code), Some(400));
    }
}
