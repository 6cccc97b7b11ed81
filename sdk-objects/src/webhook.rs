//! The envelope of an event POSTed to a configured webhook endpoint.
//!
//! Verifying the `lightspark-signature` HMAC is left to the receiving server;
//! [`WebhookEvent::parse`] should only be called on a verified body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    enums::WebhookEventType,
    error::DecodeError,
    wire::{self, WireType},
};

/// The HTTP header carrying the hex-encoded HMAC-SHA256 of the request body.
pub const WEBHOOK_SIGNATURE_HEADER: &str = "lightspark-signature";

/// A webhook notification. The event only names the entity it concerns;
/// callers fetch the entity itself with a separate query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event_type: WebhookEventType,
    pub event_id: String,
    /// RFC 3339, normalized to UTC.
    pub timestamp: DateTime<Utc>,
    /// The id of the entity the event concerns, e.g. a payment or a node.
    pub entity_id: String,
    /// Set for wallet events.
    pub wallet_id: Option<String>,
    /// Event-specific data, e.g. the sub-events of a remote signing request.
    pub data: Option<Map<String, Value>>,
}

impl WireType for WebhookEvent {
    const TYPENAME: &'static str = "WebhookEvent";
}

impl WebhookEvent {
    /// Parse a webhook POST body.
    pub fn parse(body: &[u8]) -> Result<Self, DecodeError> {
        wire::decode(body)
    }
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use common::test_utils::{DUMMY_NODE_ID, arbitrary};
    use proptest::{prop_assert_eq, proptest};
    use serde_json::json;

    use super::*;
    use crate::{error::DecodeErrorKind, wire::encode_to_vec};

    #[test]
    fn parse_node_event() {
        let body = br#"{
            "event_type": "PAYMENT_FINISHED",
            "event_id": "1615c8be5aa44e429eba700db2ed8ca5",
            "timestamp": "2023-05-17T23:56:47.874449+00:00",
            "entity_id": "lightning_node:01882c25-157a-f96b-0000-362d42b64397"
        }"#;
        let event = WebhookEvent::parse(body).unwrap();

        assert_eq!(event.event_type, WebhookEventType::PaymentFinished);
        assert_eq!(event.event_id, "1615c8be5aa44e429eba700db2ed8ca5");
        assert_eq!(
            event.timestamp,
            Utc.with_ymd_and_hms(2023, 5, 17, 23, 56, 47).unwrap()
                + chrono::Duration::microseconds(874_449),
        );
        assert_eq!(
            event.entity_id,
            "lightning_node:01882c25-157a-f96b-0000-362d42b64397"
        );
        assert_eq!(event.wallet_id, None);
        assert_eq!(event.data, None);
    }

    #[test]
    fn parse_wallet_event() {
        let body = json!({
            "event_type": "WALLET_FUNDS_RECEIVED",
            "event_id": "e1",
            "timestamp": "2023-05-17T16:56:47-07:00",
            "entity_id": "wallet_deposit:1",
            "wallet_id": "wallet:1",
            "data": { "sub_event_type": "DEPOSIT", "amount": 1000 },
        });
        let event = WebhookEvent::parse(body.to_string().as_bytes()).unwrap();

        assert!(event.event_type.is_wallet_event());
        // Offsets are normalized to UTC.
        assert_eq!(
            event.timestamp,
            Utc.with_ymd_and_hms(2023, 5, 17, 23, 56, 47).unwrap()
        );
        assert_eq!(event.wallet_id.as_deref(), Some("wallet:1"));
        let data = event.data.unwrap();
        assert_eq!(data["sub_event_type"], "DEPOSIT");
        assert_eq!(data["amount"], 1000);
    }

    #[test]
    fn unknown_event_type_is_undefined() {
        let body = json!({
            "event_type": "SOMETHING_NEW",
            "event_id": "e2",
            "timestamp": "2024-01-01T00:00:00Z",
            "entity_id": DUMMY_NODE_ID,
            "wallet_id": null,
            "data": null,
        });
        let event = WebhookEvent::parse(body.to_string().as_bytes()).unwrap();
        assert_eq!(event.event_type, WebhookEventType::Undefined);
    }

    #[test]
    fn malformed_events() {
        let err = WebhookEvent::parse(
            br#"{"event_type":"NODE_STATUS","event_id":"e3",
                "timestamp":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingField);
        assert_eq!(err.path, "WebhookEvent.entity_id");

        let err = WebhookEvent::parse(
            br#"{"event_type":"NODE_STATUS","event_id":"e3",
                "timestamp":"yesterday","entity_id":"n"}"#,
        )
        .unwrap_err();
        assert_eq!(err.path, "WebhookEvent.timestamp");

        let err = WebhookEvent::parse(
            br#"{"event_type":"NODE_STATUS","event_id":"e3",
                "timestamp":"2024-01-01T00:00:00Z","entity_id":"n",
                "data":[1,2]}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::InvalidType);
        assert_eq!(err.path, "WebhookEvent.data");
    }

    #[test]
    fn webhook_event_roundtrip() {
        let any_event = (
            proptest::arbitrary::any::<WebhookEventType>(),
            arbitrary::any_string(),
            // Roughly 1970 to 2100, to the second.
            0_i64..4_102_444_800,
            arbitrary::any_string(),
            arbitrary::any_option_string(),
            proptest::option::of(arbitrary::any_json_object()),
        );

        proptest!(|((event_type, event_id, secs, entity_id, wallet_id, data)
                     in any_event)| {
            let event = WebhookEvent {
                event_type,
                event_id,
                timestamp: DateTime::from_timestamp(secs, 0).unwrap(),
                entity_id,
                wallet_id,
                data,
            };
            let parsed = WebhookEvent::parse(&encode_to_vec(&event)).unwrap();
            prop_assert_eq!(parsed, event);
        });
    }
}
