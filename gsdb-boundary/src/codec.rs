use std::str::FromStr;

use gsdb_entities::content_request::{EncodedPayload, RequestKind, RequestPayload};
use thiserror::Error;

use crate::{conv, PayloadRecord};

#[derive(Debug, Error)]
pub enum PayloadCodecError {
    #[error("Invalid payload encoding: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown content request type: {0}")]
    UnknownKind(String),
}

/// Serializes a typed proposal payload into the transport string
/// stored on a content request.
pub fn encode_payload(payload: &RequestPayload) -> Result<EncodedPayload, PayloadCodecError> {
    let record = PayloadRecord::from(payload);
    Ok(serde_json::to_string(&record)?.into())
}

/// Inverse of [`encode_payload`].
///
/// Fails only if the string is not valid JSON or carries an unknown
/// `type` tag. Field contents pass through unvalidated; absent fields
/// take their empty defaults.
pub fn decode_payload(encoded: &EncodedPayload) -> Result<RequestPayload, PayloadCodecError> {
    let record: PayloadRecord = serde_json::from_str(encoded.as_str())?;
    let kind = RequestKind::from_str(&record.kind)
        .map_err(|_| PayloadCodecError::UnknownKind(record.kind.clone()))?;
    Ok(conv::payload_from_record(kind, record))
}

#[cfg(test)]
mod tests {
    use gsdb_entities::content_request::{EventDraft, GreenSpaceDraft, GreenSpaceUpdateDraft};

    use super::*;

    #[test]
    fn roundtrip_add_event_payload() {
        let payload = RequestPayload::AddEvent(EventDraft {
            name: "Bird watching".into(),
            category: "Nature".into(),
            date: "2024-05-11".into(),
            start_time: "08:30".into(),
            end_time: "10:00".into(),
            description: "".into(),
            location: "gs-17".into(),
        });
        let encoded = encode_payload(&payload).unwrap();
        assert_eq!(payload, decode_payload(&encoded).unwrap());
    }

    #[test]
    fn roundtrip_add_green_space_payload_with_zero_price() {
        let payload = RequestPayload::AddGreenSpace(GreenSpaceDraft {
            name: "Al Reem Park".into(),
            entry_price: 0.0,
            plant_info: "".into(),
            working_time: "06:00 - 22:00".into(),
            working_days: "MONDAY,TUESDAY".into(),
            description: "A quiet park".into(),
            location: "Al Reem Island".into(),
            facilities: "Playground".into(),
            images: vec!["st-1".into(), "st-2".into()],
        });
        let encoded = encode_payload(&payload).unwrap();
        assert_eq!(payload, decode_payload(&encoded).unwrap());
    }

    #[test]
    fn roundtrip_update_green_space_payload_with_partial_fields() {
        let payload = RequestPayload::UpdateGreenSpace(GreenSpaceUpdateDraft {
            green_space_id: "gs-42".into(),
            entry_price: Some(12.5),
            description: Some("Renovated".into()),
            ..Default::default()
        });
        let encoded = encode_payload(&payload).unwrap();
        assert_eq!(payload, decode_payload(&encoded).unwrap());
    }

    #[test]
    fn decode_tolerates_missing_fields() {
        let encoded = EncodedPayload::from(r#"{"type":"Add Event","name":"Yoga"}"#.to_owned());
        let RequestPayload::AddEvent(draft) = decode_payload(&encoded).unwrap() else {
            panic!("Expected an event payload");
        };
        assert_eq!("Yoga", draft.name);
        assert_eq!("", draft.start_time);
        assert_eq!("", draft.location);
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let encoded = EncodedPayload::from(
            r#"{"type":"Add Green Space","greenSpaceName":"Corniche","paid":true}"#.to_owned(),
        );
        let RequestPayload::AddGreenSpace(draft) = decode_payload(&encoded).unwrap() else {
            panic!("Expected a green space payload");
        };
        assert_eq!("Corniche", draft.name);
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let encoded = EncodedPayload::from("not json".to_owned());
        assert!(matches!(
            decode_payload(&encoded),
            Err(PayloadCodecError::Json(_))
        ));
    }

    #[test]
    fn decode_rejects_unknown_kind() {
        let encoded = EncodedPayload::from(r#"{"type":"Remove Event"}"#.to_owned());
        assert!(matches!(
            decode_payload(&encoded),
            Err(PayloadCodecError::UnknownKind(kind)) if kind == "Remove Event"
        ));
    }

    #[test]
    fn encoded_records_use_the_wire_field_names() {
        let payload = RequestPayload::AddEvent(EventDraft {
            name: "n".into(),
            category: "c".into(),
            date: "d".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            description: "about".into(),
            location: "gs-1".into(),
        });
        let encoded = encode_payload(&payload).unwrap();
        let json: serde_json::Value = serde_json::from_str(encoded.as_str()).unwrap();
        assert_eq!("Add Event", json["type"]);
        assert_eq!("09:00", json["startTime"]);
        assert_eq!("about", json["eventDescription"]);
        assert_eq!("gs-1", json["eventLocation"]);
    }
}
