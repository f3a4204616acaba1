use crate::error::GraphQLError;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorElement {
    pub value: serde_json::Value,
}

/// Position marker consumed by the `before` and `after` arguments. The
/// payload holds one JSON value per ordering column, encoded as a JSON array
/// wrapped in base64.
#[derive(Clone, Debug, PartialEq)]
pub struct Cursor {
    pub elems: Vec<CursorElement>,
}

impl Cursor {
    pub fn encode(&self) -> String {
        let payload = serde_json::Value::Array(
            self.elems.iter().map(|elem| elem.value.clone()).collect(),
        );
        base64::encode(payload.to_string())
    }
}

impl FromStr for Cursor {
    type Err = GraphQLError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bytes = base64::decode(input)
            .map_err(|_| GraphQLError::cursor_encoding("cursor is not valid base64"))?;

        let payload = String::from_utf8(bytes)
            .map_err(|_| GraphQLError::cursor_encoding("cursor payload is not valid utf-8"))?;

        let json: serde_json::Value = serde_json::from_str(&payload)
            .map_err(|_| GraphQLError::cursor_payload("cursor payload is not valid json"))?;

        match json {
            serde_json::Value::Array(values) => Ok(Cursor {
                elems: values
                    .into_iter()
                    .map(|value| CursorElement { value })
                    .collect(),
            }),
            _ => Err(GraphQLError::cursor_payload(
                "cursor payload is not a json array",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cursor_round_trip_test() {
        let cursor = Cursor {
            elems: vec![
                CursorElement { value: json!(1) },
                CursorElement { value: json!("alpha") },
            ],
        };

        let decoded = Cursor::from_str(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn cursor_known_encoding_test() {
        // base64 of `[1,"a"]`
        let cursor = Cursor::from_str("WzEsImEiXQ==").unwrap();
        assert_eq!(cursor.elems.len(), 2);
        assert_eq!(cursor.elems[0].value, json!(1));
        assert_eq!(cursor.elems[1].value, json!("a"));
        assert_eq!(cursor.encode(), "WzEsImEiXQ==");
    }

    #[test]
    fn cursor_empty_array_test() {
        let cursor = Cursor::from_str(&base64::encode("[]")).unwrap();
        assert!(cursor.elems.is_empty());
    }

    #[test]
    fn cursor_rejects_invalid_base64_test() {
        let err = Cursor::from_str("$$$not-base64$$$").unwrap_err();
        assert!(matches!(err, GraphQLError::CursorEncoding(_)));
    }

    #[test]
    fn cursor_rejects_invalid_utf8_test() {
        let err = Cursor::from_str(&base64::encode([0xffu8, 0xfe])).unwrap_err();
        assert!(matches!(err, GraphQLError::CursorEncoding(_)));
    }

    #[test]
    fn cursor_rejects_invalid_json_test() {
        let err = Cursor::from_str(&base64::encode("not json")).unwrap_err();
        assert!(matches!(err, GraphQLError::CursorPayload(_)));
    }

    #[test]
    fn cursor_rejects_non_array_payload_test() {
        let err = Cursor::from_str(&base64::encode(r#"{"id": 1}"#)).unwrap_err();
        assert!(matches!(err, GraphQLError::CursorPayload(_)));
    }
}
