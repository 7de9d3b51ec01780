//! Payload Validation
//!
//! Checks an upstream JSON payload against the research schema and returns
//! either a [`TokenInfo`] or the first offending field.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::types::{Sentiment, TokenInfo};

/// Validate a research payload.
///
/// Required strings: `id`, `name`, `symbol`, `image`, `summary`.
/// `image` must be an absolute URL. Numeric fields are optional; a missing
/// field or JSON `null` both mean unknown. `sentiment` is required and must
/// be one of the five known values.
pub fn validate(value: &Value) -> Result<TokenInfo, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let id = required_str(obj, "id")?;
    let name = required_str(obj, "name")?;
    let symbol = required_str(obj, "symbol")?;
    let image = required_str(obj, "image")?;
    url::Url::parse(&image).map_err(|e| ValidationError::InvalidUrl {
        field: "image",
        reason: e.to_string(),
    })?;
    let summary = required_str(obj, "summary")?;

    Ok(TokenInfo {
        id,
        name,
        symbol,
        image,
        summary,
        price: optional_number(obj, "price")?,
        market_cap: optional_number(obj, "market_cap")?,
        price_change_24h: optional_number(obj, "price_change_24h")?,
        volume_24h: optional_number(obj, "volume_24h")?,
        circulating_supply: optional_number(obj, "circulating_supply")?,
        sentiment: sentiment(obj)?,
    })
}

fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn optional_number(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or(ValidationError::WrongType {
            field,
            expected: "a finite number",
        }),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a number",
        }),
    }
}

fn sentiment(obj: &Map<String, Value>) -> Result<Sentiment, ValidationError> {
    match obj.get("sentiment") {
        None | Some(Value::Null) => Err(ValidationError::Missing { field: "sentiment" }),
        Some(Value::String(s)) => s.parse(),
        Some(_) => Err(ValidationError::WrongType {
            field: "sentiment",
            expected: "a string",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bitcoin() -> Value {
        json!({
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "btc",
            "image": "https://assets.example.com/coins/bitcoin.png",
            "summary": "## Overview\nDigital gold.",
            "price": 64250.12,
            "market_cap": 1.26e12,
            "price_change_24h": -1.8,
            "volume_24h": 3.1e10,
            "circulating_supply": 19_700_000,
            "sentiment": "bullish"
        })
    }

    #[test]
    fn test_valid_payload() {
        let info = validate(&bitcoin()).unwrap();
        assert_eq!(info.id, "bitcoin");
        assert_eq!(info.price, Some(64250.12));
        assert_eq!(info.circulating_supply, Some(19_700_000.0));
        assert_eq!(info.sentiment, Sentiment::Bullish);
    }

    #[test]
    fn test_optional_numbers_absent_or_null() {
        let mut payload = bitcoin();
        let obj = payload.as_object_mut().unwrap();
        obj.remove("price");
        obj.insert("market_cap".to_string(), Value::Null);

        let info = validate(&payload).unwrap();
        assert_eq!(info.price, None);
        assert_eq!(info.market_cap, None);
        assert_eq!(info.volume_24h, Some(3.1e10));
    }

    #[test]
    fn test_missing_sentiment_rejected() {
        let mut payload = bitcoin();
        payload.as_object_mut().unwrap().remove("sentiment");

        assert_eq!(
            validate(&payload),
            Err(ValidationError::Missing { field: "sentiment" })
        );
    }

    #[test]
    fn test_unknown_sentiment_rejected() {
        let mut payload = bitcoin();
        payload["sentiment"] = json!("mildly optimistic");

        assert_eq!(
            validate(&payload),
            Err(ValidationError::UnknownSentiment("mildly optimistic".to_string()))
        );
    }

    #[test]
    fn test_invalid_image_url_rejected() {
        let mut payload = bitcoin();
        payload["image"] = json!("not a url");

        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field(), Some("image"));
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_relative_image_url_rejected() {
        let mut payload = bitcoin();
        payload["image"] = json!("/coins/bitcoin.png");

        assert!(matches!(
            validate(&payload),
            Err(ValidationError::InvalidUrl { field: "image", .. })
        ));
    }

    #[test]
    fn test_wrong_types_rejected() {
        let mut payload = bitcoin();
        payload["price"] = json!("64250");
        assert_eq!(
            validate(&payload),
            Err(ValidationError::WrongType {
                field: "price",
                expected: "a number"
            })
        );

        let mut payload = bitcoin();
        payload["name"] = json!(42);
        assert_eq!(validate(&payload).unwrap_err().field(), Some("name"));
    }

    #[test]
    fn test_missing_required_string() {
        let mut payload = bitcoin();
        payload.as_object_mut().unwrap().remove("summary");
        assert_eq!(
            validate(&payload),
            Err(ValidationError::Missing { field: "summary" })
        );
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(validate(&json!([1, 2])), Err(ValidationError::NotAnObject));
        assert_eq!(
            validate(&json!({"error": "Token not found"})),
            Err(ValidationError::Missing { field: "id" })
        );
    }
}
