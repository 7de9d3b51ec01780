//! Theme Preference
//!
//! Encoding of the persisted dark-mode flag. The value is stored as a JSON
//! boolean under [`DARK_MODE_KEY`].

pub const DARK_MODE_KEY: &str = "darkMode";

/// Decode a stored dark-mode value.
///
/// Absent → light. Anything that is not a JSON boolean also falls back to
/// light and is reported as `Err` so the caller can log it.
pub fn parse_dark_mode(stored: Option<&str>) -> Result<bool, String> {
    match stored {
        None => Ok(false),
        Some(raw) => serde_json::from_str::<bool>(raw).map_err(|_| raw.to_string()),
    }
}

/// Encode a dark-mode value for storage
pub fn encode_dark_mode(dark: bool) -> String {
    serde_json::Value::Bool(dark).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dark_mode() {
        assert_eq!(parse_dark_mode(None), Ok(false));
        assert_eq!(parse_dark_mode(Some("true")), Ok(true));
        assert_eq!(parse_dark_mode(Some("false")), Ok(false));
        assert_eq!(parse_dark_mode(Some(" true ")), Ok(true));
    }

    #[test]
    fn test_malformed_value_reported() {
        assert_eq!(parse_dark_mode(Some("yes")), Err("yes".to_string()));
        assert_eq!(parse_dark_mode(Some("\"true\"")), Err("\"true\"".to_string()));
        assert!(parse_dark_mode(Some("")).is_err());
    }

    #[test]
    fn test_encode_is_json_bool() {
        assert_eq!(encode_dark_mode(true), "true");
        assert_eq!(encode_dark_mode(false), "false");
    }

    #[test]
    fn test_encode_round_trip() {
        for dark in [true, false] {
            assert_eq!(parse_dark_mode(Some(encode_dark_mode(dark).as_str())), Ok(dark));
        }
    }
}
