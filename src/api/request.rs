//! Request types for the pay calculator API.

use serde::{Deserialize, Serialize};

/// Request body for the `/calculate` endpoint.
///
/// Each entry is one schedule line, e.g. `ASTRID=MO10:00-12:00,SU20:00-21:00`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Schedule lines, processed in order.
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"lines": ["A=MO10:00-12:00", "B=SU20:00-21:00"]}"#).unwrap();
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.lines[1], "B=SU20:00-21:00");
    }

    #[test]
    fn test_missing_lines_field_is_rejected() {
        let result: Result<CalculationRequest, _> = serde_json::from_str("{}");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
