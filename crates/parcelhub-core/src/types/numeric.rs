//! Lenient integer coercion for loosely typed request fields.
//!
//! Clients send ids, costs and quantities either as JSON numbers or as
//! numeric strings (`10` and `"10"` are both accepted). Anything else is a
//! validation failure that names the offending field.

use serde_json::Value;

use crate::error::AppError;

/// Coerce a required field into a strictly positive integer.
///
/// Missing and `null` values are rejected.
pub fn required_positive_int(field: &str, value: Option<&Value>) -> Result<i64, AppError> {
    match value {
        None | Some(Value::Null) => Err(AppError::validation(format!("{field} is required"))),
        Some(v) => coerce(field, v),
    }
}

/// Coerce an optional field into a strictly positive integer.
///
/// Missing, `null` and blank-string values yield `Ok(None)`.
pub fn optional_positive_int(field: &str, value: Option<&Value>) -> Result<Option<i64>, AppError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => coerce(field, v).map(Some),
    }
}

fn coerce(field: &str, value: &Value) -> Result<i64, AppError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n > 0 => Ok(n),
        Some(_) => Err(AppError::validation(format!(
            "{field} must be a positive integer"
        ))),
        None => Err(AppError::validation(format!("{field} must be an integer"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        assert_eq!(required_positive_int("cost", Some(&json!(10))).unwrap(), 10);
        assert_eq!(required_positive_int("cost", Some(&json!("10"))).unwrap(), 10);
        assert_eq!(required_positive_int("cost", Some(&json!(" 7 "))).unwrap(), 7);
    }

    #[test]
    fn test_rejects_missing_and_null() {
        let err = required_positive_int("quantity", None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "quantity is required");

        let err = required_positive_int("quantity", Some(&Value::Null)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_rejects_non_numeric() {
        for bad in [json!("ten"), json!(2.5), json!(true), json!([1]), json!({"n": 1})] {
            let err = required_positive_int("cost", Some(&bad)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "value {bad} should be rejected");
            assert_eq!(err.message, "cost must be an integer");
        }
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        for bad in [json!(0), json!(-3), json!("-1")] {
            let err = required_positive_int("cost", Some(&bad)).unwrap_err();
            assert_eq!(err.message, "cost must be a positive integer");
        }
    }

    #[test]
    fn test_optional_treats_blank_as_absent() {
        assert_eq!(optional_positive_int("parcel_quantity", None).unwrap(), None);
        assert_eq!(
            optional_positive_int("parcel_quantity", Some(&json!(""))).unwrap(),
            None
        );
        assert_eq!(
            optional_positive_int("parcel_quantity", Some(&json!("5"))).unwrap(),
            Some(5)
        );
        assert!(optional_positive_int("parcel_quantity", Some(&json!("x"))).is_err());
    }
}
