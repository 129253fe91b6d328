//! JSON body extractor that validates and reports failures in the uniform
//! error shape.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use parcelhub_core::error::AppError;

use crate::error::ApiError;

/// Deserialize a JSON body and run its `validator` rules.
///
/// Malformed JSON and rule violations both become validation errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            AppError::validation(format!("Invalid request body: {}", describe(&errors)))
        })?;

        Ok(Self(value))
    }
}

/// Render rule violations as `field message` pairs, without the rejected
/// values. Nested fields are dotted (`parcel.item`).
pub(crate) fn describe(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    collect(errors, "", &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = format!("{prefix}{field}");
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    match &error.message {
                        Some(message) => out.push(format!("{path} {message}")),
                        None => out.push(format!("{path} failed the {} rule", error.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &format!("{path}."), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]."), out);
                }
            }
        }
    }
}
