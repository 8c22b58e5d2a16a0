use std::{any::type_name, collections::HashMap, fmt::Display, str::FromStr};

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    response::{IntoResponse, Response},
};
use catalog_core::{Failure, FieldError, FieldErrors, MissingParameter, TypeMismatch};
use convert_case::{Case, Casing};
use http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::dispatch::ApiError;

/// Raw query string parameters, converted when a handler asks for them
#[derive(Debug, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Parameter that must be present and convertible to `T`
    pub fn required<T>(&self, name: &str) -> Result<T, Failure>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.0.get(name).ok_or_else(|| MissingParameter {
            parameter: name.to_owned(),
            expected: short_type_name::<T>().to_owned(),
        })?;
        convert(name, raw)
    }

    /// Parameter that falls back to `default` when absent or empty
    pub fn optional_or<T>(&self, name: &str, default: T) -> Result<T, Failure>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.0
            .get(name)
            .filter(|raw| !raw.is_empty())
            .map_or(Ok(default), |raw| convert(name, raw))
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(IntoResponse::into_response)?;
        Ok(Self(params))
    }
}

/// Path segments captured by the route, converted on demand
#[derive(Debug)]
pub struct PathParams(HashMap<String, String>);

impl PathParams {
    pub fn get<T>(&self, name: &str) -> Result<T, Failure>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.0.get(name).ok_or_else(|| MissingParameter {
            parameter: name.to_owned(),
            expected: short_type_name::<T>().to_owned(),
        })?;
        convert(name, raw)
    }
}

impl<S> FromRequestParts<S> for PathParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(params))
    }
}

/// JSON body that has passed its `validator` rules
///
/// Malformed JSON keeps axum's own rejection. Rule violations become a
/// field validation failure with one error per broken rule.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        value
            .validate()
            .map_err(|errors| ApiError::from(field_failure(&errors)).into_response())?;

        Ok(Self(value))
    }
}

/// Flatten `validator` errors into field errors named as they appear on the wire
///
/// Fields are sorted by name; errors on one field keep their rule order.
fn field_failure(errors: &ValidationErrors) -> Failure {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let name = field.to_case(Case::Camel);
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                FieldError::new(name.clone(), message)
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));

    // struct-level errors carry no field name
    FieldErrors::new(fields)
        .unwrap_or_else(|| FieldError::new("body", errors.to_string()).into())
        .into()
}

fn convert<T>(name: &str, raw: &str) -> Result<T, Failure>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| {
        Failure::from(TypeMismatch {
            parameter: name.to_owned(),
            value: raw.to_owned(),
            expected: short_type_name::<T>().to_owned(),
            cause: e.to_string(),
        })
    })
}

/// `alloc::string::String` becomes `String`
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
