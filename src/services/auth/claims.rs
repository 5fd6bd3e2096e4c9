/*
 * Responsibility
 * - Decode the payload segment of a bearer token into a ClaimSet
 * - Provide typed accessors over the untyped claim values
 *
 * Trust contract
 * - The signature segment is NEVER verified here. The API gateway in front of
 *   this service has already checked signature/iss/aud/exp, and this process
 *   does not hold the signing keys. Do not add verification in this module.
 */
use std::collections::BTreeMap;
use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimsError {
    #[error("{0}")]
    MissingOrMalformedHeader(&'static str),
    #[error("failed to parse token: {0}")]
    UndecodableToken(String),
}

impl ClaimsError {
    pub fn missing_header() -> Self {
        Self::MissingOrMalformedHeader("missing Authorization header")
    }

    pub fn malformed_header() -> Self {
        Self::MissingOrMalformedHeader("invalid Authorization header format")
    }

    fn undecodable(reason: impl fmt::Display) -> Self {
        Self::UndecodableToken(reason.to_string())
    }
}

/// A single claim value as found in the token payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<ClaimValue>),
    Object(BTreeMap<String, ClaimValue>),
}

/// Returned by the `as_*` accessors when a claim has another shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct WrongShape {
    pub expected: &'static str,
    pub found: &'static str,
}

impl ClaimValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    fn wrong_shape(&self, expected: &'static str) -> WrongShape {
        WrongShape {
            expected,
            found: self.kind(),
        }
    }

    pub fn as_str(&self) -> Result<&str, WrongShape> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.wrong_shape("string")),
        }
    }

    pub fn as_array(&self) -> Result<&[ClaimValue], WrongShape> {
        match self {
            Self::Array(items) => Ok(items),
            other => Err(other.wrong_shape("array")),
        }
    }
}

impl From<serde_json::Value> for ClaimValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// Claims decoded from one token. Lives for a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClaimSet(BTreeMap<String, ClaimValue>);

impl ClaimSet {
    pub fn get(&self, name: &str) -> Option<&ClaimValue> {
        self.0.get(name)
    }

    /// String claim, or `None` when absent or not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_str().ok())
    }
}

impl FromIterator<(String, ClaimValue)> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = (String, ClaimValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Split `Authorization` into scheme and token.
///
/// Exactly two parts separated by a single space, scheme literally `Bearer`.
pub fn parse_authorization(header: Option<&str>) -> Result<&str, ClaimsError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(ClaimsError::missing_header()),
    };

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(ClaimsError::malformed_header()),
    }
}

/// Decode the payload segment of `<header>.<payload>.<signature>`.
///
/// Only the payload is read. A token that fails any step yields an error, never
/// a partially populated set.
pub fn decode_claims(token: &str) -> Result<ClaimSet, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(ClaimsError::undecodable("token contains an invalid number of segments"));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| ClaimsError::undecodable(format_args!("illegal base64 data: {e}")))?;

    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| ClaimsError::undecodable(format_args!("invalid payload: {e}")))?;

    match value {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, ClaimValue::from(v)))
            .collect()),
        other => Err(ClaimsError::undecodable(format_args!(
            "payload is {}, expected object",
            ClaimValue::from(other).kind()
        ))),
    }
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    /// Unsigned token the gateway would already have accepted.
    pub fn token_with(payload: &serde_json::Value) -> String {
        let header = serde_json::json!({"alg": "RS256", "typ": "JWT"});
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(header.to_string()),
            URL_SAFE_NO_PAD.encode(payload.to_string()),
            "not-a-real-signature"
        )
    }

    pub fn bearer(payload: &serde_json::Value) -> String {
        format!("Bearer {}", token_with(payload))
    }
}
