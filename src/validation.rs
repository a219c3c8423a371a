//! # Response Validation Specifications
//!
//! Declarative, reusable descriptions of an expected HTTP outcome. A spec
//! evaluates the status code first, then the content type if one was given,
//! then the body predicate; the first mismatch short-circuits with a
//! diagnostic naming expected vs. actual. Specs are pure values: building
//! one has no side effect and the same spec can be applied to any number of
//! outcomes.

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::outcome::RequestOutcome;

/// Expected-vs-actual diagnostic for a failed specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMismatch {
    pub expected: String,
    pub actual: String,
}

impl ValidationMismatch {
    fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for ValidationMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expected, self.actual)
    }
}

/// Predicate over a response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPredicate {
    /// Byte-for-byte string equality of the value at a JSON pointer path
    JsonPathEquals { path: String, expected: String },
    /// Literal substring match anywhere in the raw body
    Contains(String),
    /// Passes if any one alternative passes
    AnyOf(Vec<BodyPredicate>),
}

impl BodyPredicate {
    /// Equality of the string at `path` (JSON pointer syntax, e.g.
    /// `/errors/0/message`)
    pub fn json_path_equals(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::JsonPathEquals {
            path: path.into(),
            expected: expected.into(),
        }
    }

    pub fn contains(needle: impl Into<String>) -> Self {
        Self::Contains(needle.into())
    }

    fn evaluate(&self, outcome: &RequestOutcome) -> Result<(), ValidationMismatch> {
        match self {
            BodyPredicate::JsonPathEquals { path, expected } => {
                let json: Value = match serde_json::from_str(outcome.body()) {
                    Ok(json) => json,
                    Err(_) => {
                        return Err(ValidationMismatch::new(
                            format!("JSON body with {path} == {expected:?}"),
                            format!("unparseable body {:?}", excerpt(outcome.body())),
                        ));
                    }
                };
                let actual = match json.pointer(path) {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                    None => {
                        return Err(ValidationMismatch::new(
                            format!("value at {path}"),
                            format!("nothing at that path in {:?}", excerpt(outcome.body())),
                        ));
                    }
                };
                if actual == *expected {
                    Ok(())
                } else {
                    Err(ValidationMismatch::new(
                        format!("{expected:?} at {path}"),
                        format!("{actual:?}"),
                    ))
                }
            }
            BodyPredicate::Contains(needle) => {
                if outcome.body().contains(needle.as_str()) {
                    Ok(())
                } else {
                    Err(ValidationMismatch::new(
                        format!("body containing {needle:?}"),
                        format!("{:?}", excerpt(outcome.body())),
                    ))
                }
            }
            BodyPredicate::AnyOf(alternatives) => {
                if alternatives
                    .iter()
                    .any(|alt| alt.evaluate(outcome).is_ok())
                {
                    Ok(())
                } else {
                    let expectations: Vec<String> = alternatives
                        .iter()
                        .filter_map(|alt| alt.evaluate(outcome).err())
                        .map(|mismatch| mismatch.expected)
                        .collect();
                    Err(ValidationMismatch::new(
                        format!("any of [{}]", expectations.join(", ")),
                        format!("{:?}", excerpt(outcome.body())),
                    ))
                }
            }
        }
    }
}

// Keep diagnostics legible when the server returns a page of HTML.
fn excerpt(body: &str) -> &str {
    const LIMIT: usize = 200;
    if body.len() <= LIMIT {
        return body;
    }
    let mut end = LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Declarative description of an expected HTTP outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    status: StatusCode,
    content_type: Option<String>,
    body: Option<BodyPredicate>,
}

impl ResponseSpec {
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: None,
        }
    }

    /// Expect a Content-Type whose media-type essence matches (parameters
    /// such as `charset` are ignored)
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, predicate: BodyPredicate) -> Self {
        self.body = Some(predicate);
        self
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Evaluate this spec against an outcome
    ///
    /// Stateless and reentrant; status first, then content type, then body.
    pub fn matches(&self, outcome: &RequestOutcome) -> Result<(), ValidationMismatch> {
        if outcome.status() != self.status {
            return Err(ValidationMismatch::new(
                format!("status {}", self.status.as_u16()),
                format!(
                    "status {} with body {:?}",
                    outcome.status().as_u16(),
                    excerpt(outcome.body())
                ),
            ));
        }

        if let Some(ref expected) = self.content_type {
            match outcome.content_type() {
                Some(actual) if actual == expected => {}
                Some(actual) => {
                    return Err(ValidationMismatch::new(
                        format!("content type {expected:?}"),
                        format!("{actual:?}"),
                    ));
                }
                None => {
                    return Err(ValidationMismatch::new(
                        format!("content type {expected:?}"),
                        "no Content-Type header".to_string(),
                    ));
                }
            }
        }

        if let Some(ref predicate) = self.body {
            predicate.evaluate(outcome)?;
        }

        Ok(())
    }

    /// `matches` adapted for `?`-style use in tests
    pub fn verify(&self, outcome: &RequestOutcome) -> ApiResult<()> {
        self.matches(outcome)
            .map_err(|mismatch| ApiError::ValidationMismatch(mismatch.to_string()))
    }
}
