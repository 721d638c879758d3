use crate::value::Rtype;
use std::fmt;

/// A value violated one of the documented bridge constraints at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for `{field}`: {constraint}")]
pub struct InvalidValue {
    /// Dotted path of the offending field, relative to the value being built.
    pub field: String,
    /// Human readable description of the violated constraint.
    pub constraint: String,
}

impl InvalidValue {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// Re-roots the error under `parent`, so `x` inside `xy` becomes `xy.x`.
    pub fn within(self, parent: &str) -> Self {
        let field = if self.field.starts_with('[') {
            format!("{parent}{}", self.field)
        } else {
            format!("{parent}.{}", self.field)
        };
        Self { field, ..self }
    }

    pub(crate) fn at_index(self, index: usize) -> Self {
        Self {
            field: format!("[{index}].{}", self.field),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The JSON did not have the shape of the wire schema (missing field, wrong type,
    /// unknown enum member).
    Malformed(String),
    /// The JSON had the right shape but a value failed validation.
    Invalid(InvalidValue),
    /// The `type` field names another resource kind.
    WrongType { expected: Rtype, found: String },
}

/// A wire payload could not be turned into a validated value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct DecodeError {
    /// Path of the offending field, `.` for the document root.
    pub path: String,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn malformed(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: DecodeErrorKind::Malformed(msg.into()),
        }
    }

    /// The validation error behind this decode failure, if any.
    pub fn invalid_value(&self) -> Option<&InvalidValue> {
        match &self.kind {
            DecodeErrorKind::Invalid(invalid) => Some(invalid),
            _ => None,
        }
    }
}

impl From<InvalidValue> for DecodeError {
    fn from(invalid: InvalidValue) -> Self {
        Self {
            path: invalid.field.clone(),
            kind: DecodeErrorKind::Invalid(invalid),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DecodeErrorKind::Malformed(msg) => write!(f, "malformed value at `{}`: {msg}", self.path),
            DecodeErrorKind::Invalid(invalid) => {
                write!(f, "invalid value at `{}`: {}", self.path, invalid.constraint)
            }
            DecodeErrorKind::WrongType { expected, found } => {
                write!(f, "expected a {expected} resource, found `{found}`")
            }
        }
    }
}

/// Failures of the bridge transport. The codec never looks inside these.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bridge answered with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("bridge error: {description}")]
    Bridge { description: String },
    #[error("bridge kept rate limiting after {attempts} attempts")]
    RateLimited { attempts: u32 },
    #[error("unexpected response envelope: {0}")]
    Envelope(String),
    #[error("invalid bridge configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HueError {
    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("field `{field}` is not accepted for {rtype} resources")]
    UnsupportedField { rtype: Rtype, field: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no {rtype} with id {id}")]
    NotFound { rtype: Rtype, id: String },
}

impl HueError {
    pub(crate) fn unsupported(rtype: Rtype, field: &str) -> Self {
        HueError::UnsupportedField {
            rtype,
            field: field.to_string(),
        }
    }
}

impl From<reqwest::Error> for HueError {
    fn from(err: reqwest::Error) -> Self {
        HueError::Transport(TransportError::Request(err))
    }
}
