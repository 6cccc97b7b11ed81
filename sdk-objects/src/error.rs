//! Errors from decoding and validating wire records.

use std::fmt::{self, Write};

use serde_json::error::Category;
use serde_path_to_error::{Path, Segment};
use thiserror::Error;
use tracing::debug;

use crate::wire::WIRE_TARGET;

/// Failed to decode a wire type from JSON.
///
/// `path` locates the failure inside the envelope, starting with the GraphQL
/// typename, e.g. `PayInvoiceInput.pay_invoice_input_amount_msats`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Failed to decode {path}: {kind}: {msg}")]
pub struct DecodeError {
    /// The typename we were decoding.
    pub record: &'static str,
    pub path: String,
    pub kind: DecodeErrorKind,
    /// The underlying `serde_json` error message.
    pub msg: String,
}

/// Coarse classification of a [`DecodeError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DecodeErrorKind {
    /// Reading the input failed.
    Io,
    /// The input isn't valid JSON, or there is trailing data after it.
    Syntax,
    /// The input ended in the middle of a JSON value.
    Eof,
    /// A required field was absent.
    MissingField,
    /// A field had the wrong JSON type, e.g. a string where an integer goes.
    InvalidType,
    /// A field had the right JSON type but an unacceptable value.
    InvalidValue,
    /// An externally tagged enum had an unknown tag.
    UnknownVariant,
}

impl DecodeErrorKind {
    fn classify(err: &serde_json::Error) -> Self {
        match err.classify() {
            Category::Io => Self::Io,
            Category::Syntax => Self::Syntax,
            Category::Eof => Self::Eof,
            Category::Data => {
                let msg = err.to_string();
                if msg.starts_with("missing field") {
                    Self::MissingField
                } else if msg.starts_with("invalid type") {
                    Self::InvalidType
                } else if msg.starts_with("unknown variant") {
                    Self::UnknownVariant
                } else {
                    Self::InvalidValue
                }
            }
        }
    }

    pub fn to_msg(self) -> &'static str {
        match self {
            Self::Io => "I/O error",
            Self::Syntax => "malformed JSON",
            Self::Eof => "unexpected end of input",
            Self::MissingField => "missing required field",
            Self::InvalidType => "wrong JSON type",
            Self::InvalidValue => "invalid value",
            Self::UnknownVariant => "unknown variant",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_msg())
    }
}

impl DecodeError {
    pub(crate) fn from_path_error(
        record: &'static str,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let path = render_path(err.path());
        Self::from_json_error(record, &path, err.into_inner())
    }

    pub(crate) fn from_json_error(
        record: &'static str,
        path: &str,
        err: serde_json::Error,
    ) -> Self {
        let kind = DecodeErrorKind::classify(&err);
        let msg = err.to_string();

        // `serde_path_to_error` renders the root as "."
        let mut full_path = match path {
            "" | "." => record.to_owned(),
            path => format!("{record}.{path}"),
        };
        // A missing field is reported at its parent, so append its name.
        if kind == DecodeErrorKind::MissingField {
            if let Some(field) = missing_field_name(&msg) {
                full_path.push('.');
                full_path.push_str(field);
            }
        }

        debug!(
            target: WIRE_TARGET,
            record,
            path = %full_path,
            ?kind,
            "Failed to decode wire type: {msg}"
        );

        Self {
            record,
            path: full_path,
            kind,
            msg,
        }
    }
}

/// Render a decode path as `key.key[idx].key`, dropping the trailing `?`
/// segments left when the input broke before the next key could be read.
fn render_path(path: &Path) -> String {
    let mut segments = path.iter().collect::<Vec<_>>();
    while let Some(Segment::Unknown) = segments.last() {
        segments.pop();
    }

    let mut out = String::new();
    for segment in segments {
        if !out.is_empty() && !matches!(segment, Segment::Seq { .. }) {
            out.push('.');
        }
        let _ = write!(out, "{segment}");
    }
    out
}

/// Extract `name` from a serde "missing field `name`" message.
fn missing_field_name(msg: &str) -> Option<&str> {
    let rest = msg.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(&rest[..end])
}

/// An input record failed a client-side check before being sent.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Invalid {record}.{field}: {kind}")]
pub struct ValidationError {
    pub record: &'static str,
    /// The Rust field name.
    pub field: &'static str,
    pub kind: ValidationErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationErrorKind {
    #[error("must not be negative, got {0}")]
    Negative(i64),
    #[error("must not be negative except -1 (withdraw all funds), got {0}")]
    NegativeWithdrawal(i64),
}
