//! The wire contract shared by every enum and record.
//!
//! ## Envelopes
//!
//! Every record travels as a flat JSON object whose keys are the record's
//! snake_case name joined with the field name, e.g. `PayInvoiceInput.node_id`
//! is `"pay_invoice_input_node_id"`. Field order is not significant, unknown
//! keys are ignored, and enum values are their upper-case wire tokens.
//!
//! ## Optional fields
//!
//! Unset optional fields serialize as an explicit `null` rather than being
//! omitted. On decode, a `null` and an absent key are the same thing.
//!
//! ## Server-side defaults
//!
//! Some optional inputs have defaults the server fills in, e.g. invoice
//! expiries default to [`DEFAULT_INVOICE_EXPIRY_SECS`]. The client never
//! materializes these; an unset field is sent as `null`.

use std::{
    convert::Infallible,
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::error::{DecodeError, ValidationError, ValidationErrorKind};

/// The `tracing` target for wire-level decode events.
pub const WIRE_TARGET: &str = "sdk_objects::wire";

/// What an `Undefined` enum value encodes to. Never valid in a request.
pub const UNDEFINED_WIRE_TOKEN: &str = "undefined";

/// `amount_sats` value meaning "withdraw the whole wallet balance".
pub const WITHDRAW_ALL_FUNDS: i64 = -1;

/// Invoice expiry the server applies when `expiry_secs` is unset: one day.
pub const DEFAULT_INVOICE_EXPIRY_SECS: i64 = 86_400;

// --- Traits --- //

/// Any type with a stable GraphQL typename that can go on the wire.
pub trait WireType: Serialize + DeserializeOwned {
    /// The GraphQL typename, e.g. `"PayInvoiceOutput"`.
    const TYPENAME: &'static str;
}

/// How a field is selected in a GraphQL fragment.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    /// A scalar or enum leaf: selected by name.
    Scalar,
    /// A reference to a server entity: selected as `{ id }`.
    Entity,
    /// A nested value record: selected as a sub-block of its own fields.
    Object,
}

/// Maps a Rust field type to its [`Shape`]. `Option<T>` and `Vec<T>` take the
/// shape of `T`.
pub trait WireShape {
    const SHAPE: Shape;
    const OPTIONAL: bool = false;
    /// The fields of a [`Shape::Object`], empty otherwise.
    const NESTED: &'static [WireField] = &[];
}

impl WireShape for String {
    const SHAPE: Shape = Shape::Scalar;
}

impl WireShape for i64 {
    const SHAPE: Shape = Shape::Scalar;
}

impl WireShape for bool {
    const SHAPE: Shape = Shape::Scalar;
}

impl WireShape for f64 {
    const SHAPE: Shape = Shape::Scalar;
}

impl<T: WireShape> WireShape for Option<T> {
    const SHAPE: Shape = T::SHAPE;
    const OPTIONAL: bool = true;
    const NESTED: &'static [WireField] = T::NESTED;
}

impl<T: WireShape> WireShape for Vec<T> {
    const SHAPE: Shape = T::SHAPE;
    const NESTED: &'static [WireField] = T::NESTED;
}

/// A single field of a [`WireRecord`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct WireField {
    /// The Rust field name, which is also the GraphQL selection name.
    pub name: &'static str,
    /// The JSON key, i.e. `<wire prefix>_<name>`.
    pub wire: &'static str,
    pub shape: Shape,
    pub optional: bool,
    /// For [`Shape::Object`] fields, the nested record's fields.
    pub nested: &'static [WireField],
}

/// A closed set of upper-case wire tokens plus an `Undefined` fallback.
///
/// Implemented by the `wire_enum!` macro; see its docs for the contract.
pub trait WireEnum:
    WireType
    + WireShape
    + Copy
    + Eq
    + Hash
    + Debug
    + Display
    + FromStr<Err = Infallible>
    + 'static
{
    /// Every variant except `Undefined`, in declaration order.
    const KNOWN_VARIANTS: &'static [Self];

    /// The forward-compat fallback variant.
    const UNDEFINED: Self;

    /// The wire token for this variant.
    fn as_wire_str(self) -> &'static str;

    /// Parse a wire token. Matching is exact and case-sensitive. Anything
    /// unrecognized, including `"undefined"` itself, gives `Undefined`.
    fn from_wire_str(token: &str) -> Self;

    #[inline]
    fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }
}

/// A flat record of named fields.
pub trait WireRecord: WireType + WireShape {
    /// The snake_case of [`WireType::TYPENAME`]; prefixes every wire key.
    const WIRE_PREFIX: &'static str;

    /// The record's fields, in declaration order.
    const FIELDS: &'static [WireField];

    /// Look up a field by its Rust name.
    fn field(name: &str) -> Option<&'static WireField> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

/// A record the client constructs and sends as a GraphQL mutation argument.
pub trait InputRecord: WireRecord {
    /// Check the invariants the server would otherwise reject us for.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Validate, then encode into a JSON object.
    fn to_wire(&self) -> Result<Value, ValidationError> {
        self.validate()?;
        Ok(encode(self))
    }
}

/// A record the server returns, which comes with the GraphQL fragment the
/// client embeds in its query to select exactly these fields.
pub trait OutputRecord: WireRecord {
    /// e.g. `"PayInvoiceOutputFragment"`.
    const FRAGMENT_NAME: &'static str;

    /// The verbatim fragment text.
    const FRAGMENT: &'static str;
}

// --- Codec --- //

/// Decode a wire type from a JSON byte slice. Trailing non-whitespace after
/// the envelope is an error.
pub fn decode<T: WireType>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de)
        .map_err(|err| DecodeError::from_path_error(T::TYPENAME, err))?;
    de.end()
        .map_err(|err| DecodeError::from_json_error(T::TYPENAME, "", err))?;
    Ok(value)
}

/// Decode a wire type from a JSON string.
#[inline]
pub fn decode_str<T: WireType>(s: &str) -> Result<T, DecodeError> {
    decode(s.as_bytes())
}

/// Decode a wire type from an already-parsed JSON value, e.g. one entry of a
/// GraphQL `data` object.
pub fn decode_value<T: WireType>(value: Value) -> Result<T, DecodeError> {
    serde_path_to_error::deserialize::<_, T>(value)
        .map_err(|err| DecodeError::from_path_error(T::TYPENAME, err))
}

/// Encode a wire type into a JSON value.
pub fn encode<T: WireType>(value: &T) -> Value {
    // All wire types have string keys and no fallible Serialize impls.
    serde_json::to_value(value).expect("Failed to JSON serialize")
}

/// Encode a wire type into JSON bytes.
pub fn encode_to_vec<T: WireType>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Failed to JSON serialize")
}

/// Called by `wire_enum!` when a token falls back to `Undefined`.
#[doc(hidden)]
pub fn log_undefined_token(typename: &'static str, token: &str) {
    debug!(
        target: WIRE_TARGET,
        typename,
        token,
        "Unrecognized wire token; decoding as undefined"
    );
}

// --- Validation helpers --- //

pub(crate) fn ensure_non_negative(
    record: &'static str,
    field: &'static str,
    value: i64,
) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError {
            record,
            field,
            kind: ValidationErrorKind::Negative(value),
        });
    }
    Ok(())
}

pub(crate) fn ensure_non_negative_opt(
    record: &'static str,
    field: &'static str,
    value: Option<i64>,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => ensure_non_negative(record, field, value),
        None => Ok(()),
    }
}

/// Like [`ensure_non_negative`] but also admits [`WITHDRAW_ALL_FUNDS`].
pub(crate) fn ensure_withdrawal_amount(
    record: &'static str,
    field: &'static str,
    value: i64,
) -> Result<(), ValidationError> {
    if value < 0 && value != WITHDRAW_ALL_FUNDS {
        return Err(ValidationError {
            record,
            field,
            kind: ValidationErrorKind::NegativeWithdrawal(value),
        });
    }
    Ok(())
}
