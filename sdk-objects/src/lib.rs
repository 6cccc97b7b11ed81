//! Typed wire objects for the Lightspark Lightning / UMA GraphQL API.
//!
//! This crate is the data-transfer layer only: it knows how every request
//! input, response output, enum, and entity reference looks on the wire, and
//! which GraphQL fragment projects each output. It doesn't do any I/O.
//!
//! ## Layout
//!
//! - [`wire`]: the traits every wire type implements, and the codec entry
//!   points [`wire::decode`] / [`wire::encode`].
//! - [`enums`]: enumerations which decode unknown tokens to `Undefined`.
//! - [`entity`]: [`EntityRef`], an id-only reference to a server entity.
//! - [`models`]: request inputs and response outputs, grouped by domain.
//! - [`fragment`]: the registry mapping GraphQL typenames to fragments.
//! - [`webhook`]: the envelope of an inbound webhook event.
//!
//! ## Logging
//!
//! Nothing here installs a `tracing` subscriber. Unknown enum tokens and
//! decode failures are logged at DEBUG under the `sdk_objects::wire` target.

// Must be declared first so the macros are visible to the other modules.
#[macro_use]
mod macros;

/// Id-only references to server-side entities.
pub mod entity;
/// Wire enumerations.
pub mod enums;
/// Decode and validation errors.
pub mod error;
/// The GraphQL fragment registry.
pub mod fragment;
/// Input and output records.
pub mod models;
/// Inbound webhook envelopes.
pub mod webhook;
/// Wire traits and the JSON codec.
pub mod wire;

pub use entity::EntityRef;
pub use error::{DecodeError, DecodeErrorKind, ValidationError};
pub use wire::{
    InputRecord, OutputRecord, WireEnum, WireRecord, WireType, decode,
    decode_value, encode,
};
