mod adapter;
mod error;
mod field;
mod json;
mod keyed;
mod policy;

/// Per-policy keyed read/write entry points.
pub use adapter::{decode_field, decode_field_or_absent, decode_field_or_fallback, encode_field, encode_field_or_omit};
/// Error and result aliases.
pub use error::{FieldError, Result};
/// Immutable field wrapper.
pub use field::Field;
/// Keyed encode/decode context contracts.
pub use keyed::{DecodeError, KeyedDecoder, KeyedEncoder};
/// Value policy capabilities.
pub use policy::{Absent, Fallback};
