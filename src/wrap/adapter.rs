use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::wrap::{Absent, Fallback, Field, KeyedDecoder, KeyedEncoder};

/// Strict keyed read: an absent key is a missing-key error.
///
/// This is the unmodified baseline for fields carrying no policy.
pub fn decode_field<C, T>(cx: &C, key: &str) -> Result<Field<T>, C::Error>
where
	C: KeyedDecoder,
	T: DeserializeOwned,
{
	cx.decode::<T>(key).map(Field::new)
}

/// Keyed read that synthesizes the absent state for a missing key.
///
/// A present key still decodes strictly; only genuine absence is replaced
/// by `Field::absent()`, built inner-value-first.
pub fn decode_field_or_absent<C, T>(cx: &C, key: &str) -> Result<Field<T>, C::Error>
where
	C: KeyedDecoder,
	T: DeserializeOwned + Absent,
{
	match cx.decode_if_present::<T>(key)? {
		Some(value) => Ok(Field::new(value)),
		None => Ok(Field::absent()),
	}
}

/// Keyed read that substitutes the fallback value for a missing key.
///
/// A present value is returned verbatim, never the fallback.
pub fn decode_field_or_fallback<C, T>(cx: &C, key: &str) -> Result<Field<T>, C::Error>
where
	C: KeyedDecoder,
	T: DeserializeOwned + Fallback,
{
	match cx.decode_if_present::<T>(key)? {
		Some(value) => Ok(Field::new(value)),
		None => Ok(Field::fallback()),
	}
}

/// Strict keyed write: always emits the key.
pub fn encode_field<C, T>(cx: &mut C, key: &str, field: &Field<T>) -> Result<(), C::Error>
where
	C: KeyedEncoder,
	T: Serialize,
{
	cx.encode(key, field.get())
}

/// Keyed write that omits the key for an absent/empty value.
///
/// An absent value returns before the encoder is touched. A present value
/// goes through the content-aware write, which may itself still omit the
/// key when the serialized form has no content.
pub fn encode_field_or_omit<C, T>(cx: &mut C, key: &str, field: &Field<T>) -> Result<(), C::Error>
where
	C: KeyedEncoder,
	T: Serialize + Absent,
{
	if field.is_absent() {
		return Ok(());
	}
	cx.encode_if_present(key, field.get())
}
