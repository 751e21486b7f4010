use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error contract for keyed decode contexts.
pub trait DecodeError: Sized {
	/// Build the error reported when a required key is absent.
	fn missing_key(key: &str) -> Self;
}

/// Keyed decode context exposing strict and presence-tolerant reads.
///
/// Key presence is observed once per call from the tolerant-read result and
/// never cached.
pub trait KeyedDecoder {
	/// Error type produced by this context.
	type Error: DecodeError;

	/// Presence-tolerant read: `Ok(None)` when `key` is absent.
	///
	/// Any failure other than absence propagates as an error; a mismatched
	/// value at a present key must not be reported as `None`.
	fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Self::Error>;

	/// Strict read: fails with the missing-key error when `key` is absent.
	fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T, Self::Error> {
		match self.decode_if_present::<T>(key)? {
			Some(value) => Ok(value),
			None => Err(Self::Error::missing_key(key)),
		}
	}
}

/// Keyed encode context exposing strict and content-aware writes.
pub trait KeyedEncoder {
	/// Error type produced by this context.
	type Error;

	/// Write `value` under `key` unconditionally.
	fn encode<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), Self::Error>;

	/// Write `value` under `key` unless the context finds it has no content.
	fn encode_if_present<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), Self::Error>;
}
