use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors produced while reading and writing keyed fields.
#[derive(Debug, Error)]
pub enum FieldError {
	/// Key absent on read with no absence or fallback policy in effect.
	#[error("missing key: {key}")]
	MissingKey {
		/// Requested key.
		key: String,
	},
	/// Value at a present key failed to encode or decode.
	#[error("invalid value at key {key}: {source}")]
	InvalidValue {
		/// Key being read or written.
		key: String,
		/// Underlying serde failure.
		source: serde_json::Error,
	},
}
