use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::wrap::{Absent, DecodeError, FieldError, KeyedDecoder, KeyedEncoder, Result};

impl DecodeError for FieldError {
	fn missing_key(key: &str) -> Self {
		FieldError::MissingKey { key: key.to_owned() }
	}
}

impl KeyedDecoder for Map<String, Value> {
	type Error = FieldError;

	fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
		let Some(value) = self.get(key) else {
			return Ok(None);
		};
		T::deserialize(value).map(Some).map_err(|source| FieldError::InvalidValue {
			key: key.to_owned(),
			source,
		})
	}
}

impl KeyedEncoder for Map<String, Value> {
	type Error = FieldError;

	fn encode<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
		let value = to_json(key, value)?;
		self.insert(key.to_owned(), value);
		Ok(())
	}

	fn encode_if_present<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
		let value = to_json(key, value)?;
		if value.is_null() {
			return Ok(());
		}
		self.insert(key.to_owned(), value);
		Ok(())
	}
}

impl Absent for Value {
	fn absent() -> Self {
		Value::Null
	}

	fn is_absent(&self) -> bool {
		self.is_null()
	}
}

fn to_json<T: Serialize>(key: &str, value: &T) -> Result<Value> {
	serde_json::to_value(value).map_err(|source| FieldError::InvalidValue {
		key: key.to_owned(),
		source,
	})
}
