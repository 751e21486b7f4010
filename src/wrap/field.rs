use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wrap::{Absent, Fallback};

/// Immutable single-value wrapper for one record field.
///
/// Holds exactly the constructed value and exposes it unchanged. There is no
/// setter; replacing the value means constructing a new wrapper. The encoded
/// form is exactly the inner value's, so wrapping a field does not change
/// the record's serialized shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<T>(T);

impl<T> Field<T> {
	/// Wrap `value`.
	pub fn new(value: T) -> Self {
		Field(value)
	}

	/// Borrow the wrapped value.
	pub fn get(&self) -> &T {
		&self.0
	}

	/// Unwrap into the inner value.
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T: Absent> Field<T> {
	/// Wrap the inner type's absent state.
	///
	/// The inner absent value is constructed first, then wrapped. Usable as a
	/// `#[serde(default = "Field::absent")]` path on record fields.
	pub fn absent() -> Self {
		Field(T::absent())
	}

	/// Whether the wrapped value is in its absent/empty state.
	///
	/// Usable as a `#[serde(skip_serializing_if = "Field::is_absent")]` path.
	pub fn is_absent(&self) -> bool {
		self.0.is_absent()
	}
}

impl<T: Fallback> Field<T> {
	/// Wrap the inner type's fallback value.
	///
	/// Usable as a `#[serde(default = "Field::fallback")]` path on record
	/// fields.
	pub fn fallback() -> Self {
		Field(T::fallback())
	}
}

impl<T> From<T> for Field<T> {
	fn from(value: T) -> Self {
		Field(value)
	}
}

impl<T> Deref for Field<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.0
	}
}

impl<T: Serialize> Serialize for Field<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.0.serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		T::deserialize(deserializer).map(Field)
	}
}
