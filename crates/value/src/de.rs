use crate::{Mapping, Value};
use core::fmt;
use serde::de::{self, MapAccess, SeqAccess};
use std::collections::{HashMap, hash_map::Entry};

/// Does the heavy lifting of turning any self-describing input into a [`Value`].
struct ValueVisitor;

impl<'de> de::Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("any value")
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
		Ok(Value::Bool(value))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
		Ok(Value::Int(value))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
		Ok(Value::UInt(value))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
		Ok(Value::Float(value))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
		Ok(Value::String(value.to_owned()))
	}

	fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
		Ok(Value::String(value))
	}

	// Bytes are a variable-length sequence of small unsigned integers.
	fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
		Ok(Value::slice(value.iter().copied()))
	}

	fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(Value::Null)
	}

	fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: de::Deserializer<'de>,
	{
		de::Deserialize::deserialize(deserializer)
	}

	fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: de::Deserializer<'de>,
	{
		de::Deserialize::deserialize(deserializer)
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(256));
		while let Some(item) = seq.next_element::<Value>()? {
			items.push(item);
		}

		Ok(Value::Slice(items))
	}

	fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let capacity = access.size_hint().unwrap_or(0).min(256);
		let mut map = Mapping::with_capacity(capacity);
		// Positions of string keys; later duplicates replace the earlier value.
		let mut strings = HashMap::<String, usize>::with_capacity(capacity);

		while let Some((key, value)) = access.next_entry::<Value, Value>()? {
			let Value::String(name) = key else {
				map.insert(key, value);
				continue;
			};

			match strings.entry(name) {
				Entry::Occupied(entry) => {
					if let Some(existing) = map.value_at_mut(*entry.get()) {
						*existing = value;
					}
				}
				Entry::Vacant(entry) => {
					let index = map.len();
					map.push(Value::String(entry.key().clone()), value);
					entry.insert(index);
				}
			}
		}

		Ok(Value::Map(map))
	}
}

impl<'de> de::Deserialize<'de> for Value {
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: de::Deserializer<'de>,
	{
		deserializer.deserialize_any(ValueVisitor)
	}
}
