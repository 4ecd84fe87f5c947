use crate::Value;

/// Insertion-ordered associative mapping between [`Value`]s.
///
/// Keys are compared with `PartialEq`, so any value may be used as a key.
/// Lookups and [`insert`](Mapping::insert) are linear in the number of entries.
/// Conversions from `serde_json` objects and deserialized maps with string keys
/// do not go through `insert` and stay linear overall.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping(Vec<(Value, Value)>);

impl Mapping {
	#[inline]
	pub const fn new() -> Self {
		Self(Vec::new())
	}

	/// Insert an entry, returning the previous value stored under an equal key.
	pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
		let key = key.into();
		let value = value.into();

		match self.0.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => Some(core::mem::replace(existing, value)),
			None => {
				self.0.push((key, value));
				None
			}
		}
	}

	/// Append an entry whose key is known not to be present yet.
	#[inline]
	pub(crate) fn push(&mut self, key: Value, value: Value) {
		self.0.push((key, value));
	}

	#[inline]
	pub(crate) fn value_at_mut(&mut self, index: usize) -> Option<&mut Value> {
		self.0.get_mut(index).map(|(_, v)| v)
	}

	#[inline]
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self(Vec::with_capacity(capacity))
	}

	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
		self.0.iter().map(|(k, v)| (k, v))
	}
}

impl<K: Into<Value>, V: Into<Value>> Extend<(K, V)> for Mapping {
	fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut map = Mapping::new();
		map.extend(iter);
		map
	}
}
