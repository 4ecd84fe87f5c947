use crate::{Kind, Mapping, Opaque, Record};
use std::{
	borrow::Cow,
	collections::{BTreeMap, HashMap},
	hash::BuildHasher,
};

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// Absent value.
	#[default]
	Null,

	/// Boolean scalar.
	Bool(bool),

	/// Signed integer scalar.
	Int(i64),

	/// Unsigned integer scalar.
	UInt(u64),

	/// Floating-point scalar.
	Float(f64),

	/// UTF-8 string.
	String(String),

	/// Structured record.
	Record(Record),

	/// Fixed-size sequence.
	Array(Vec<Value>),

	/// Variable-length sequence.
	Slice(Vec<Value>),

	/// Associative mapping.
	Map(Mapping),

	/// A value of a category without a dedicated variant.
	Opaque(Opaque),
}

impl Value {
	pub const fn kind(&self) -> Kind {
		match self {
			Value::Null => Kind::Null,
			Value::Bool(_) => Kind::Bool,
			Value::Int(_) | Value::UInt(_) => Kind::Integer,
			Value::Float(_) => Kind::Float,
			Value::String(_) => Kind::String,
			Value::Record(_) => Kind::Record,
			Value::Array(_) => Kind::Array,
			Value::Slice(_) => Kind::Slice,
			Value::Map(_) => Kind::Map,
			Value::Opaque(_) => Kind::Unknown,
		}
	}

	/// Number of elements held by a string (in bytes), array, slice or map.
	///
	/// Returns `None` for kinds that have no length.
	pub fn len(&self) -> Option<usize> {
		match self {
			Value::String(s) => Some(s.len()),
			Value::Array(items) | Value::Slice(items) => Some(items.len()),
			Value::Map(map) => Some(map.len()),
			_ => None,
		}
	}

	#[inline]
	pub const fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	#[inline]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Build a fixed-size sequence from any iterator of values.
	pub fn array<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		Value::Array(items.into_iter().map(Into::into).collect())
	}

	/// Build a variable-length sequence from any iterator of values.
	pub fn slice<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		Value::Slice(items.into_iter().map(Into::into).collect())
	}
}

macro_rules! from_int {
	($variant:ident as $target:ty: $($ty:ty),+ $(,)?) => {
		$(
			impl From<$ty> for Value {
				#[inline]
				fn from(value: $ty) -> Self {
					Value::$variant(<$target>::from(value))
				}
			}
		)+
	};
}

from_int!(Int as i64: i8, i16, i32, i64);
from_int!(UInt as u64: u8, u16, u32, u64);

impl From<isize> for Value {
	#[inline]
	fn from(value: isize) -> Self {
		// isize is at most 64 bits wide on every supported target
		Value::Int(value as i64)
	}
}

impl From<usize> for Value {
	#[inline]
	fn from(value: usize) -> Self {
		Value::UInt(value as u64)
	}
}

impl From<bool> for Value {
	#[inline]
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<f32> for Value {
	#[inline]
	fn from(value: f32) -> Self {
		Value::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	#[inline]
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<char> for Value {
	#[inline]
	fn from(value: char) -> Self {
		Value::String(value.to_string())
	}
}

impl From<&str> for Value {
	#[inline]
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	#[inline]
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl<'a> From<Cow<'a, str>> for Value {
	#[inline]
	fn from(value: Cow<'a, str>) -> Self {
		Value::String(value.into_owned())
	}
}

impl From<()> for Value {
	#[inline]
	fn from(_: ()) -> Self {
		Value::Null
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	#[inline]
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => Value::Null,
		}
	}
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
	#[inline]
	fn from(value: [T; N]) -> Self {
		Value::array(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	#[inline]
	fn from(value: Vec<T>) -> Self {
		Value::slice(value)
	}
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
	#[inline]
	fn from(value: &[T]) -> Self {
		Value::slice(value.iter().cloned())
	}
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
	fn from(value: BTreeMap<K, V>) -> Self {
		Value::Map(value.into_iter().collect())
	}
}

impl<K: Into<Value>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
	fn from(value: HashMap<K, V, S>) -> Self {
		Value::Map(value.into_iter().collect())
	}
}

impl From<Record> for Value {
	#[inline]
	fn from(value: Record) -> Self {
		Value::Record(value)
	}
}

impl From<Mapping> for Value {
	#[inline]
	fn from(value: Mapping) -> Self {
		Value::Map(value)
	}
}

impl From<Opaque> for Value {
	#[inline]
	fn from(value: Opaque) -> Self {
		Value::Opaque(value)
	}
}
