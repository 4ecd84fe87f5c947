use core::fmt;

/// The runtime category of a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
	/// Absent value.
	Null,

	/// `true` or `false`.
	Bool,

	/// Signed or unsigned integer of any width.
	Integer,

	/// Floating-point number.
	Float,

	/// UTF-8 string.
	String,

	/// Structured record with named fields.
	Record,

	/// Fixed-size sequence.
	Array,

	/// Variable-length sequence.
	Slice,

	/// Associative mapping.
	Map,

	/// Anything without a dedicated category.
	Unknown,
}

impl Kind {
	/// Every kind, in declaration order.
	pub const ALL: [Kind; 10] = [
		Kind::Null,
		Kind::Bool,
		Kind::Integer,
		Kind::Float,
		Kind::String,
		Kind::Record,
		Kind::Array,
		Kind::Slice,
		Kind::Map,
		Kind::Unknown,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Kind::Null => "nil",
			Kind::Bool => "bool",
			Kind::Integer => "integer",
			Kind::Float => "float",
			Kind::String => "string",
			Kind::Record => "record",
			Kind::Array => "array",
			Kind::Slice => "slice",
			Kind::Map => "map",
			Kind::Unknown => "Unknown",
		}
	}

	/// Whether values of this kind hold a length that can be zero.
	#[inline]
	pub const fn is_collection(self) -> bool {
		matches!(self, Kind::String | Kind::Array | Kind::Slice | Kind::Map)
	}
}

impl fmt::Display for Kind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
