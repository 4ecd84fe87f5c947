use presence_value::Kind;
use thiserror::Error;

/// Why a value failed the [`Required`](crate::Required) rule.
///
/// Exactly one invalidity is reported for a rejected value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum RequiredInvalidity {
	#[error("nil value is not a valid value for Required")]
	Null,

	/// `len` is the byte length of the string before trimming.
	#[error("string value of length {len} is blank and not a valid value for Required")]
	EmptyString { len: usize },

	#[error("empty array is not a valid value for Required")]
	EmptyArray,

	#[error("empty slice is not a valid value for Required")]
	EmptySlice,

	#[error("empty map is not a valid value for Required")]
	EmptyMap,

	#[error("Unknown value of type `{type_name}` is not a valid value for Required")]
	UnknownKind { type_name: &'static str },
}

impl RequiredInvalidity {
	/// The kind of the rejected value.
	pub const fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::EmptyString { .. } => Kind::String,
			Self::EmptyArray => Kind::Array,
			Self::EmptySlice => Kind::Slice,
			Self::EmptyMap => Kind::Map,
			Self::UnknownKind { .. } => Kind::Unknown,
		}
	}

	/// Empty-collection invalidity for `kind`, if `kind` can be empty.
	pub(crate) const fn empty(kind: Kind, len: usize) -> Option<Self> {
		match kind {
			Kind::String => Some(Self::EmptyString { len }),
			Kind::Array => Some(Self::EmptyArray),
			Kind::Slice => Some(Self::EmptySlice),
			Kind::Map => Some(Self::EmptyMap),
			_ => None,
		}
	}
}
