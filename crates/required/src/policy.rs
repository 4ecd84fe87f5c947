use presence_value::Kind;

/// Per-kind overrides that allow a collection-like value to be empty.
///
/// Every override defaults to `false`: empty strings, arrays, slices and maps
/// are rejected unless explicitly allowed. Kinds without a length are not
/// affected by the policy.
///
/// When deserialized, option names use camel case (`allowEmptyString`,
/// `allowEmptyArray`, `allowEmptySlice`, `allowEmptyMap`). Missing options
/// default to `false` and unknown options are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
#[cfg_attr(feature = "de", derive(serde::Deserialize))]
#[cfg_attr(
	any(feature = "ser", feature = "de"),
	serde(default, rename_all = "camelCase", deny_unknown_fields)
)]
pub struct EmptinessPolicy {
	/// Accept strings that are empty after trimming whitespace.
	pub allow_empty_string: bool,

	/// Accept fixed-size sequences without elements.
	pub allow_empty_array: bool,

	/// Accept variable-length sequences without elements.
	pub allow_empty_slice: bool,

	/// Accept mappings without entries.
	pub allow_empty_map: bool,
}

impl EmptinessPolicy {
	/// Policy that rejects every empty value.
	#[inline]
	pub const fn new() -> Self {
		Self::uniform(false)
	}

	/// Policy applying the same override to every kind.
	#[inline]
	pub const fn uniform(allow_empty: bool) -> Self {
		Self {
			allow_empty_string: allow_empty,
			allow_empty_array: allow_empty,
			allow_empty_slice: allow_empty,
			allow_empty_map: allow_empty,
		}
	}

	#[inline]
	pub const fn allow_empty_string(mut self, allow: bool) -> Self {
		self.allow_empty_string = allow;
		self
	}

	#[inline]
	pub const fn allow_empty_array(mut self, allow: bool) -> Self {
		self.allow_empty_array = allow;
		self
	}

	#[inline]
	pub const fn allow_empty_slice(mut self, allow: bool) -> Self {
		self.allow_empty_slice = allow;
		self
	}

	#[inline]
	pub const fn allow_empty_map(mut self, allow: bool) -> Self {
		self.allow_empty_map = allow;
		self
	}

	/// Whether an empty value of `kind` is accepted.
	///
	/// Always `false` for kinds that cannot be empty.
	pub const fn allows_empty(&self, kind: Kind) -> bool {
		match kind {
			Kind::String => self.allow_empty_string,
			Kind::Array => self.allow_empty_array,
			Kind::Slice => self.allow_empty_slice,
			Kind::Map => self.allow_empty_map,
			_ => false,
		}
	}
}
