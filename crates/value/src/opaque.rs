use core::{any, fmt};

/// Stand-in for a value whose category has no [`Value`](crate::Value) variant,
/// such as a channel, a function or a raw handle.
///
/// Only the type name is kept; the value itself is never inspected.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opaque {
	type_name: &'static str,
}

impl Opaque {
	/// Opaque stand-in for a value of type `T`.
	#[inline]
	pub fn of<T: ?Sized>() -> Self {
		Self::named(any::type_name::<T>())
	}

	#[inline]
	pub const fn named(type_name: &'static str) -> Self {
		Self { type_name }
	}

	#[inline]
	pub const fn type_name(&self) -> &'static str {
		self.type_name
	}
}

impl fmt::Debug for Opaque {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Opaque<{}>", self.type_name)
	}
}
