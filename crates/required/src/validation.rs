use core::fmt;
use semval::{Invalidity, Validate, context::Context};

#[cfg(feature = "spantrace")]
use tracing_error::SpanTrace;

#[cfg(feature = "backtrace")]
use std::backtrace::Backtrace;

/// A single invalidity, together with where it was detected.
#[derive(Debug)]
pub struct ValidationError<I: Invalidity + Send + Sync> {
	invalidity: I,
	#[cfg(feature = "backtrace")]
	backtrace: Backtrace,
	#[cfg(feature = "spantrace")]
	spantrace: SpanTrace,
}

impl<I: Invalidity + Send + Sync> ValidationError<I> {
	#[inline]
	pub fn new(invalidity: I) -> Self {
		Self {
			invalidity,
			#[cfg(feature = "backtrace")]
			backtrace: Backtrace::capture(),
			#[cfg(feature = "spantrace")]
			spantrace: SpanTrace::capture(),
		}
	}

	pub fn invalidity(&self) -> &I {
		&self.invalidity
	}

	pub fn into_invalidity(self) -> I {
		self.invalidity
	}

	#[cfg(feature = "backtrace")]
	#[cfg_attr(doc_cfg, doc(cfg(feature = "backtrace")))]
	pub fn backtrace(&self) -> &Backtrace {
		&self.backtrace
	}

	#[cfg(feature = "spantrace")]
	#[cfg_attr(doc_cfg, doc(cfg(feature = "spantrace")))]
	pub fn spantrace(&self) -> &SpanTrace {
		&self.spantrace
	}
}

impl<I: Invalidity + Send + Sync> From<I> for ValidationError<I> {
	fn from(invalidity: I) -> Self {
		Self::new(invalidity)
	}
}

impl<I> fmt::Display for ValidationError<I>
where
	I: Invalidity + fmt::Display + Send + Sync,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.invalidity, f)
	}
}

impl<I> std::error::Error for ValidationError<I>
where
	I: Invalidity + std::error::Error + Send + Sync,
{
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.invalidity)
	}
}

/// A rule that validates values of type `T` it does not own.
pub trait Validator<T = Self> {
	type Invalidity: Invalidity;

	fn validate_value(
		&self,
		value: &T,
		context: Context<Self::Invalidity>,
	) -> Context<Self::Invalidity>;
}

/// Run [`Validator`]s inside a caller's own validation context.
pub trait ValidateContextExt {
	type Invalidity: Invalidity;

	/// Validate `value` and merge the resulting invalidities into this context.
	fn validate_using<U, T>(self, validator: &impl Validator<T, Invalidity = U>, value: &T) -> Self
	where
		U: Invalidity + Into<Self::Invalidity>;

	/// Validate `value` and merge the mapped invalidities into this context.
	fn validate_using_with<U, T>(
		self,
		validator: &impl Validator<T, Invalidity = U>,
		value: &T,
		map: impl Fn(U) -> Self::Invalidity,
	) -> Self
	where
		U: Invalidity;
}

impl<V: Invalidity> ValidateContextExt for Context<V> {
	type Invalidity = V;

	#[inline]
	fn validate_using<U, T>(self, validator: &impl Validator<T, Invalidity = U>, value: &T) -> Self
	where
		U: Invalidity + Into<Self::Invalidity>,
	{
		self.validate(&Using(validator, value))
	}

	#[inline]
	fn validate_using_with<U, T>(
		self,
		validator: &impl Validator<T, Invalidity = U>,
		value: &T,
		map: impl Fn(U) -> Self::Invalidity,
	) -> Self
	where
		U: Invalidity,
	{
		self.validate_with(&Using(validator, value), map)
	}
}

struct Using<'a, T, U>(&'a U, &'a T)
where
	U: Validator<T>;

impl<T, U> Validate for Using<'_, T, U>
where
	U: Validator<T>,
{
	type Invalidity = U::Invalidity;

	fn validate(&self) -> semval::ValidationResult<Self::Invalidity> {
		self.0.validate_value(self.1, Context::new()).into_result()
	}
}
