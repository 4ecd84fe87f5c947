use crate::{RequiredInvalidity, ValidationError};

/// Outcome of checking one value against the [`Required`](crate::Required) rule.
///
/// A verdict is either valid, or invalid with exactly one diagnostic.
#[derive(Debug)]
#[must_use]
pub struct Verdict {
	diagnostic: Option<ValidationError<RequiredInvalidity>>,
}

impl Verdict {
	#[inline]
	pub(crate) const fn valid() -> Self {
		Self { diagnostic: None }
	}

	#[inline]
	pub(crate) fn invalid(invalidity: RequiredInvalidity) -> Self {
		Self {
			diagnostic: Some(ValidationError::new(invalidity)),
		}
	}

	#[inline]
	pub const fn is_valid(&self) -> bool {
		self.diagnostic.is_none()
	}

	#[inline]
	pub fn diagnostic(&self) -> Option<&ValidationError<RequiredInvalidity>> {
		self.diagnostic.as_ref()
	}

	#[inline]
	pub fn invalidity(&self) -> Option<RequiredInvalidity> {
		self.diagnostic.as_ref().map(|d| *d.invalidity())
	}

	/// All diagnostics of this verdict: one when invalid, none when valid.
	pub fn diagnostics(&self) -> impl ExactSizeIterator<Item = &ValidationError<RequiredInvalidity>> {
		self.diagnostic.iter()
	}

	pub fn into_result(self) -> Result<(), ValidationError<RequiredInvalidity>> {
		match self.diagnostic {
			None => Ok(()),
			Some(diagnostic) => Err(diagnostic),
		}
	}
}

impl From<Option<RequiredInvalidity>> for Verdict {
	fn from(invalidity: Option<RequiredInvalidity>) -> Self {
		match invalidity {
			None => Verdict::valid(),
			Some(invalidity) => Verdict::invalid(invalidity),
		}
	}
}
