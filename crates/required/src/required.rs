use crate::{EmptinessPolicy, RequiredInvalidity, ValidationError, Validator, Verdict};
use presence_value::Value;
use semval::context::Context;
use tracing::{Level, instrument};

#[cfg(test)]
mod tests;

/// Ensures a value is "present".
///
/// Null is never present. Booleans, numbers and records are always present,
/// including `false`, `0` and `0.0`. Strings must be non-empty after trimming
/// whitespace, and arrays, slices and maps must hold at least one element,
/// unless the [`EmptinessPolicy`] allows the empty case for that kind. Values
/// of an unknown kind are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required {
	policy: EmptinessPolicy,
}

impl Required {
	/// Rule that rejects every empty value.
	#[inline]
	pub const fn new() -> Self {
		Self::with_policy(EmptinessPolicy::new())
	}

	#[inline]
	pub const fn with_policy(policy: EmptinessPolicy) -> Self {
		Self { policy }
	}

	#[inline]
	pub const fn policy(&self) -> &EmptinessPolicy {
		&self.policy
	}

	/// Why `value` is not present, or `None` if it is.
	pub fn invalidity(&self, value: &Value) -> Option<RequiredInvalidity> {
		let empty = match value {
			Value::Null => return Some(RequiredInvalidity::Null),
			Value::Bool(_)
			| Value::Int(_)
			| Value::UInt(_)
			| Value::Float(_)
			| Value::Record(_) => return None,
			Value::String(s) => s.trim().is_empty(),
			Value::Array(items) | Value::Slice(items) => items.is_empty(),
			Value::Map(map) => map.is_empty(),
			Value::Opaque(opaque) => {
				return Some(RequiredInvalidity::UnknownKind {
					type_name: opaque.type_name(),
				});
			}
		};

		let kind = value.kind();
		if !empty || self.policy.allows_empty(kind) {
			return None;
		}

		RequiredInvalidity::empty(kind, value.len().unwrap_or(0))
	}

	pub fn is_valid(&self, value: &Value) -> Verdict {
		Verdict::from(self.checked(value))
	}

	pub fn check(&self, value: &Value) -> Result<(), ValidationError<RequiredInvalidity>> {
		match self.checked(value) {
			None => Ok(()),
			Some(invalidity) => Err(ValidationError::new(invalidity)),
		}
	}

	#[instrument(
		level = Level::TRACE,
		name = "Required",
		skip_all,
		fields(value.kind = %value.kind())
	)]
	fn checked(&self, value: &Value) -> Option<RequiredInvalidity> {
		let invalidity = self.invalidity(value);
		if let Some(invalidity) = &invalidity {
			tracing::debug!(
				value.len = ?value.len(),
				%invalidity,
				"value is not present"
			);
		}

		invalidity
	}
}

impl Validator<Value> for Required {
	type Invalidity = RequiredInvalidity;

	fn validate_value(
		&self,
		value: &Value,
		context: Context<Self::Invalidity>,
	) -> Context<Self::Invalidity> {
		match self.checked(value) {
			Some(invalidity) => context.invalidate(invalidity),
			None => context,
		}
	}
}

/// Check `value` against the [`Required`] rule under `policy`.
#[inline]
pub fn is_valid(value: &Value, policy: &EmptinessPolicy) -> Verdict {
	Required::with_policy(*policy).is_valid(value)
}
