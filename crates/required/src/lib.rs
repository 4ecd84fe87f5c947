#![cfg_attr(doc_cfg, feature(doc_cfg))]

//! The "Required" rule: is a dynamically typed value present?
//!
//! ```
//! use presence_required::{EmptinessPolicy, Required, RequiredInvalidity};
//! use presence_value::Value;
//!
//! let required = Required::new();
//! assert!(required.is_valid(&Value::from(0)).is_valid());
//! assert_eq!(
//! 	required.is_valid(&Value::from("   ")).invalidity(),
//! 	Some(RequiredInvalidity::EmptyString { len: 3 }),
//! );
//!
//! let lenient = Required::with_policy(EmptinessPolicy::new().allow_empty_string(true));
//! assert!(lenient.is_valid(&Value::from("   ")).is_valid());
//! ```

pub(crate) mod invalidity;
pub(crate) mod policy;
pub(crate) mod required;
pub(crate) mod validation;
pub(crate) mod verdict;

#[doc(inline)]
pub use invalidity::RequiredInvalidity;
#[doc(inline)]
pub use policy::EmptinessPolicy;
#[doc(inline)]
pub use required::{Required, is_valid};
#[doc(inline)]
pub use validation::{ValidateContextExt, ValidationError, Validator};
#[doc(inline)]
pub use verdict::Verdict;

#[doc(no_inline)]
pub use presence_value::{Kind, Value};

static_assertions::assert_impl_all!(Required: Send, Sync, Copy);
static_assertions::assert_impl_all!(EmptinessPolicy: Send, Sync, Copy);
static_assertions::assert_impl_all!(Value: Send, Sync);
static_assertions::assert_impl_all!(Verdict: Send, Sync);
