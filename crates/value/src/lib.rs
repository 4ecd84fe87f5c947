#![cfg_attr(doc_cfg, feature(doc_cfg))]

//! A small dynamically typed value model.
//!
//! [`Value`] is what presence validation operates on: the shape of a value is
//! only known at runtime, so every category a caller may hand over is a
//! variant of one closed enum. Values of a category that has no dedicated
//! variant are wrapped in an [`Opaque`] and report [`Kind::Unknown`].

mod kind;
mod mapping;
mod opaque;
mod record;
mod value;

#[cfg(feature = "de")]
mod de;
#[cfg(feature = "json")]
mod json;

#[doc(inline)]
pub use kind::Kind;
#[doc(inline)]
pub use mapping::Mapping;
#[doc(inline)]
pub use opaque::Opaque;
#[doc(inline)]
pub use record::{Field, Record};
#[doc(inline)]
pub use value::Value;
