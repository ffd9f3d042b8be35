//! Immutable enumerations of named constants bound to text or integer backing values.
//!
//! A [`BackedEnum`] is a closed set of enumerants, each a symbolic name paired with a
//! backing value used on the wire (a status string, a numeric code). The set is fixed at
//! construction and answers four questions about it:
//!
//! - [`BackedEnum::structure`]: a copy of the full name to value mapping.
//! - [`BackedEnum::values`]: every backing value, once per enumerant.
//! - [`BackedEnum::validate`]: whether a value belongs to the set.
//! - [`BackedEnum::parse`]: the same check, failing with [`EnumError::InvalidValue`].
//!
//! ## Value Categories
//!
//! Backing values are either text or integers, never a mix. The sealed [`Primitive`]
//! trait admits exactly `String`, `&'static str` and the integer primitives, so one
//! enumeration always holds values of one category.
//!
//! ## Immutability
//!
//! No operation adds, removes or changes enumerants, and every collection returned is an
//! owned copy. An enumeration can be shared across threads and read without locking.
//!
//! ## Examples
//!
//! ### Declared enumerations
//! ```rust
//! use backed_enum::prelude::*;
//!
//! backed_enum! {
//!     /// HTTP-like outcome codes.
//!     pub Outcome: u16 {
//!         OK = 200,
//!         NOT_FOUND = 404,
//!         TEAPOT = 418,
//!     }
//! }
//!
//! # fn main() -> Result<(), EnumError> {
//! assert_eq!(Outcome::TEAPOT, 418);
//! assert!(Outcome.validate(&404));
//!
//! let code = Outcome.parse(&200)?;
//! assert_eq!(*code, Outcome::OK);
//!
//! let err = Outcome.parse(&500).context("reading upstream response").unwrap_err();
//! assert!(err.is_invalid_value());
//! # Ok(())
//! # }
//! ```
//!
//! ### Runtime enumerations
//! ```rust
//! use backed_enum::{BackedEnum, EnumError};
//!
//! # fn main() -> Result<(), EnumError> {
//! let regions = BackedEnum::builder()
//!     .label("regions")
//!     .entry("EU", "eu-west".to_owned())
//!     .entry("US", "us-east".to_owned())
//!     .build()?;
//!
//! assert!(regions.validate("eu-west"));
//! assert_eq!(regions.get("US").map(String::as_str), Some("us-east"));
//! # Ok(())
//! # }
//! ```

extern crate self as backed_enum;

mod builder;
mod enumeration;
mod error;
mod load_status;
mod value;

pub use backed_enum_derive::{backed_enum, enum_error};
pub use builder::BackedEnumBuilder;
pub use enumeration::{BackedEnum, Structure};
pub use error::{EnumError, EnumErrorExt};
pub use load_status::LoadStatus;
pub use value::{BackingValue, Primitive, RawValue, ValueKind};

pub mod prelude {
    pub use crate::enumeration::BackedEnum;
    pub use crate::error::{EnumError, EnumErrorExt};
    pub use crate::value::{RawValue, ValueKind};
    pub use backed_enum_derive::backed_enum;
}
