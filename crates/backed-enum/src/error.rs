//! # Enumeration Errors
//!
//! This module defines the [`EnumError`] enum returned by parsing and checked construction.

use crate::value::RawValue;
use std::borrow::Cow;

/// Failures reported by [`BackedEnum`](crate::BackedEnum) and its builder.
#[backed_enum_derive::enum_error]
#[derive(Clone, PartialEq, Eq)]
pub enum EnumError {
    /// The candidate equals none of the enumeration's backing values.
    ///
    /// Only [`BackedEnum::parse`](crate::BackedEnum::parse) raises this.
    #[error("Invalid value{}: {value} is not a backing value of this enumeration", format_context(.context))]
    InvalidValue { value: RawValue, context: Option<Cow<'static, str>> },

    /// A symbolic name is empty or not an identifier.
    #[error("Invalid name{}: {name:?} is not an identifier", format_context(.context))]
    InvalidName { name: String, context: Option<Cow<'static, str>> },

    /// The same symbolic name was supplied twice to the builder.
    #[error("Duplicate name{}: {name}", format_context(.context))]
    DuplicateName { name: String, context: Option<Cow<'static, str>> },
}

impl EnumError {
    #[must_use]
    pub const fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Returns the rejected candidate when this is [`EnumError::InvalidValue`].
    #[must_use]
    pub const fn invalid_value(&self) -> Option<&RawValue> {
        match self {
            Self::InvalidValue { value, .. } => Some(value),
            _ => None,
        }
    }
}
