#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the backed enum workspace.
//! This crate provides the declaration macro behind named enumerations and the attribute
//! macro that wires error enums into the workspace error conventions.
//!
//! ## Usage
//! Consumers normally reach these macros through the `backed-enum` crate, which re-exports
//! them. Depend on this crate directly only when building error types outside of it:
//! ```toml
//! [dependencies]
//! backed-enum-derive = { path = "../infra/derive" }
//! ```
//!
//! Examples below are `ignore`d to avoid compiling in this crate; the `backed-enum` crate
//! exercises them in its own tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Declares a named enumeration with text or integer backing values.
///
/// The macro emits a zero-sized handle type that owns the declaration:
///
/// * One associated constant per enumerant holding its backing value.
/// * `ENTRIES`, the `(name, value)` table in declaration order.
/// * `enumeration()`, returning a `&'static backed_enum::BackedEnum<T>` built lazily on first use.
/// * `Deref<Target = BackedEnum<T>>`, so the handle answers queries directly.
///
/// # Syntax
///
/// `[attrs] [vis] Name: Type { NAME = literal, ... }` where `Type` is `&'static str` or an
/// integer primitive. The body may be empty.
///
/// # Errors
///
/// Emits a compile-time error for duplicate enumerant names, for values that are not
/// string or integer literals, and for bodies mixing text and integer literals. The names
/// `ENTRIES` and `enumeration` are taken by generated items and rejected as enumerants.
///
/// # Example
///
/// ```rust,ignore
/// use backed_enum::backed_enum;
///
/// backed_enum! {
///     /// Priority levels exchanged with the scheduler.
///     pub Priority: u8 {
///         LOW = 1,
///         NORMAL = 5,
///         HIGH = 9,
///     }
/// }
///
/// assert_eq!(Priority::HIGH, 9);
/// assert!(Priority.validate(&5));
/// assert!(Priority.parse(&7).is_err());
/// ```
#[proc_macro]
pub fn backed_enum(input: TokenStream) -> TokenStream {
    macros::enumeration::expand_backed_enum(input.into()).into()
}

/// Attribute macro for declaring error enums.
///
/// Turns a plain enum into an error type that follows the workspace conventions.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait adding `.context()` to
///   `Result<T, ErrorName>`.
/// * **Source Conversions**: Variants holding a `source` field (or a field marked
///   `#[source]`/`#[from]`) get a `From<Source>` impl and `.context()` on `Result<T, Source>`.
/// * **Formatting**: Provides a module-level `format_context` helper for `#[error]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use backed_enum::enum_error;
/// use std::borrow::Cow;
///
/// #[enum_error]
/// pub enum CodecError {
///     #[error("Unknown code{}: {code}", format_context(.context))]
///     UnknownCode { code: u16, context: Option<Cow<'static, str>> },
///
///     #[error("Malformed code{}: {source}", format_context(.context))]
///     Malformed { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(raw: &str) -> Result<u16, CodecError> {
///     raw.parse::<u16>().context("reading status code")
/// }
/// ```
#[proc_macro_attribute]
pub fn enum_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_enum_error(input).into()
}
