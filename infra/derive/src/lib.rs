#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the intake workspace.
//!
//! Only one macro lives here today: [`macro@mymove_error`], the attribute every crate uses to
//! declare its error enum.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain error enums.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug` and `thiserror::Error` unless already present.
/// * **Context**: a companion `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>`
///   and to `Result<T, Source>` for every variant wrapping a source error.
/// * **Conversions**: `From<Source>` for each variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`), and `From<&'static str>`/`From<String>` when an `Internal`
///   variant exists.
/// * **Kind**: `const fn kind(&self) -> &'static str` returning the variant name. Used as a
///   stable log field.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use mymove_derive::mymove_error;
/// use std::borrow::Cow;
///
/// #[mymove_error]
/// pub enum LookupError {
///     #[error("Decode error{}: {source}", format_context(.context))]
///     Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<Payload, LookupError> {
///     serde_json::from_str(raw).context("Decoding duty location")
/// }
/// ```
#[proc_macro_attribute]
pub fn mymove_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
