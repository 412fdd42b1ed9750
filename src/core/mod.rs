//! Contact form domain: field values, phone formatting, translations and the
//! submission lifecycle. Nothing in here depends on the reactive UI.

#[cfg(feature = "ssr")]
pub mod config;
mod form;
mod i18n;
pub mod phone;
mod submission;
#[cfg(test)]
mod tests;

pub use form::*;
pub use i18n::*;
pub use phone::{digits_only, format_phone};
pub use submission::*;
