//! Reusable form and feedback components of the contact page

pub mod form;
pub mod message;

pub use form::{CheckboxField, InputField, TextAreaField};
pub use message::StatusMessage;
