//! Application pages module
//!
//! - Contact landing page (home)
//! - Not found page

mod contact;
mod not_found;

pub use contact::{ContactPage, tagline_lines};
pub use not_found::NotFoundPage;
