pub mod brand;
pub mod common;
pub mod contact_form;
pub mod i18n;
pub mod icon;
pub mod language_selector;
pub mod pages;

pub use brand::BrandPanel;
pub use contact_form::ContactForm;
pub use i18n::{I18nContext, provide_i18n_context, use_i18n_context};
pub use icon::{Icon, icons};
pub use language_selector::LanguageSelector;
