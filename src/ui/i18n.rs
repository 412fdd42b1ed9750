//! Language context for the page
//!
//! Provides:
//! - I18nContext holding the active LanguageCode
//! - Access to the active translation bundle
//! - Keeps the document `lang` attribute in sync in the browser

use leptos::prelude::*;

use crate::core::{LanguageCode, Translations};

/// Language context shared by every component of the page
#[derive(Clone, Copy)]
pub struct I18nContext {
    /// Current display language
    pub language: RwSignal<LanguageCode>,
}

impl I18nContext {
    pub fn set_language(&self, language: LanguageCode) {
        self.language.set(language);
    }

    /// Active translation bundle (tracked)
    pub fn t(&self) -> &'static Translations {
        self.language.get().translations()
    }
}

/// Provide the language context, starting in Portuguese
pub fn provide_i18n_context() -> I18nContext {
    let ctx = I18nContext {
        language: RwSignal::new(LanguageCode::default()),
    };

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let lang = ctx.language.get().html_lang();
            if let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = html.set_attribute("lang", lang);
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Use the language context from anywhere in the component tree
pub fn use_i18n_context() -> I18nContext {
    expect_context::<I18nContext>()
}
