//! Contact landing page
//!
//! Two columns over a background photo: branding on the left, the localized
//! contact form on the right with the company tagline underneath.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{EN, LanguageCode, PT};
use crate::ui::brand::BrandPanel;
use crate::ui::contact_form::ContactForm;
use crate::ui::i18n::use_i18n_context;
use crate::ui::language_selector::LanguageSelector;

const BACKGROUND_STYLE: &str = "background-image: url(/images/background.png)";

/// Tagline shown under the form: the active language first, then the
/// Portuguese/English counterpart.
pub fn tagline_lines(lang: LanguageCode) -> (&'static str, &'static str) {
    let primary = lang.translations().complete_operator;
    let secondary = match lang {
        LanguageCode::Pt => EN.complete_operator,
        _ => PT.complete_operator,
    };
    (primary, secondary)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let i18n = use_i18n_context();

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-cover bg-center bg-no-repeat" style=BACKGROUND_STYLE>
            <div class="min-h-screen bg-black/40">
                <div class="container mx-auto px-4 py-6 sm:py-8">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 lg:gap-12 max-w-7xl mx-auto">
                        <BrandPanel />

                        <div class="bg-white rounded-2xl shadow-xl p-6 sm:p-8 flex flex-col">
                            <LanguageSelector />
                            <ContactForm />

                            <div class="mt-6 sm:mt-8 pt-6 sm:pt-8 border-t-2 border-gray-100">
                                <div class="text-center space-y-2">
                                    <p class="text-base sm:text-lg font-semibold text-gray-800">
                                        {move || tagline_lines(i18n.language.get()).0}
                                    </p>
                                    <p class="text-sm sm:text-base text-gray-600 italic">
                                        {move || tagline_lines(i18n.language.get()).1}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="BRCLOG - Fale Conosco" />
        <Meta name="description" content="Entre em contato com a BRCLOG, um dos operadores logísticos mais completos do país." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="BRCLOG - Fale Conosco" />
        <Meta property="og:image" content="/logo-brc.png" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagline_in_portuguese_pairs_with_english() {
        assert_eq!(
            tagline_lines(LanguageCode::Pt),
            (PT.complete_operator, EN.complete_operator)
        );
    }

    #[test]
    fn test_tagline_in_other_languages_pairs_with_portuguese() {
        for lang in [LanguageCode::En, LanguageCode::De, LanguageCode::Zh] {
            let (primary, secondary) = tagline_lines(lang);
            assert_eq!(primary, lang.translations().complete_operator);
            assert_eq!(secondary, PT.complete_operator);
        }
    }
}
