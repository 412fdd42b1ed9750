use leptos::prelude::*;

use crate::core::LanguageCode;
use crate::ui::i18n::use_i18n_context;

/// Pill buttons switching the page language
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let i18n = use_i18n_context();

    view! {
        <div class="flex justify-end mb-6 -mt-2 -mr-2">
            <div class="flex gap-1.5 bg-gray-100 rounded-full p-1.5" role="group" aria-label="Language">
                {LanguageCode::all()
                    .iter()
                    .copied()
                    .map(|lang| {
                        let active = move || i18n.language.get() == lang;
                        view! {
                            <button
                                type="button"
                                class="px-3.5 py-1.5 rounded-full font-medium text-sm transition-all duration-200"
                                class=("bg-white", active)
                                class=("text-blue-600", active)
                                class=("shadow-md", active)
                                class=("text-gray-600", move || !active())
                                class=("hover:text-gray-900", move || !active())
                                aria-pressed=move || active().to_string()
                                on:click=move |_| i18n.set_language(lang)
                            >
                                {lang.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
