//! Banner showing the outcome of the last submission

use leptos::prelude::*;

use crate::core::SubmissionStatus;
use crate::ui::i18n::use_i18n_context;
use crate::ui::icon::{Icon, icons};

/// Success or error banner for a [`SubmissionStatus`]; renders nothing for `None`.
///
/// The text is resolved against the active language on every render.
#[component]
pub fn StatusMessage(
    #[prop(into)]
    status: Signal<SubmissionStatus>,
) -> impl IntoView {
    let i18n = use_i18n_context();

    move || {
        let status = status.get();
        status.message(i18n.t()).map(|text| {
            if status.is_success() {
                view! {
                    <div class="mb-6 p-4 rounded-lg bg-green-50 border-2 border-green-200 text-green-800" role="status">
                        <p class="font-semibold flex items-center gap-2">
                            <Icon name=icons::CHECK class="w-5 h-5"/>
                            <span>{text}</span>
                        </p>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="mb-6 p-4 rounded-lg bg-red-50 border-2 border-red-200 text-red-800" role="alert">
                        <p class="font-semibold flex items-center gap-2">
                            <Icon name=icons::ALERT_CIRCLE class="w-5 h-5"/>
                            <span>{text}</span>
                        </p>
                    </div>
                }
                .into_any()
            }
        })
    }
}
