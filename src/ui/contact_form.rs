//! Contact form component
//!
//! Reactive shell around [`crate::core::ContactForm`]: inputs feed
//! `handle_change`, submitting runs `begin_submit`, the request is spawned
//! locally and its outcome is applied with `resolve`.

use leptos::logging::{error, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    ContactForm as FormState, ContactTransport, FetchTransport, FormField, SubmissionError,
};
use crate::ui::common::{CheckboxField, InputField, StatusMessage, TextAreaField};
use crate::ui::i18n::use_i18n_context;
use crate::ui::icon::{Icon, icons};

/// Contact form with language-aware labels and the submission lifecycle
#[component]
pub fn ContactForm() -> impl IntoView {
    let i18n = use_i18n_context();
    let form = RwSignal::new(FormState::new());

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let status = Signal::derive(move || form.with(|f| f.status.clone()));
    let acknowledged = Signal::derive(move || form.with(|f| f.acknowledged));

    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        form.update(|f| {
            f.handle_change(name, &value);
        });
    });

    let on_acknowledge = Callback::new(move |checked: bool| {
        form.update(|f| {
            f.set_acknowledged(checked);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(payload)) => {
                spawn_local(async move {
                    let outcome = FetchTransport::default().send(&payload).await;
                    let result = form.try_update(|f| f.resolve(outcome));
                    match result {
                        Some(Err(SubmissionError::Transport(e))) => {
                            error!("Contact form request failed: {e}");
                        }
                        Some(Err(e)) => warn!("Contact form rejected: {e}"),
                        _ => {}
                    }
                });
            }
            Some(Err(SubmissionError::GuardRejection)) => {
                alert(i18n.language.get_untracked().translations().captcha_alert);
            }
            Some(Err(e)) => warn!("Contact form submit ignored: {e}"),
            None => {}
        }
    };

    let value_of = move |field: FormField| {
        Signal::derive(move || form.with(|f| f.data.get(field).to_string()))
    };

    view! {
        <div>
            <div class="mb-6 sm:mb-8">
                <h1 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-2 sm:mb-3">
                    {move || i18n.t().contact_title}
                </h1>
                <p class="text-gray-600 text-base sm:text-lg">
                    {move || i18n.t().contact_subtitle}
                </p>
            </div>

            <StatusMessage status=status />

            <form on:submit=on_submit class="space-y-5 sm:space-y-6">
                <InputField
                    name=FormField::Name.as_str()
                    input_type=FormField::Name.input_type()
                    label=Signal::derive(move || i18n.t().full_name)
                    placeholder=Signal::derive(move || i18n.t().name_placeholder)
                    value=value_of(FormField::Name)
                    on_input=on_input
                    disabled=submitting
                />
                <InputField
                    name=FormField::Email.as_str()
                    input_type=FormField::Email.input_type()
                    label=Signal::derive(move || i18n.t().email)
                    placeholder=Signal::derive(move || i18n.t().email_placeholder)
                    value=value_of(FormField::Email)
                    on_input=on_input
                    disabled=submitting
                />
                <InputField
                    name=FormField::Phone.as_str()
                    input_type=FormField::Phone.input_type()
                    label=Signal::derive(move || i18n.t().phone)
                    placeholder=Signal::derive(move || i18n.t().phone_placeholder)
                    value=value_of(FormField::Phone)
                    on_input=on_input
                    disabled=submitting
                />
                <TextAreaField
                    name=FormField::Message.as_str()
                    label=Signal::derive(move || i18n.t().message)
                    placeholder=Signal::derive(move || i18n.t().message_question)
                    value=value_of(FormField::Message)
                    on_input=on_input
                    disabled=submitting
                />

                <div class="flex flex-col sm:flex-row items-stretch sm:items-center gap-4">
                    <CheckboxField
                        input_id="captcha"
                        label=Signal::derive(move || i18n.t().not_robot)
                        checked=acknowledged
                        on_change=on_acknowledge
                        disabled=submitting
                    />

                    <button
                        type="submit"
                        class="w-full sm:flex-1 bg-blue-500 hover:bg-blue-600 text-white font-bold py-3 sm:py-4 px-6 sm:px-8
                               rounded-lg shadow-lg transition-all duration-300 transform hover:scale-[1.02] text-base sm:text-lg
                               disabled:bg-gray-400 disabled:cursor-not-allowed disabled:transform-none"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            if submitting.get() {
                                view! {
                                    <span class="flex items-center justify-center">
                                        <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                        {i18n.t().sending}
                                    </span>
                                }.into_any()
                            } else {
                                view! { <span class="block">{i18n.t().send_button}</span> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Blocking browser alert; there is no alert on the server
fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        warn!("alert: {message}");
    }
}
