use leptos::prelude::*;

/// Labelled text input bound to a value signal
#[component]
pub fn InputField(
    /// `id` and `name` attribute
    name: &'static str,
    /// Field label text
    #[prop(into)]
    label: Signal<&'static str>,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<&'static str>,
    /// Whether the browser requires a value before submitting
    #[prop(default = true)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback, receives the field name and raw value
    on_input: Callback<(&'static str, String)>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-semibold text-gray-700 mb-2">
                {move || label.get()}
            </label>
            <input
                type=input_type
                id=name
                name=name
                required=required
                class="w-full px-4 py-3 border-2 border-gray-200 rounded-lg focus:border-blue-500 focus:ring-2 focus:ring-blue-200
                       transition-all outline-none text-gray-900 text-base disabled:bg-gray-100 disabled:cursor-not-allowed"
                placeholder=move || placeholder.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled text area bound to a value signal
#[component]
pub fn TextAreaField(
    /// `id` and `name` attribute
    name: &'static str,
    /// Field label text
    #[prop(into)]
    label: Signal<&'static str>,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<&'static str>,
    #[prop(default = true)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback, receives the field name and raw value
    on_input: Callback<(&'static str, String)>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-semibold text-gray-700 mb-2">
                {move || label.get()}
            </label>
            <textarea
                id=name
                name=name
                required=required
                class="w-full px-4 py-3 border-2 border-gray-200 rounded-lg focus:border-blue-500 focus:ring-2 focus:ring-blue-200
                       transition-all outline-none resize-none text-gray-900 text-base disabled:bg-gray-100 disabled:cursor-not-allowed"
                placeholder=move || placeholder.get()
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Checkbox with a clickable label
#[component]
pub fn CheckboxField(
    /// `id` attribute of the checkbox
    input_id: &'static str,
    /// Label text
    #[prop(into)]
    label: Signal<&'static str>,
    /// Current checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-start space-x-3 bg-gray-50 p-3 sm:p-4 rounded-lg border-2 border-gray-200 flex-shrink-0">
            <input
                type="checkbox"
                id=input_id
                class="w-5 h-5 text-blue-500 border-gray-300 rounded focus:ring-2 focus:ring-blue-500 disabled:cursor-not-allowed"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                disabled=move || disabled.get()
            />
            <label for=input_id class="text-sm text-gray-700 cursor-pointer select-none">
                {move || label.get()}
            </label>
        </div>
    }
}
