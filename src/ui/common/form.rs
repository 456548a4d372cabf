use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline hint shown under a control when its value fails validation
#[component]
fn FieldHint(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <div class="flex items-center gap-1 text-sm text-red-600" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

#[component]
fn FieldLabel(id: &'static str, label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label for=id class="block text-sm font-medium text-slate-700">
            {label}
            {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
        </label>
    }
}

/// Single-line input with label and validation hint
#[component]
pub fn FormField(
    /// Element id, also used as the input name
    id: &'static str,
    label: &'static str,
    /// Shows a red asterisk
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Fired when the control loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel id=id label=label required=required />
            <input
                id=id
                name=id
                type=input_type
                class="lead-input"
                class:border-red-500=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                aria-invalid=move || error.and_then(|e| e.get()).is_some().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            <FieldHint error=error />
        </div>
    }
}

/// Date picker bound to a `YYYY-MM-DD` string
#[component]
pub fn DateField(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Earliest selectable date, `YYYY-MM-DD`
    #[prop(into)]
    min: Signal<String>,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel id=id label=label required=required />
            <input
                id=id
                name=id
                type="date"
                class="lead-input"
                class:border-red-500=move || error.and_then(|e| e.get()).is_some()
                min=move || min.get()
                aria-invalid=move || error.and_then(|e| e.get()).is_some().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            <FieldHint error=error />
        </div>
    }
}

/// Multi-line text field
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel id=id label=label required=required />
            <textarea
                id=id
                name=id
                class="lead-input resize-none"
                class:border-red-500=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldHint error=error />
        </div>
    }
}
