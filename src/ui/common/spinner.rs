use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerStyle {
    /// Rotating circle
    Circle,
    /// Three bouncing dots, used as a typing indicator
    Dots,
}

/// Small spinner for buttons and message bubbles
#[component]
pub fn InlineSpinner(
    #[prop(default = SpinnerStyle::Circle)]
    style: SpinnerStyle,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let inner = match style {
        SpinnerStyle::Circle => view! {
            <span class="inline-block w-4 h-4 border-2 border-current border-t-transparent rounded-full animate-spin"></span>
        }
        .into_any(),
        SpinnerStyle::Dots => view! {
            <span class="inline-flex gap-1">
                <span class="w-1.5 h-1.5 rounded-full bg-current animate-bounce"></span>
                <span class="w-1.5 h-1.5 rounded-full bg-current animate-bounce [animation-delay:150ms]"></span>
                <span class="w-1.5 h-1.5 rounded-full bg-current animate-bounce [animation-delay:300ms]"></span>
            </span>
        }
        .into_any(),
    };

    view! {
        <span class=format!("inline-flex items-center {}", class) role="status" aria-live="polite">
            {inner}
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}
