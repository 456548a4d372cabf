//! Floating help widget with the scripted moving assistant

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos::web_sys;

use crate::core::chat::{QUICK_REPLIES, REPLY_DELAY_MS};
use crate::core::{ChatMessage, ChatRole, ChatSession};
use crate::ui::common::{InlineSpinner, SpinnerStyle};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = RwSignal::new(ChatSession::new(Utc::now()));
    let input = RwSignal::new(String::new());
    // Replies scheduled but not yet delivered
    let pending = RwSignal::new(0u32);

    let is_open = move || chat.with(|c| c.is_open());
    let unread = move || chat.with(|c| c.unread());

    let send = move || {
        let text = input.get_untracked();
        let sent = chat.try_update(|c| c.send(&text, Utc::now())).flatten();
        if sent.is_none() {
            return;
        }
        input.set(String::new());
        pending.update(|n| *n += 1);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(REPLY_DELAY_MS).await;
                chat.update(|c| {
                    c.reply(js_sys::Math::random(), Utc::now());
                });
                pending.update(|n| *n = n.saturating_sub(1));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = REPLY_DELAY_MS;
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-[1000] flex flex-col items-end gap-4">
            <Show when=is_open>
                <div
                    class="w-[calc(100vw-3rem)] max-w-sm h-[32rem] flex flex-col rounded-2xl bg-white shadow-2xl overflow-hidden landing-fade-in-up"
                    role="dialog"
                    aria-label="Moving assistant"
                >
                    // Header
                    <div class="flex items-center gap-3 px-4 py-3 bg-indigo-900 text-white">
                        <div class="w-10 h-10 rounded-full bg-orange-500 flex items-center justify-center">
                            <Icon name=icons::MESSAGE_CIRCLE class="w-5 h-5 invert" />
                        </div>
                        <div class="flex-1">
                            <p class="font-semibold">"Moving Assistant"</p>
                            <p class="text-xs text-indigo-200">"Typically replies instantly"</p>
                        </div>
                        <button
                            class="p-1 rounded hover:bg-white/10"
                            on:click=move |_| chat.update(ChatSession::close)
                            aria-label="Close chat"
                        >
                            <Icon name=icons::X class="w-5 h-5 invert" />
                        </button>
                    </div>

                    // Transcript
                    <div class="flex-1 overflow-y-auto p-4 space-y-3 bg-slate-50">
                        <For
                            each=move || chat.with(|c| c.messages().to_vec())
                            key=|message| message.id
                            children=move |message| view! { <MessageBubble message=message /> }
                        />
                        <Show when=move || { pending.get() > 0 }>
                            <div class="flex justify-start">
                                <div class="px-4 py-3 rounded-2xl rounded-bl-md bg-white border border-slate-200 text-slate-400">
                                    <InlineSpinner style=SpinnerStyle::Dots />
                                </div>
                            </div>
                        </Show>
                    </div>

                    // Quick replies
                    <div class="px-4 pt-3 border-t border-slate-100">
                        <p class="text-xs text-slate-500 mb-2">"Quick replies:"</p>
                        <div class="flex flex-wrap gap-2">
                            {QUICK_REPLIES.into_iter().map(|reply| view! {
                                <button
                                    class="px-3 py-1 rounded-full border border-indigo-200 text-xs text-indigo-900 hover:bg-indigo-50 transition-colors"
                                    on:click=move |_| input.set(reply.to_string())
                                >
                                    {reply}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>

                    // Input
                    <div class="flex items-end gap-2 p-4">
                        <textarea
                            class="flex-1 resize-none rounded-xl border border-slate-200 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            rows=1
                            placeholder="Type your message..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="p-2.5 rounded-full bg-indigo-900 text-white disabled:opacity-40 transition-opacity"
                            disabled=move || input.with(|text| text.trim().is_empty())
                            on:click=move |_| send()
                            aria-label="Send message"
                        >
                            <Icon name=icons::SEND class="w-5 h-5 invert" />
                        </button>
                    </div>
                </div>
            </Show>

            // Toggle button
            <button
                class="relative w-14 h-14 rounded-full bg-orange-500 shadow-xl flex items-center justify-center hover:scale-105 transition-transform"
                on:click=move |_| chat.update(ChatSession::toggle)
                aria-label=move || if is_open() { "Close chat" } else { "Open chat" }
                aria-expanded=move || is_open().to_string()
            >
                {move || if is_open() {
                    view! { <Icon name=icons::X class="w-6 h-6 invert" /> }.into_any()
                } else {
                    view! { <Icon name=icons::MESSAGE_CIRCLE class="w-6 h-6 invert" /> }.into_any()
                }}
                <Show when=move || { unread() > 0 }>
                    <span class="absolute -top-1 -right-1 min-w-5 h-5 px-1 rounded-full bg-red-600 text-white text-xs font-bold flex items-center justify-center">
                        {unread}
                    </span>
                </Show>
            </button>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let from_user = message.role == ChatRole::User;
    let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();

    view! {
        <div class=if from_user { "flex justify-end" } else { "flex justify-start" }>
            <div class=if from_user {
                "max-w-[80%] px-4 py-2 rounded-2xl rounded-br-md bg-indigo-900 text-white"
            } else {
                "max-w-[80%] px-4 py-2 rounded-2xl rounded-bl-md bg-white border border-slate-200 text-slate-800"
            }>
                <p class="text-sm whitespace-pre-wrap">{message.text}</p>
                <p class="text-[10px] opacity-60 mt-1 text-right">{time}</p>
            </div>
        </div>
    }
}
