//! Toast Notification Component
//!
//! Shows the current submission notice.

use leptos::*;
use tokenscope_core::NoticeLevel;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.notice.get().map(|(_, notice)| view! {
                    <ToastMessage message=notice.to_string() level=notice.level() />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    level: NoticeLevel,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (icon, bg_class) = toast_style(level);

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
            <button
                class="ml-2 text-white/70 hover:text-white"
                on:click=move |_| state.clear_notice()
            >
                "×"
            </button>
        </div>
    }
}

fn toast_style(level: NoticeLevel) -> (&'static str, &'static str) {
    match level {
        NoticeLevel::Info => ("ℹ", "bg-blue-600"),
        NoticeLevel::Warning => ("⚠", "bg-yellow-600"),
        NoticeLevel::Error => ("✕", "bg-red-600"),
    }
}
