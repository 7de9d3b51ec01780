//! Token Inputs Component
//!
//! Editable list of token identifier fields with add, remove and submit.

use leptos::*;

use crate::components::Loading;
use crate::state::global::GlobalState;

/// Token input form
#[component]
pub fn TokenInputs(
    /// Called when the form is submitted
    #[prop(into)]
    on_submit: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let count = create_memo(move |_| state.dashboard.with(|d| d.tokens.count()));
    let can_remove = create_memo(move |_| state.dashboard.with(|d| d.tokens.can_remove()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form on:submit=submit class="space-y-3">
            <For
                each=move || 0..count.get()
                key=|index| *index
                children=move |index| view! {
                    <TokenField index=index can_remove=can_remove />
                }
            />

            <div class="flex flex-wrap gap-3 pt-2">
                <button
                    type="button"
                    on:click=move |_| state.dashboard.update(|d| d.add_token())
                    class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-200 text-gray-800 \
                           hover:bg-gray-300 dark:bg-gray-700 dark:text-gray-200 dark:hover:bg-gray-600 \
                           transition-colors"
                >
                    "+ Add token"
                </button>

                <button
                    type="submit"
                    class="px-6 py-2 rounded-lg text-sm font-semibold bg-amber-500 text-white \
                           hover:bg-amber-600 transition-colors flex items-center space-x-2"
                >
                    {move || if state.loading() {
                        view! {
                            <Loading />
                            <span>"Researching..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Research"</span> }.into_view()
                    }}
                </button>
            </div>
        </form>
    }
}

/// One token identifier field
#[component]
fn TokenField(
    index: usize,
    can_remove: Memo<bool>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let value = move || {
        state
            .dashboard
            .with(|d| d.tokens.entries().get(index).cloned().unwrap_or_default())
    };

    view! {
        <div class="flex items-center space-x-2">
            <input
                type="text"
                placeholder="Token symbol, e.g. btc"
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.dashboard.update(|d| {
                        d.edit_token(index, text);
                    });
                }
                class="flex-1 px-4 py-2 rounded-lg border border-gray-300 bg-white text-gray-900 \
                       dark:border-gray-600 dark:bg-gray-800 dark:text-white \
                       focus:outline-none focus:ring-2 focus:ring-amber-500"
            />

            <button
                type="button"
                title="Remove token"
                disabled=move || !can_remove.get()
                on:click=move |_| state.dashboard.update(|d| {
                    d.remove_token(index);
                })
                class="w-10 h-10 rounded-lg text-gray-500 hover:text-red-500 hover:bg-gray-100 \
                       dark:hover:bg-gray-700 disabled:opacity-30 disabled:cursor-not-allowed"
            >
                "✕"
            </button>
        </div>
    }
}
