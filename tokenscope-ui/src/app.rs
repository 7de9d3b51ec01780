//! App Root Component
//!
//! Main application layout and global providers.

use leptos::*;

use crate::components::{Loading, Toast};
use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = expect_context::<GlobalState>();

    // Apply and persist the theme whenever it changes
    let dark = create_memo(move |_| state.dark_mode());
    create_effect(move |_| {
        let dark = dark.get();
        theme::apply_theme(dark);
        theme::save_dark_mode(dark);
    });

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-white flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            <Footer />

            <Toast />
        </div>
    }
}

/// Header with brand and theme toggle
#[component]
fn Header() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🔭"</span>
                        <span class="text-xl font-bold">"Tokenscope"</span>
                    </div>

                    <button
                        title="Toggle dark mode"
                        on:click=move |_| state.dashboard.update(|d| {
                            d.toggle_theme();
                        })
                        class="px-3 py-2 rounded-lg text-lg hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
                    >
                        {move || if state.dark_mode() { "☀" } else { "☾" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Footer showing loading state and last update time
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white dark:bg-gray-800 border-t \
                       border-gray-200 dark:border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-500 dark:text-gray-400">
                    {move || {
                        state.last_updated.get()
                            .map(|dt| format!("Updated {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "No research yet".to_string())
                    }}
                </div>

                {move || {
                    if state.loading() {
                        view! {
                            <div class="flex items-center space-x-2 text-amber-500">
                                <Loading />
                                <span>"Fetching research..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
