//! Dashboard Page
//!
//! Token inputs, then cards, price chart and comparison table for the
//! current result set.

use chrono::Local;
use leptos::*;
use tokenscope_core::{fetch_all, Completion};

use crate::api;
use crate::components::{CardSkeleton, ComparisonTable, PriceChart, TokenCard, TokenInputs};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let has_results = create_memo(move |_| state.dashboard.with(|d| !d.results.is_empty()));
    let skeletons = create_memo(move |_| state.dashboard.with(|d| d.tokens.tokens().len().max(1)));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Token Research"</h1>
                <p class="text-gray-500 dark:text-gray-400 mt-1">
                    "Compare price, market data and AI research across tokens"
                </p>
            </div>

            <section class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm">
                <TokenInputs on_submit=move |_| submit(state) />
            </section>

            {move || {
                if state.loading() {
                    view! { <CardSkeleton count=skeletons.get() /> }.into_view()
                } else if has_results.get() {
                    view! { <Results /> }.into_view()
                } else {
                    view! {
                        <p class="text-center text-gray-500 dark:text-gray-400 py-12">
                            "Enter one or more tokens and press Research"
                        </p>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Cards, chart and table for the current results
#[component]
fn Results() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="space-y-8">
            <section class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || state.dashboard.with(|d| d.results.clone())
                    .into_iter()
                    .map(|info| view! { <TokenCard info=info /> })
                    .collect_view()}
            </section>

            <section class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm">
                <h2 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">"Price"</h2>
                <PriceChart />
            </section>

            <section class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm">
                <h2 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">"Comparison"</h2>
                <ComparisonTable />
            </section>
        </div>
    }
}

/// Run one submission of the current token list
fn submit(state: GlobalState) {
    let begun = state.dashboard.try_update(|d| d.begin_submission());

    let batch = match begun {
        Some(Ok(batch)) => batch,
        Some(Err(notice)) => {
            state.show_notice(notice);
            return;
        }
        None => return,
    };
    state.clear_notice();

    let endpoint = match api::research_endpoint() {
        Ok(endpoint) => endpoint,
        Err(e) => {
            web_sys::console::error_1(&format!("Cannot reach research proxy: {}", e).into());
            if let Some(Completion::Applied(Some(notice))) =
                state.dashboard.try_update(|d| d.abort_submission(batch.generation))
            {
                state.show_notice(notice);
            }
            return;
        }
    };

    spawn_local(async move {
        let endpoint = endpoint.as_str();
        let report = fetch_all(batch.generation, batch.tokens, move |token| async move {
            api::fetch_research(endpoint, &token).await
        })
        .await;

        for failure in &report.failures {
            web_sys::console::warn_1(
                &format!("Research for {} failed: {}", failure.token, failure.error).into(),
            );
        }

        match state.dashboard.try_update(|d| d.finish_submission(report)) {
            Some(Completion::Applied(notice)) => {
                state.last_updated.set(Some(Local::now()));
                if let Some(notice) = notice {
                    state.show_notice(notice);
                }
            }
            Some(Completion::Stale) => {
                web_sys::console::log_1(
                    &format!("Discarded stale batch {}", batch.generation).into(),
                );
            }
            None => {}
        }
    });
}
