//! Comparison Table Component
//!
//! Metrics as rows, tokens as columns. Unknown values show as "N/A".

use leptos::*;
use tokenscope_core::TableMetric;

use crate::state::global::GlobalState;

/// Comparison table component
#[component]
pub fn ComparisonTable() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let results = move || state.dashboard.with(|d| d.results.clone());

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead>
                    <tr class="border-b border-gray-200 dark:border-gray-700">
                        <th class="text-left py-2 pr-4 font-medium text-gray-500">"Metric"</th>
                        {move || results().into_iter().map(|info| view! {
                            <th class="text-right py-2 px-4 font-semibold text-gray-900 dark:text-white uppercase">
                                {info.symbol}
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {TableMetric::ALL.into_iter().map(|metric| view! {
                        <tr class="border-b border-gray-100 dark:border-gray-800 last:border-0">
                            <td class="py-2 pr-4 text-gray-500">{metric.label()}</td>
                            {move || results().iter().map(|info| view! {
                                <td class="text-right py-2 px-4 text-gray-900 dark:text-gray-100 tabular-nums">
                                    {metric.format(info)}
                                </td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
