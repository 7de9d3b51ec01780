//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for token cards
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
            {(0..count).map(|_| view! {
                <div class="bg-white dark:bg-gray-800 rounded-lg p-4 animate-pulse">
                    <div class="flex items-center space-x-3 mb-4">
                        <div class="w-10 h-10 bg-gray-200 dark:bg-gray-700 rounded-full" />
                        <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-1/3" />
                    </div>
                    <div class="h-8 bg-gray-200 dark:bg-gray-700 rounded w-1/2 mb-2" />
                    <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
