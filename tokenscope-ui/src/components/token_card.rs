//! Token Card Component
//!
//! Summary card for one researched token, expandable to show the full
//! research narrative.

use leptos::*;
use tokenscope_core::{excerpt, parse_summary, Sentiment, SummaryBlock, TableMetric, TokenInfo};

const EXCERPT_CHARS: usize = 160;

/// Token card component
#[component]
pub fn TokenCard(info: TokenInfo) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let price = TableMetric::Price.format(&info);
    let change = TableMetric::Change24h.format(&info);
    let change_class = change_class(info.price_change_24h);
    let market_cap = TableMetric::MarketCap.format(&info);
    let preview = excerpt(&info.summary, EXCERPT_CHARS);
    let blocks = parse_summary(&info.summary);

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700 \
                    hover:border-gray-300 dark:hover:border-gray-600 transition">
            // Header with logo, name and sentiment
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <img src=info.image.clone() alt=info.name.clone() class="w-10 h-10 rounded-full" />
                    <div>
                        <div class="font-semibold text-gray-900 dark:text-white">{info.name.clone()}</div>
                        <div class="text-xs text-gray-500 uppercase">{info.symbol.clone()}</div>
                    </div>
                </div>
                <span class=format!("px-2 py-1 rounded-full text-xs font-medium capitalize {}", sentiment_class(info.sentiment))>
                    {info.sentiment.as_str()}
                </span>
            </div>

            // Price and change
            <div class="mt-4 flex items-baseline space-x-3">
                <span class="text-2xl font-bold text-gray-900 dark:text-white">{price}</span>
                <span class=format!("text-sm {}", change_class)>{change}</span>
            </div>
            <div class="text-sm text-gray-500 mt-1">"Market cap " {market_cap}</div>

            // Summary
            <div class="mt-4 text-sm text-gray-700 dark:text-gray-300">
                {move || if expanded.get() {
                    view! { <SummaryView blocks=blocks.clone() /> }.into_view()
                } else {
                    view! { <p>{preview.clone()}</p> }.into_view()
                }}
            </div>

            <button
                class="mt-3 text-sm font-medium text-amber-600 hover:text-amber-700"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                {move || if expanded.get() { "Show less" } else { "Read research" }}
            </button>
        </div>
    }
}

/// Rendered research summary
#[component]
fn SummaryView(blocks: Vec<SummaryBlock>) -> impl IntoView {
    blocks
        .into_iter()
        .map(|block| match block {
            SummaryBlock::Heading { level, text } => {
                let class = if level <= 2 {
                    "font-semibold text-base mt-3 mb-1"
                } else {
                    "font-semibold mt-2 mb-1"
                };
                view! { <h4 class=class>{text}</h4> }.into_view()
            }
            SummaryBlock::Bullet(text) => view! {
                <div class="flex space-x-2 ml-2"><span>"•"</span><span>{text}</span></div>
            }
            .into_view(),
            SummaryBlock::Paragraph(text) => view! { <p class="mb-2">{text}</p> }.into_view(),
        })
        .collect_view()
}

fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::StrongBullish => "bg-green-600 text-white",
        Sentiment::Bullish => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        Sentiment::Neutral => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
        Sentiment::Bearish => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        Sentiment::StrongBearish => "bg-red-600 text-white",
    }
}

fn change_class(change: Option<f64>) -> &'static str {
    match change {
        Some(c) if c > 0.0 => "text-green-500",
        Some(c) if c < 0.0 => "text-red-500",
        _ => "text-gray-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_class() {
        assert_eq!(change_class(Some(2.1)), "text-green-500");
        assert_eq!(change_class(Some(-0.4)), "text-red-500");
        assert_eq!(change_class(Some(0.0)), "text-gray-500");
        assert_eq!(change_class(None), "text-gray-500");
    }

    #[test]
    fn test_every_sentiment_has_a_badge() {
        for sentiment in Sentiment::ALL {
            assert!(!sentiment_class(sentiment).is_empty());
        }
    }
}
