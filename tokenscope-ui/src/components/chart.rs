//! Price Chart Component
//!
//! Bar chart of token prices using HTML5 Canvas. Unknown prices are drawn
//! as zero-height bars.

use leptos::*;
use tokenscope_core::{chart_series, ChartBar};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

/// Bar colors, cycled per token
const BAR_COLORS: [&str; 6] = [
    "#F59E0B", // Amber (primary)
    "#10B981", // Green
    "#3B82F6", // Blue
    "#8B5CF6", // Purple
    "#EF4444", // Red
    "#06B6D4", // Cyan
];

struct Palette {
    background: &'static str,
    grid: &'static str,
    label: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#ffffff",
    grid: "#e5e7eb",
    label: "#4b5563",
};

const DARK: Palette = Palette {
    background: "#1f2937",
    grid: "#374151",
    label: "#9ca3af",
};

/// Price comparison chart component
#[component]
pub fn PriceChart() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when results or theme change
    create_effect(move |_| {
        let series = state.dashboard.with(|d| chart_series(&d.results));
        let palette = if state.dark_mode() { &DARK } else { &LIGHT };

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &series, palette);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="360"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &[ChartBar], palette: &Palette) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 80.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&palette.label.into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No prices to compare", width / 2.0, height / 2.0);
        return;
    }

    let max = y_axis_max(series);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&palette.grid.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&palette.label.into());
        let _ = ctx.fill_text(&axis_label(value), margin_left - 8.0, y + 4.0);
    }

    // Bars
    let slot = chart_width / series.len() as f64;
    let bar_width = (slot * 0.6).min(80.0);
    ctx.set_text_align("center");

    for (idx, bar) in series.iter().enumerate() {
        let x_center = margin_left + slot * (idx as f64 + 0.5);
        let bar_height = (bar.value.max(0.0) / max) * chart_height;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&BAR_COLORS[idx % BAR_COLORS.len()].into());
        ctx.fill_rect(x_center - bar_width / 2.0, y, bar_width, bar_height);

        ctx.set_fill_style(&palette.label.into());
        let _ = ctx.fill_text(&bar.label, x_center, height - 15.0);
    }
}

/// Top of the y axis: highest price plus 10% headroom, at least 1
fn y_axis_max(series: &[ChartBar]) -> f64 {
    let highest = series.iter().map(|bar| bar.value).fold(0.0, f64::max);
    if highest > 0.0 {
        highest * 1.1
    } else {
        1.0
    }
}

fn axis_label(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.0}", value)
    } else if value >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.4}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(label: &str, value: f64) -> ChartBar {
        ChartBar {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_y_axis_max() {
        let series = vec![bar("BTC", 64000.0), bar("SOL", 0.0)];
        assert!((y_axis_max(&series) - 70400.0).abs() < 1e-6);
        assert_eq!(y_axis_max(&[bar("X", 0.0)]), 1.0);
        assert_eq!(y_axis_max(&[]), 1.0);
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(axis_label(64000.4), "64000");
        assert_eq!(axis_label(12.345), "12.35");
        assert_eq!(axis_label(0.00012), "0.0001");
    }
}
