//! Tokenscope Dashboard
//!
//! Crypto token research dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Research several tokens at once through the Tokenscope proxy
//! - Side-by-side cards, price chart and comparison table
//! - Partial failures reported without losing the valid results
//! - Persisted dark mode
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state transitions live in `tokenscope-core`; this crate
//! wires them to signals, the DOM and the proxy.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
