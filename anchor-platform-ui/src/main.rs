//! Factom Anchor Platform Dashboard
//!
//! Administrative dashboard for the Anchor Platform built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Anchor Platform API over JSON-RPC
//! (`POST /v2`). Navigation state, routing and response decoding live in
//! `anchor-platform-core`; this crate only renders.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod document;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
