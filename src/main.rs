//! Taskdeck
//!
//! Browser task manager built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password login and registration against the task API
//! - Task create/edit/toggle/delete with optimistic completion toggling
//! - Category management with removable tags
//! - Due-date badges (overdue / due today) and priority styling
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistent state lives behind the remote HTTP/JSON API;
//! the client keeps a best-effort in-memory cache plus a single bearer token
//! in localStorage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
