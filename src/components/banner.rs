//! Error Banner Component
//!
//! Dismissible banner for cross-cutting failures (initial fetch, toggle,
//! delete). Clicking the banner dismisses it; nothing auto-retries.

use leptos::*;

use crate::state::global::GlobalState;

/// Global error banner, bound to the shared error signal
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;

    view! {
        {move || {
            error.get().map(|message| view! {
                <div
                    on:click=move |_| error.set(None)
                    class="flex items-center justify-between bg-red-900/40 border border-red-600
                           text-red-200 rounded-lg px-4 py-3 mb-6 cursor-pointer"
                >
                    <span class="text-sm font-medium">{message}</span>
                    <span class="text-red-400 text-sm ml-4">"✕ dismiss"</span>
                </div>
            })
        }}
    }
}
