//! Toast Notification Component
//!
//! Shows success messages; the global state clears them after a timeout.

use leptos::*;

use crate::state::global::GlobalState;

/// Success toast container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;

    view! {
        <div class="fixed bottom-4 right-4 z-50">
            {move || {
                success.get().map(|message| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3
                                rounded-lg shadow-lg">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                })
            }}
        </div>
    }
}
