//! Navigation Component
//!
//! Header bar with the brand and the logout control.

use leptos::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let authenticated = state.authenticated;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 max-w-3xl">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"📋"</span>
                        <span class="text-xl font-bold text-white">"Taskdeck"</span>
                    </div>

                    // Logout (only while a session is held)
                    {move || {
                        if authenticated.get() {
                            let state = state.clone();
                            view! {
                                <button
                                    on:click=move |_| state.logout()
                                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                           hover:bg-gray-700 transition-colors"
                                >
                                    "Log out"
                                </button>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
