//! App Root Component
//!
//! Two coarse states: unauthenticated renders only the auth page;
//! authenticated renders the task manager. Global feedback (error banner,
//! success toast) hangs off the root.

use leptos::*;

use crate::components::{ErrorBanner, Nav, Toast};
use crate::pages::{AuthPage, TasksPage};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let authenticated = state.authenticated;

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 max-w-3xl">
                <ErrorBanner />

                {move || {
                    if authenticated.get() {
                        view! { <TasksPage /> }.into_view()
                    } else {
                        view! { <AuthPage /> }.into_view()
                    }
                }}
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
