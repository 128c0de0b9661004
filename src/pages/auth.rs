//! Auth Page
//!
//! Login / register form. On success the returned token is persisted and
//! the root flips to the authenticated state.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::session;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

/// Login/register page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (mode, set_mode) = create_signal(AuthMode::Login);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let m = mode.get();
        let n = name.get();
        let e = email.get();
        let p = password.get();

        set_submitting.set(true);
        set_form_error.set(None);

        let state_clone = state.clone();
        spawn_local(async move {
            let result = match m {
                AuthMode::Login => api::login(&e, &p).await,
                AuthMode::Register => api::register(&n, &e, &p).await,
            };

            match result {
                Ok(token) => {
                    session::set_token(&token);
                    state_clone.authenticated.set(true);
                }
                Err(err) => {
                    set_form_error.set(Some(err));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12">
            <div class="bg-gray-800 rounded-xl p-6">
                // Mode toggle
                <div class="flex space-x-2 mb-6">
                    <ModeButton
                        label="Log in"
                        current=mode
                        target=AuthMode::Login
                        on_click=move |_| set_mode.set(AuthMode::Login)
                    />
                    <ModeButton
                        label="Register"
                        current=mode
                        target=AuthMode::Register
                        on_click=move |_| set_mode.set(AuthMode::Register)
                    />
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Name (register only)
                    {move || {
                        if mode.get() == AuthMode::Register {
                            view! {
                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                                    <input
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500
                                               focus:outline-none"
                                    />
                                </div>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}

                    // Email
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Password
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Error message
                    {move || {
                        form_error.get().map(|message| view! {
                            <p class="text-red-400 text-sm">{message}</p>
                        })
                    }}

                    // Submit
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || {
                            if submitting.get() {
                                "Please wait..."
                            } else if mode.get() == AuthMode::Login {
                                "Log in"
                            } else {
                                "Create account"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ModeButton(
    label: &'static str,
    current: ReadSignal<AuthMode>,
    target: AuthMode,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "flex-1 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}
