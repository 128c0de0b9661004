//! Category Manager Component
//!
//! Text field for new categories plus the existing ones rendered as
//! removable tags. Deletion is confirmed with the user and never retried.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Category create/delete widget
#[component]
pub fn CategoryManager() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let categories = state.categories;

    let (name, set_name) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get().trim().to_string();
        if n.is_empty() {
            set_form_error.set(Some("Category name is required".to_string()));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::create_category(&n).await {
                Ok(category) => {
                    state_clone.append_category(category);
                    set_name.set(String::new());
                }
                Err(e) => {
                    set_form_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    let state_for_delete = state;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Categories"</h2>

            // Existing categories as removable tags
            <div class="flex flex-wrap gap-2 mb-4">
                {move || {
                    let items = categories.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No categories yet."</p>
                        }.into_view()
                    } else {
                        items.into_iter().map(|category| {
                            let state = state_for_delete.clone();
                            let id = category.id.clone();

                            let on_remove = move |_| {
                                let confirmed = web_sys::window()
                                    .map(|window| {
                                        window
                                            .confirm_with_message("Delete this category?")
                                            .unwrap_or(false)
                                    })
                                    .unwrap_or(false);
                                if !confirmed {
                                    return;
                                }

                                let state = state.clone();
                                let id = id.clone();
                                spawn_local(async move {
                                    match api::delete_category(&id).await {
                                        Ok(()) => {
                                            state.remove_category(&id);
                                        }
                                        Err(e) => {
                                            set_form_error.set(Some(e));
                                        }
                                    }
                                });
                            };

                            view! {
                                <span class="bg-gray-700 px-3 py-1 rounded-full text-sm flex
                                             items-center space-x-2">
                                    <span>{category.name}</span>
                                    <button
                                        type="button"
                                        on:click=on_remove
                                        class="text-gray-400 hover:text-white"
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        }).collect_view()
                    }
                }}
            </div>

            // New category form
            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="New category"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || if submitting.get() { "Adding..." } else { "Add" }}
                </button>
            </form>

            {move || {
                form_error.get().map(|message| view! {
                    <p class="text-red-400 text-sm mt-2">{message}</p>
                })
            }}
        </section>
    }
}
