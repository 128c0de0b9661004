//! Tasks Page
//!
//! The authenticated view: task form, category manager, and the derived
//! task list. Owns the editing selection and wires list-item actions back
//! into cache mutations.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::TaskPayload;
use crate::components::{task_form, CategoryManager, Loading, TaskForm, TaskItem};
use crate::state::global::{visible_tasks, GlobalState, Task};

/// Authenticated home page
#[component]
pub fn TasksPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let tasks = state.tasks;
    let categories = state.categories;
    let show_completed = state.show_completed;
    let loading = state.loading;

    let (editing, set_editing) = create_signal(None::<Task>);

    // Fetch the task list, then the category list, once on entering the
    // authenticated state. Both replace their caches wholesale.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_tasks().await {
                Ok(tasks) => {
                    state.tasks.set(tasks);
                }
                Err(e) => {
                    state.report_error(&e);
                }
            }

            match api::fetch_categories().await {
                Ok(categories) => {
                    state.categories.set(categories);
                }
                Err(e) => {
                    state.report_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    // Optimistic completion toggle: flip the cache first, then reconcile
    // with the server's task or revert on failure.
    let state_for_toggle = state.clone();
    let on_toggle = move |task: Task| {
        let state = state_for_toggle.clone();
        let flipped = !task.is_completed;

        state.set_completion(&task.id, flipped, true);

        spawn_local(async move {
            let payload = TaskPayload::from_task(&task, flipped);
            match api::update_task(&task.id, &payload).await {
                Ok(updated) => {
                    state.replace_task(updated);
                }
                Err(e) => {
                    state.set_completion(&task.id, task.is_completed, false);
                    state.report_error(&e);
                }
            }
        });
    };

    let on_edit = move |task: Task| {
        set_editing.set(Some(task));
        focus_title_input();
    };

    // No optimistic removal here: the cache only changes after the server
    // confirms the delete.
    let state_for_delete = state;
    let on_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("Delete this task?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_task(&id).await {
                Ok(()) => {
                    state.remove_task(&id);
                    state.show_success("Task deleted");
                }
                Err(e) => {
                    state.report_error(&e);
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Your Tasks"</h1>
                    <p class="text-gray-400 mt-1">"Everything on your plate, in one list"</p>
                </div>

                <label class="flex items-center space-x-2 text-sm text-gray-300 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || show_completed.get()
                        on:change=move |ev| show_completed.set(event_target_checked(&ev))
                        class="w-4 h-4 accent-primary-600"
                    />
                    <span>"Show completed"</span>
                </label>
            </div>

            // Create / edit form
            <TaskForm editing=editing on_done=move || set_editing.set(None) />

            // Categories
            <CategoryManager />

            // Task list
            <section>
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        let lookup = categories.get();
                        let items = visible_tasks(&tasks.get(), show_completed.get());

                        if items.is_empty() {
                            view! {
                                <div class="text-center py-12">
                                    <p class="text-gray-400">
                                        "Nothing here. Add a task above to get started."
                                    </p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-3">
                                    {items.into_iter().map(|task| view! {
                                        <TaskItem
                                            task=task
                                            categories=lookup.clone()
                                            on_toggle=on_toggle.clone()
                                            on_edit=on_edit.clone()
                                            on_delete=on_delete.clone()
                                        />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}

/// Move keyboard focus to the task form's title input (used when editing
/// starts so the selected task is immediately editable).
fn focus_title_input() {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(element) = document.get_element_by_id(task_form::TITLE_INPUT_ID) {
                if let Some(input) = element.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = input.focus();
                }
            }
        }
    }
}
