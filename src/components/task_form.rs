//! Task Form Component
//!
//! Create/edit form for a single task. Editing is driven by the parent: the
//! form reloads its fields whenever a different task is handed in, and
//! reports back through `on_done` once the edit finishes or is cancelled.

use chrono::NaiveDate;
use leptos::*;

use crate::api;
use crate::api::TaskPayload;
use crate::state::global::{GlobalState, Priority, Task};

/// Element id of the title input, used by the tasks page to focus the form
/// when editing starts.
pub const TITLE_INPUT_ID: &str = "task-title";

/// Task create/edit form
#[component]
pub fn TaskForm(
    editing: ReadSignal<Option<Task>>,
    on_done: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let categories = state.categories;

    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (due_date, set_due_date) = create_signal(String::new());
    let (priority, set_priority) = create_signal(Priority::Medium);
    let (category_id, set_category_id) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);

    // Reload the fields whenever the task under edit changes (or editing
    // ends and the form goes back to create mode).
    create_effect(move |_| {
        match editing.get() {
            Some(task) => {
                set_title.set(task.title);
                set_description.set(task.description.unwrap_or_default());
                set_due_date.set(task.due_date.map(|d| d.to_string()).unwrap_or_default());
                set_priority.set(task.priority);
                set_category_id.set(task.category_id.unwrap_or_default());
            }
            None => {
                set_title.set(String::new());
                set_description.set(String::new());
                set_due_date.set(String::new());
                set_priority.set(Priority::Medium);
                set_category_id.set(String::new());
            }
        }
        set_form_error.set(None);
    });

    let on_done_for_submit = on_done.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let t = title.get();
        if t.trim().is_empty() {
            set_form_error.set(Some("Title is required".to_string()));
            return;
        }
        set_form_error.set(None);

        let editing_task = editing.get();
        let payload = TaskPayload {
            title: t.trim().to_string(),
            description: Some(description.get()).filter(|d| !d.is_empty()),
            due_date: NaiveDate::parse_from_str(&due_date.get(), "%Y-%m-%d").ok(),
            priority: priority.get(),
            category_id: Some(category_id.get()).filter(|c| !c.is_empty()),
            is_completed: editing_task
                .as_ref()
                .map(|task| task.is_completed)
                .unwrap_or(false),
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        let on_done_inner = on_done_for_submit.clone();
        spawn_local(async move {
            let result = match &editing_task {
                Some(task) => api::update_task(&task.id, &payload).await,
                None => api::create_task(&payload).await,
            };

            match result {
                Ok(task) => {
                    if editing_task.is_some() {
                        state_clone.replace_task(task);
                        state_clone.show_success("Task updated");
                        on_done_inner();
                    } else {
                        state_clone.prepend_task(task);
                        state_clone.show_success("Task created");
                        set_title.set(String::new());
                        set_description.set(String::new());
                        set_due_date.set(String::new());
                        set_priority.set(Priority::Medium);
                        set_category_id.set(String::new());
                    }
                }
                Err(e) => {
                    set_form_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    let on_done_for_cancel = on_done;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">
                {move || if editing.get().is_some() { "Edit Task" } else { "New Task" }}
            </h2>

            <form on:submit=on_submit class="space-y-4">
                // Title
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                    <input
                        type="text"
                        id=TITLE_INPUT_ID
                        placeholder="What needs doing?"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Description
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description (optional)"</label>
                    <textarea
                        rows=2
                        placeholder="Details"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="grid md:grid-cols-3 gap-4">
                    // Due date
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Due date"</label>
                        <input
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Priority
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Priority"</label>
                        <select
                            on:change=move |ev| set_priority.set(Priority::from_name(&event_target_value(&ev)))
                            prop:value=move || priority.get().name()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="low">"Low"</option>
                            <option value="medium">"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                    </div>

                    // Category
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                        <select
                            on:change=move |ev| set_category_id.set(event_target_value(&ev))
                            prop:value=move || category_id.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="">"No category"</option>
                            {move || {
                                categories.get()
                                    .into_iter()
                                    .map(|c| view! {
                                        <option value=c.id.clone()>{c.name}</option>
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </div>

                // Validation / API error
                {move || {
                    form_error.get().map(|message| view! {
                        <p class="text-red-400 text-sm">{message}</p>
                    })
                }}

                // Buttons
                <div class="flex space-x-3">
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || {
                            if submitting.get() {
                                "Saving..."
                            } else if editing.get().is_some() {
                                "Save Changes"
                            } else {
                                "Create Task"
                            }
                        }}
                    </button>

                    {move || {
                        let on_cancel = on_done_for_cancel.clone();
                        editing.get().is_some().then(|| view! {
                            <button
                                type="button"
                                on:click=move |_| on_cancel()
                                class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Cancel"
                            </button>
                        })
                    }}
                </div>
            </form>
        </section>
    }
}
