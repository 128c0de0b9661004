//! Task List Item Component
//!
//! Pure display/interaction row for one task: completion checkbox, badges,
//! and the edit/delete actions. Holds no state of its own; everything is
//! derived from the task and the category lookup handed in by the parent.

use leptos::*;

use crate::components::InlineLoading;
use crate::state::global::{category_name, Category, DueStatus, Task};

/// One row of the task list
#[component]
pub fn TaskItem(
    task: Task,
    categories: Vec<Category>,
    on_toggle: impl Fn(Task) + 'static,
    on_edit: impl Fn(Task) + 'static,
    on_delete: impl Fn(String) + 'static,
) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let status = task.due_status(today);
    let category = category_name(&categories, task.category_id.as_deref());

    let due_badge = match status {
        DueStatus::Overdue => Some(("Overdue".to_string(), "bg-red-600 text-white")),
        DueStatus::DueToday => Some(("Due today".to_string(), "bg-yellow-600 text-white")),
        DueStatus::Scheduled(date) => {
            Some((date.format("%b %d, %Y").to_string(), "bg-gray-700 text-gray-300"))
        }
        DueStatus::Unscheduled => None,
    };

    let completed = task.is_completed;
    let updating = task.is_updating;

    let task_for_toggle = task.clone();
    let task_for_edit = task.clone();
    let id_for_delete = task.id.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600
                    transition-colors">
            <div class="flex items-start space-x-3">
                // Completion toggle
                <div class="pt-1 flex items-center space-x-2">
                    <input
                        type="checkbox"
                        prop:checked=completed
                        disabled=updating
                        on:change=move |_| on_toggle(task_for_toggle.clone())
                        class="w-5 h-5 accent-primary-600 cursor-pointer disabled:cursor-wait"
                    />
                    {updating.then(|| view! { <InlineLoading /> })}
                </div>

                // Body
                <div class="flex-1 min-w-0">
                    <div class="flex items-center flex-wrap gap-2">
                        <h3 class=move || {
                            if completed {
                                "font-semibold line-through text-gray-500"
                            } else {
                                "font-semibold"
                            }
                        }>
                            {task.title.clone()}
                        </h3>

                        // Priority badge
                        <span class=format!(
                            "{} text-xs px-2 py-0.5 rounded-full text-white",
                            task.priority.badge_class()
                        )>
                            {task.priority.label()}
                        </span>

                        // Category tag
                        <span class="bg-gray-700 text-gray-300 text-xs px-2 py-0.5 rounded-full">
                            {category}
                        </span>

                        // Due-date badge
                        {due_badge.map(|(label, classes)| view! {
                            <span class=format!("{} text-xs px-2 py-0.5 rounded-full", classes)>
                                {label}
                            </span>
                        })}
                    </div>

                    {task.description.clone().map(|description| view! {
                        <p class="text-gray-400 text-sm mt-1">{description}</p>
                    })}
                </div>

                // Actions
                <div class="flex items-center space-x-1">
                    <button
                        on:click=move |_| on_edit(task_for_edit.clone())
                        class="px-3 py-1 text-sm text-gray-300 hover:text-white hover:bg-gray-700
                               rounded-lg transition-colors"
                    >
                        "Edit"
                    </button>
                    <button
                        on:click=move |_| on_delete(id_for_delete.clone())
                        class="px-3 py-1 text-sm text-red-400 hover:text-red-300 hover:bg-gray-700
                               rounded-lg transition-colors"
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
