//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the task and
//! category models and the pure derivations over them (due-date status,
//! list filtering/sorting, category resolution).

use chrono::NaiveDate;
use leptos::*;
use std::cmp::Ordering;

use crate::api;
use crate::state::session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Whether a session token is currently held
    pub authenticated: RwSignal<bool>,
    /// Cached tasks from the API
    pub tasks: RwSignal<Vec<Task>>,
    /// Cached categories from the API
    pub categories: RwSignal<Vec<Category>>,
    /// Include completed tasks in the rendered list
    pub show_completed: RwSignal<bool>,
    /// Global loading state for the initial fetch
    pub loading: RwSignal<bool>,
    /// Error banner message; dismissed by clicking the banner
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A task as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    /// Transient marker for an in-flight completion toggle; never crosses
    /// the wire
    #[serde(skip)]
    pub is_updating: bool,
}

/// A category as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Task priority
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Wire/form value
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a form value, defaulting to medium
    pub fn from_name(value: &str) -> Self {
        match value {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Badge color classes for the list item
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "bg-green-600",
            Priority::Medium => "bg-yellow-600",
            Priority::High => "bg-red-600",
        }
    }
}

/// Due-date display state for a task, derived against the current day
#[derive(Clone, Debug, PartialEq)]
pub enum DueStatus {
    /// Due date is in the past and the task is still open
    Overdue,
    /// Due date is today and the task is still open
    DueToday,
    /// Dated, but neither badge applies (future, or the task is completed)
    Scheduled(NaiveDate),
    /// No due date set
    Unscheduled,
}

impl Task {
    /// Classify the task's due date against `today` (both at day
    /// granularity). Completed tasks never carry a badge.
    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        match self.due_date {
            Some(due) if !self.is_completed && due < today => DueStatus::Overdue,
            Some(due) if !self.is_completed && due == today => DueStatus::DueToday,
            Some(due) => DueStatus::Scheduled(due),
            None => DueStatus::Unscheduled,
        }
    }
}

/// Derive the rendered task list: hide completed tasks unless requested,
/// order open tasks before completed ones, then by due date ascending with
/// undated tasks last.
pub fn visible_tasks(tasks: &[Task], show_completed: bool) -> Vec<Task> {
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|t| show_completed || !t.is_completed)
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        a.is_completed
            .cmp(&b.is_completed)
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });

    view
}

/// Resolve a task's category name from the cached list, falling back when
/// the reference is unset or points at a deleted category.
pub fn category_name(categories: &[Category], category_id: Option<&str>) -> String {
    category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string())
}

/// Set the completion and updating flags on the task matching `id`, leaving
/// every other field untouched. Used for the optimistic toggle and its
/// rollback.
pub fn patch_completion(tasks: &mut [Task], id: &str, completed: bool, updating: bool) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.is_completed = completed;
        task.is_updating = updating;
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        authenticated: create_rw_signal(session::token().is_some()),
        tasks: create_rw_signal(Vec::new()),
        categories: create_rw_signal(Vec::new()),
        show_completed: create_rw_signal(false),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Prepend a freshly created task to the cache
    pub fn prepend_task(&self, task: Task) {
        self.tasks.update(|tasks| tasks.insert(0, task));
    }

    /// Replace the cached task matching the given one's id, if present
    pub fn replace_task(&self, task: Task) {
        self.tasks.update(|tasks| {
            if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
                *slot = task;
            }
        });
    }

    /// Drop a task from the cache
    pub fn remove_task(&self, id: &str) {
        self.tasks.update(|tasks| tasks.retain(|t| t.id != id));
    }

    /// Flip a cached task's completion flag and in-flight marker
    pub fn set_completion(&self, id: &str, completed: bool, updating: bool) {
        self.tasks
            .update(|tasks| patch_completion(tasks, id, completed, updating));
    }

    /// Append a freshly created category to the cache
    pub fn append_category(&self, category: Category) {
        self.categories.update(|categories| categories.push(category));
    }

    /// Drop a category from the cache. Tasks still referencing it resolve
    /// to "Uncategorized" on the next render.
    pub fn remove_category(&self, id: &str) {
        self.categories
            .update(|categories| categories.retain(|c| c.id != id));
    }

    /// Surface a failure in the banner. Auth failures additionally force a
    /// logout, covering a token that vanished without the 401 reload path.
    pub fn report_error(&self, message: &str) {
        if api::is_auth_error(message) {
            self.logout();
        }
        self.error.set(Some(message.to_string()));
    }

    /// Clear the session and all cached lists
    pub fn logout(&self) {
        session::clear_token();
        self.authenticated.set(false);
        self.tasks.set(Vec::new());
        self.categories.set(Vec::new());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Dismiss the error banner
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn task(id: &str, due: Option<NaiveDate>, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {}", id),
            description: None,
            due_date: due,
            priority: Priority::Medium,
            category_id: None,
            is_completed: completed,
            is_updating: false,
        }
    }

    #[test]
    fn past_due_open_task_is_overdue() {
        let t = task("a", Some(day(10)), false);
        assert_eq!(t.due_status(day(11)), DueStatus::Overdue);
    }

    #[test]
    fn task_due_today_gets_the_today_badge() {
        let t = task("a", Some(day(11)), false);
        assert_eq!(t.due_status(day(11)), DueStatus::DueToday);
    }

    #[test]
    fn future_due_date_is_just_scheduled() {
        let t = task("a", Some(day(12)), false);
        assert_eq!(t.due_status(day(11)), DueStatus::Scheduled(day(12)));
    }

    #[test]
    fn completed_task_never_carries_a_badge() {
        let past = task("a", Some(day(1)), true);
        assert_eq!(past.due_status(day(11)), DueStatus::Scheduled(day(1)));

        let today = task("b", Some(day(11)), true);
        assert_eq!(today.due_status(day(11)), DueStatus::Scheduled(day(11)));
    }

    #[test]
    fn undated_task_is_unscheduled() {
        let t = task("a", None, false);
        assert_eq!(t.due_status(day(11)), DueStatus::Unscheduled);
    }

    #[test]
    fn hiding_completed_returns_exactly_the_open_subset() {
        let tasks = vec![
            task("a", None, false),
            task("b", None, true),
            task("c", None, false),
        ];

        let view = visible_tasks(&tasks, false);
        let ids: Vec<&str> = view.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let full = visible_tasks(&tasks, true);
        assert_eq!(full.len(), 3);
    }

    #[test]
    fn sort_puts_open_by_due_date_then_undated_then_completed() {
        let tasks = vec![
            task("day3", Some(day(3)), false),
            task("day1", Some(day(1)), true),
            task("day2", Some(day(2)), false),
            task("none", None, false),
        ];

        let view = visible_tasks(&tasks, true);
        let ids: Vec<&str> = view.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["day2", "day3", "none", "day1"]);
    }

    #[test]
    fn patch_completion_flips_only_the_flags() {
        let mut tasks = vec![
            task("a", Some(day(5)), false),
            task("b", None, false),
        ];

        patch_completion(&mut tasks, "a", true, true);
        assert!(tasks[0].is_completed);
        assert!(tasks[0].is_updating);
        assert_eq!(tasks[0].title, "task a");
        assert_eq!(tasks[0].due_date, Some(day(5)));
        assert!(!tasks[1].is_completed);
    }

    #[test]
    fn patch_completion_rollback_restores_the_original() {
        let original = task("a", Some(day(5)), false);
        let mut tasks = vec![original.clone()];

        // Optimistic flip, then the simulated failure path reverts it.
        patch_completion(&mut tasks, "a", true, true);
        patch_completion(&mut tasks, "a", original.is_completed, false);
        assert_eq!(tasks[0], original);
    }

    #[test]
    fn patch_completion_ignores_unknown_ids() {
        let mut tasks = vec![task("a", None, false)];
        patch_completion(&mut tasks, "missing", true, true);
        assert!(!tasks[0].is_completed);
    }

    #[test]
    fn category_resolution_falls_back_to_uncategorized() {
        let categories = vec![Category {
            id: "c1".to_string(),
            name: "Work".to_string(),
        }];

        assert_eq!(category_name(&categories, Some("c1")), "Work");
        assert_eq!(category_name(&categories, Some("gone")), "Uncategorized");
        assert_eq!(category_name(&categories, None), "Uncategorized");
    }

    #[test]
    fn priority_round_trips_through_form_values() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_name(priority.name()), priority);
        }
        assert_eq!(Priority::from_name("garbage"), Priority::Medium);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Priority::High).unwrap(),
            "\"high\""
        );
        assert_eq!(
            serde_json::from_str::<Priority>("\"low\"").unwrap(),
            Priority::Low
        );
    }

    #[test]
    fn task_deserializes_camel_case_wire_format() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t1",
                "title": "Ship it",
                "dueDate": "2026-08-11",
                "priority": "high",
                "categoryId": "c1",
                "isCompleted": true
            }"#,
        )
        .unwrap();

        assert_eq!(task.due_date, Some(day(11)));
        assert_eq!(task.category_id.as_deref(), Some("c1"));
        assert!(task.is_completed);
        assert!(!task.is_updating);
        assert_eq!(task.description, None);
    }
}
