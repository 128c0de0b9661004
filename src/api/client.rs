//! HTTP API Client
//!
//! Functions for communicating with the task REST API. Authenticated calls
//! attach the stored bearer token and fail up front when no token is held;
//! a 401 from the server drops the token and reloads the page.

use chrono::NaiveDate;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::state::global::{Category, Priority, Task};
use crate::state::session;

/// Base URL of the task API
pub const API_BASE: &str = "http://localhost:5000/api";

/// Error used when an authenticated call is attempted without a stored token
pub const ERR_NOT_AUTHENTICATED: &str = "Not authenticated: please log in";

/// Error used when the server rejects the session token
pub const ERR_SESSION_EXPIRED: &str = "Session expired: please log in again";

/// Whether an error message means the session is gone and the client should
/// fall back to the login view.
pub fn is_auth_error(message: &str) -> bool {
    message == ERR_NOT_AUTHENTICATED || message == ERR_SESSION_EXPIRED
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct AuthResponse {
    token: String,
}

#[derive(Debug, serde::Deserialize)]
struct TaskListResponse {
    tasks: Vec<Task>,
}

#[derive(Debug, serde::Deserialize)]
struct TaskResponse {
    task: Task,
}

#[derive(Debug, serde::Deserialize)]
struct CategoryListResponse {
    categories: Vec<Category>,
}

#[derive(Debug, serde::Deserialize)]
struct CategoryResponse {
    category: Category,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    message: String,
}

// ============ Request Types ============

/// Body for task create/update calls.
///
/// Optional fields are omitted from the payload entirely when unset so the
/// server never sees empty or null values to validate.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub is_completed: bool,
}

impl TaskPayload {
    /// Build a full-replacement body from a cached task, carrying the given
    /// completion flag. Empty optional fields are dropped, same as the
    /// create path.
    pub fn from_task(task: &Task, is_completed: bool) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().filter(|d| !d.is_empty()),
            due_date: task.due_date,
            priority: task.priority,
            category_id: task.category_id.clone().filter(|c| !c.is_empty()),
            is_completed,
        }
    }
}

// ============ Request Plumbing ============

/// Attach the bearer token, failing before the request is issued when no
/// token is stored.
fn bearer(builder: RequestBuilder) -> Result<RequestBuilder, String> {
    match session::token() {
        Some(token) => Ok(builder.header("Authorization", &format!("Bearer {}", token))),
        None => Err(ERR_NOT_AUTHENTICATED.to_string()),
    }
}

/// Drop the stored token and reload the page so the app restarts in the
/// unauthenticated state.
fn expire_session() -> String {
    session::clear_token();
    web_sys::console::warn_1(&"Session rejected by the API, reloading".into());
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
    ERR_SESSION_EXPIRED.to_string()
}

/// Normalize a non-success response into a display message, preferring the
/// `message` field of a JSON error body.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP error {}", status),
    }
}

/// Handle a response whose success carries a JSON body.
async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.status() == 401 {
        return Err(expire_session());
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Handle a response whose success carries no body (204 from deletes).
async fn into_empty(response: Response) -> Result<(), String> {
    if response.status() == 401 {
        return Err(expire_session());
    }
    if response.status() == 204 || response.ok() {
        return Ok(());
    }
    Err(error_message(response).await)
}

// ============ Auth ============

/// Exchange credentials for a session token.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/auth/login", API_BASE))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let auth: AuthResponse = into_json(response).await?;
    Ok(auth.token)
}

/// Create an account; the API returns a token for the new user.
pub async fn register(name: &str, email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        name: String,
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/auth/register", API_BASE))
        .json(&RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let auth: AuthResponse = into_json(response).await?;
    Ok(auth.token)
}

// ============ Tasks ============

/// Fetch all tasks for the current user.
pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let response = bearer(Request::get(&format!("{}/tasks", API_BASE)))?
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let list: TaskListResponse = into_json(response).await?;
    Ok(list.tasks)
}

/// Create a new task.
pub async fn create_task(payload: &TaskPayload) -> Result<Task, String> {
    let response = bearer(Request::post(&format!("{}/tasks", API_BASE)))?
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let created: TaskResponse = into_json(response).await?;
    Ok(created.task)
}

/// Replace a task by id.
pub async fn update_task(id: &str, payload: &TaskPayload) -> Result<Task, String> {
    let response = bearer(Request::put(&format!("{}/tasks/{}", API_BASE, id)))?
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let updated: TaskResponse = into_json(response).await?;
    Ok(updated.task)
}

/// Remove a task by id.
pub async fn delete_task(id: &str) -> Result<(), String> {
    let response = bearer(Request::delete(&format!("{}/tasks/{}", API_BASE, id)))?
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_empty(response).await
}

// ============ Categories ============

/// Fetch all categories for the current user.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = bearer(Request::get(&format!("{}/categories", API_BASE)))?
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let list: CategoryListResponse = into_json(response).await?;
    Ok(list.categories)
}

/// Create a new category.
pub async fn create_category(name: &str) -> Result<Category, String> {
    #[derive(serde::Serialize)]
    struct CreateCategoryRequest {
        name: String,
    }

    let response = bearer(Request::post(&format!("{}/categories", API_BASE)))?
        .json(&CreateCategoryRequest {
            name: name.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let created: CategoryResponse = into_json(response).await?;
    Ok(created.category)
}

/// Remove a category by id.
pub async fn delete_category(id: &str) -> Result<(), String> {
    let response = bearer(Request::delete(&format!("{}/categories/{}", API_BASE, id)))?
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    into_empty(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Write report".to_string(),
            description: Some("Quarterly numbers".to_string()),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 14),
            priority: Priority::High,
            category_id: Some("c1".to_string()),
            is_completed: false,
            is_updating: false,
        }
    }

    #[test]
    fn payload_omits_unset_optional_fields() {
        let payload = TaskPayload {
            title: "Buy milk".to_string(),
            description: None,
            due_date: None,
            priority: Priority::Low,
            category_id: None,
            is_completed: false,
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("dueDate"));
        assert!(!object.contains_key("categoryId"));
        assert_eq!(object["title"], "Buy milk");
        assert_eq!(object["priority"], "low");
        assert_eq!(object["isCompleted"], false);
    }

    #[test]
    fn payload_serializes_set_fields_in_camel_case() {
        let payload = TaskPayload::from_task(&task(), false);

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["dueDate"], "2026-03-14");
        assert_eq!(object["categoryId"], "c1");
        assert_eq!(object["description"], "Quarterly numbers");
        assert_eq!(object["priority"], "high");
    }

    #[test]
    fn from_task_carries_flipped_completion_and_nothing_else() {
        let original = task();
        let payload = TaskPayload::from_task(&original, true);

        assert!(payload.is_completed);
        assert_eq!(payload.title, original.title);
        assert_eq!(payload.description, original.description);
        assert_eq!(payload.due_date, original.due_date);
        assert_eq!(payload.priority, original.priority);
        assert_eq!(payload.category_id, original.category_id);
    }

    #[test]
    fn from_task_drops_empty_optional_strings() {
        let mut original = task();
        original.description = Some(String::new());
        original.category_id = Some(String::new());

        let payload = TaskPayload::from_task(&original, false);
        assert_eq!(payload.description, None);
        assert_eq!(payload.category_id, None);
    }
}
