//! UI Components
//!
//! Reusable Leptos components for the task manager.

pub mod banner;
pub mod category_manager;
pub mod loading;
pub mod nav;
pub mod task_form;
pub mod task_item;
pub mod toast;

pub use banner::ErrorBanner;
pub use category_manager::CategoryManager;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use toast::Toast;
