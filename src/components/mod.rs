//! UI Components
//!
//! Leptos components for the widget. None of them touch storage; every
//! action goes through `AppContext::dispatch`.

mod confirm_button;
mod filter_bar;
mod new_todo_form;
mod newsletter_form;
mod stats_bar;
mod status_banner;
mod todo_list_view;
mod todo_row;

pub use confirm_button::ConfirmButton;
pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use newsletter_form::NewsletterForm;
pub use stats_bar::StatsBar;
pub use status_banner::StatusBanner;
pub use todo_list_view::{RowDragCallbacks, TodoListView};
pub use todo_row::TodoRow;
