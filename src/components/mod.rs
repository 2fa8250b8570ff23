//! UI Components
//!
//! Leptos components for the board page.

mod connection_error;
mod delete_confirm_button;
mod drag_overlay;
mod filter_bar;
mod kanban_board;
mod stats_bar;
mod todo_card;
mod todo_detail;

pub use connection_error::ConnectionError;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_overlay::DragOverlay;
pub use filter_bar::FilterBar;
pub use kanban_board::KanbanBoard;
pub use stats_bar::StatsBar;
pub use todo_card::TodoCard;
pub use todo_detail::TodoDetail;
