//! Todo Card Component
//!
//! Read-only card face shared by the board columns and the drag overlay.

use chrono::Utc;
use leptos::prelude::*;

use crate::models::Todo;

/// Card showing type, priority, content, location, assignee, due date and status
#[component]
pub fn TodoCard(
    todo: Todo,
    /// Rendered as the floating drag overlay
    #[prop(optional)]
    dragging: bool,
) -> impl IntoView {
    let overdue = todo.is_overdue(Utc::now());
    let due = todo.due_date.map(|d| d.format("%Y-%m-%d").to_string());
    let location = todo.location();
    let Todo {
        file_path,
        todo_type,
        content,
        assignee,
        status,
        priority,
        ..
    } = todo;

    let type_class = format!("type-badge type-{}", todo_type.to_lowercase());
    let priority_class = format!("priority-badge priority-{}", priority.as_str().to_lowercase());
    let status_class = format!("status-badge status-{}", status.as_str());

    view! {
        <div class=if dragging { "todo-card dragging" } else { "todo-card" }>
            <div class="todo-card-header">
                <span class=type_class>{todo_type}</span>
                <span class=priority_class>{priority.as_str()}</span>
            </div>

            <p class="todo-card-content">{content}</p>

            <div class="todo-card-meta">
                <span class="todo-location" title=file_path>{location}</span>
                {(!assignee.is_empty()).then(|| view! {
                    <span class="todo-assignee">{assignee}</span>
                })}
            </div>

            {due.map(|date| view! {
                <div class=if overdue { "todo-due overdue" } else { "todo-due" }>
                    <span>{date}</span>
                    {overdue.then(|| view! { <span class="overdue-mark">"!"</span> })}
                </div>
            })}

            <div class="todo-card-footer">
                <span class=status_class>{status.label()}</span>
            </div>
        </div>
    }
}
