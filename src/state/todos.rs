//! Todo list state: loaded rows plus at most one inline edit.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::{Todo, TodoDraft};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
    /// Row being edited and its unsaved fields.
    editing: Option<(i64, TodoDraft)>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self { todos: Vec::new(), loading: true, error: None, editing: None }
    }
}

impl TodoList {
    pub fn loaded(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
    }

    /// Open the inline editor for `id`, seeded from the row. Replaces any
    /// other open edit.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(todo) = self.todos.iter().find(|t| t.id == id) else {
            return false;
        };
        let draft = TodoDraft { title: todo.title.clone(), description: todo.description.clone() };
        self.editing = Some((id, draft));
        true
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|(id, _)| *id)
    }

    #[must_use]
    pub fn draft(&self) -> Option<&TodoDraft> {
        self.editing.as_ref().map(|(_, draft)| draft)
    }

    pub fn edit_title(&mut self, title: String) {
        if let Some((_, draft)) = self.editing.as_mut() {
            draft.title = title;
        }
    }

    pub fn edit_description(&mut self, description: String) {
        if let Some((_, draft)) = self.editing.as_mut() {
            draft.description = description;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Status to send when the checkbox of row `id` is flipped.
    #[must_use]
    pub fn toggled_status(&self, id: i64) -> Option<bool> {
        self.todos.iter().find(|t| t.id == id).map(|t| !t.status)
    }

    /// Replace a row with the server's copy. Closes the editor if it was
    /// editing that row.
    pub fn apply_saved(&mut self, saved: Todo) {
        if self.editing_id() == Some(saved.id) {
            self.editing = None;
        }
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == saved.id) {
            *slot = saved;
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.todos.retain(|t| t.id != id);
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
    }
}
