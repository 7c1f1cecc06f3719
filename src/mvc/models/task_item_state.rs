// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::{task_list::is_blank, TaskEdit, TaskModel};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Inline editing state of a single task row.
///
/// ```text
/// Viewing --start_edit--> Editing
/// Editing --cancel------> Viewing   (draft reset to the task title)
/// Editing --submit------> Viewing   (emits a TaskEdit with the draft)
/// ```
///
/// Submitting a blank draft behaves like cancel and emits nothing.
///
/// Events that do not apply to the current mode are ignored.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TaskItemState {
    mode: EditMode,
    draft: String,
}

impl TaskItemState {
    pub fn new(task: &TaskModel) -> Self {
        Self { mode: EditMode::Viewing, draft: task.title.clone() }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Removing a task is blocked while its title is being edited.
    pub fn can_remove(&self) -> bool {
        !self.is_editing()
    }

    pub fn start_edit(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }

        self.mode = EditMode::Editing;
        true
    }

    pub fn set_draft(&mut self, text: &str) -> bool {
        if !self.is_editing() || self.draft == text {
            return false;
        }

        self.draft = text.into();
        true
    }

    pub fn cancel(&mut self, task: &TaskModel) -> bool {
        if !self.is_editing() {
            return false;
        }

        self.mode = EditMode::Viewing;
        self.draft = task.title.clone();
        true
    }

    pub fn submit(&mut self, task: &TaskModel) -> Option<TaskEdit> {
        if !self.is_editing() {
            return None;
        }

        if is_blank(&self.draft) {
            self.cancel(task);
            return None;
        }

        self.mode = EditMode::Viewing;
        Some(TaskEdit { id: task.id, title: self.draft.clone() })
    }

    /// Follows title changes of the backing task. An edit in progress keeps its draft.
    pub fn sync(&mut self, task: &TaskModel) -> bool {
        if self.is_editing() || self.draft == task.title {
            return false;
        }

        self.draft = task.title.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvc::TaskId;

    fn test_task() -> TaskModel {
        TaskModel { id: TaskId(7), title: "Buy milk".into(), done: false }
    }

    #[test]
    fn test_initial_state() {
        let state = TaskItemState::new(&test_task());

        assert_eq!(state.mode(), EditMode::Viewing);
        assert_eq!(state.draft(), "Buy milk");
        assert!(state.can_remove());
    }

    #[test]
    fn test_start_edit_keeps_title() {
        let mut state = TaskItemState::new(&test_task());

        assert!(state.start_edit());
        assert!(state.is_editing());
        assert_eq!(state.draft(), "Buy milk");
        assert!(!state.can_remove());
        assert!(!state.start_edit());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let task = test_task();
        let mut state = TaskItemState::new(&task);

        state.start_edit();
        assert!(state.set_draft("Bread"));
        assert!(state.cancel(&task));

        assert_eq!(state.mode(), EditMode::Viewing);
        assert_eq!(state.draft(), "Buy milk");
        assert!(state.can_remove());
    }

    #[test]
    fn test_submit_emits_edit() {
        let task = test_task();
        let mut state = TaskItemState::new(&task);

        state.start_edit();
        state.set_draft("Bread");

        assert_eq!(state.submit(&task), Some(TaskEdit { id: TaskId(7), title: "Bread".into() }));
        assert_eq!(state.mode(), EditMode::Viewing);
        assert_eq!(state.draft(), "Bread");
        assert!(state.can_remove());
    }

    #[test]
    fn test_submit_blank_draft_cancels() {
        let task = test_task();
        let mut state = TaskItemState::new(&task);

        state.start_edit();
        state.set_draft("  ");

        assert_eq!(state.submit(&task), None);
        assert_eq!(state, TaskItemState::new(&task));
    }

    #[test]
    fn test_events_ignored_while_viewing() {
        let task = test_task();
        let mut state = TaskItemState::new(&task);

        assert!(!state.set_draft("Bread"));
        assert!(!state.cancel(&task));
        assert_eq!(state.submit(&task), None);
        assert_eq!(state, TaskItemState::new(&task));
    }

    #[test]
    fn test_sync() {
        let task = test_task();
        let renamed = TaskModel { title: "Bread".into(), ..task.clone() };

        let mut viewing = TaskItemState::new(&task);
        assert!(viewing.sync(&renamed));
        assert_eq!(viewing.draft(), "Bread");

        let mut editing = TaskItemState::new(&task);
        editing.start_edit();
        editing.set_draft("Cheese");
        assert!(!editing.sync(&renamed));
        assert_eq!(editing.draft(), "Cheese");
    }
}
