// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::{TaskEdit, TaskId, TaskModel};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddTaskError {
    #[error("a task titled {0:?} already exists")]
    DuplicateTitle(String),
    #[error("task title is empty")]
    EmptyTitle,
}

/// Ordered task collection with value semantics.
///
/// Every mutation returns a new `TaskList` and leaves `self` untouched. Order is
/// insertion order and is never changed by any operation.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TaskList {
    tasks: Vec<TaskModel>,
}

impl TaskList {
    pub fn new(tasks: Vec<TaskModel>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskModel> {
        self.tasks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TaskModel> {
        self.tasks.get(index)
    }

    pub fn find(&self, id: TaskId) -> Option<&TaskModel> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }

    /// Checks whether a task titled `title` may be added. Blank titles are rejected before
    /// duplicates, so a blank title is never reported as a duplicate.
    pub fn check_new_title(&self, title: &str) -> Result<(), AddTaskError> {
        if is_blank(title) {
            return Err(AddTaskError::EmptyTitle);
        }

        if self.contains_title(title) {
            return Err(AddTaskError::DuplicateTitle(title.into()));
        }

        Ok(())
    }

    /// Appends a new, not yet done task. Titles are compared exactly.
    pub fn with_task(&self, id: TaskId, title: &str) -> Result<Self, AddTaskError> {
        self.check_new_title(title)?;

        let mut tasks = self.tasks.clone();
        tasks.push(TaskModel { id, title: title.into(), done: false });

        Ok(Self { tasks })
    }

    pub fn with_done_toggled(&self, id: TaskId) -> Self {
        self.map_task(id, |task| TaskModel { done: !task.done, ..task.clone() })
    }

    /// Applies `edit` without re-checking title uniqueness. A blank title leaves the list as is.
    pub fn with_edit(&self, edit: &TaskEdit) -> Self {
        if is_blank(&edit.title) {
            return self.clone();
        }

        self.map_task(edit.id, |task| TaskModel { title: edit.title.clone(), ..task.clone() })
    }

    pub fn without(&self, id: TaskId) -> Self {
        Self { tasks: self.tasks.iter().filter(|task| task.id != id).cloned().collect() }
    }

    fn map_task(&self, id: TaskId, f: impl Fn(&TaskModel) -> TaskModel) -> Self {
        Self {
            tasks: self
                .tasks
                .iter()
                .map(|task| if task.id == id { f(task) } else { task.clone() })
                .collect(),
        }
    }
}

pub(crate) fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}
