// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Session-unique task identifier, derived from the creation time in milliseconds.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub i64);

#[derive(Clone, Default, Debug, PartialEq)]
pub struct TaskModel {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

/// Command to set the title of the task `id` to `title`.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskEdit {
    pub id: TaskId,
    pub title: String,
}
