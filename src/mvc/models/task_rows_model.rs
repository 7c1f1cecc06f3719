// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use slint::{Model, ModelNotify, ModelTracker};

use super::{TaskEdit, TaskId, TaskItemState, TaskList, TaskModel};

/// A rendered task: the task itself plus the row-local editing state.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskRow {
    pub task: TaskModel,
    pub state: TaskItemState,
}

impl TaskRow {
    pub fn new(task: TaskModel) -> Self {
        let state = TaskItemState::new(&task);
        Self { task, state }
    }
}

// how the rows changed between two syncs
#[derive(Debug, PartialEq)]
enum RowsChange {
    Changed(Vec<usize>),
    Added { index: usize, changed: Vec<usize> },
    Removed(usize),
    Reset,
}

/// One row per task, keyed by task id.
///
/// Rows whose task survives a [`TaskRowsModel::sync`] keep their editing state; rows of
/// removed tasks are dropped and new tasks start in `Viewing` mode.
#[derive(Clone, Default)]
pub struct TaskRowsModel {
    rows: Rc<RefCell<Vec<TaskRow>>>,
    notify: Rc<ModelNotify>,
}

impl TaskRowsModel {
    pub fn sync(&self, tasks: &TaskList) {
        let next: Vec<TaskRow> = {
            let rows = self.rows.borrow();
            let states: HashMap<TaskId, &TaskItemState> =
                rows.iter().map(|row| (row.task.id, &row.state)).collect();

            tasks
                .iter()
                .map(|task| match states.get(&task.id) {
                    Some(state) => {
                        let mut state = (*state).clone();
                        state.sync(task);
                        TaskRow { task: task.clone(), state }
                    }
                    None => TaskRow::new(task.clone()),
                })
                .collect()
        };

        let previous = self.rows.replace(next);
        let change = diff_rows(&previous, &self.rows.borrow());

        match change {
            RowsChange::Changed(changed) => {
                changed.into_iter().for_each(|index| self.notify.row_changed(index))
            }
            RowsChange::Added { index, changed } => {
                changed.into_iter().for_each(|index| self.notify.row_changed(index));
                self.notify.row_added(index, self.row_count() - index);
            }
            RowsChange::Removed(index) => self.notify.row_removed(index, 1),
            RowsChange::Reset => self.notify.reset(),
        }
    }

    pub fn task_id(&self, index: usize) -> Option<TaskId> {
        self.rows.borrow().get(index).map(|row| row.task.id)
    }

    pub fn can_remove(&self, index: usize) -> bool {
        self.rows.borrow().get(index).is_some_and(|row| row.state.can_remove())
    }

    pub fn start_edit(&self, index: usize) -> bool {
        self.update_row(index, |row| row.state.start_edit())
    }

    pub fn set_draft(&self, index: usize, text: &str) -> bool {
        self.update_row(index, |row| row.state.set_draft(text))
    }

    pub fn cancel_edit(&self, index: usize) -> bool {
        self.update_row(index, |row| row.state.cancel(&row.task))
    }

    pub fn submit_edit(&self, index: usize) -> Option<TaskEdit> {
        let mut edit = None;

        // a blank draft leaves edit mode without an edit, which still changes the row
        self.update_row(index, |row| {
            let was_editing = row.state.is_editing();
            edit = row.state.submit(&row.task);
            was_editing
        });

        edit
    }

    fn update_row(&self, index: usize, f: impl FnOnce(&mut TaskRow) -> bool) -> bool {
        let changed = match self.rows.borrow_mut().get_mut(index) {
            Some(row) => f(row),
            None => false,
        };

        if changed {
            self.notify.row_changed(index);
        }

        changed
    }
}

impl Model for TaskRowsModel {
    type Data = TaskRow;

    fn row_count(&self) -> usize {
        self.rows.borrow().len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.rows.borrow().get(row).cloned()
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}

fn changed_rows(previous: &[TaskRow], next: &[TaskRow]) -> Vec<usize> {
    previous
        .iter()
        .zip(next)
        .enumerate()
        .filter(|(_, (previous, next))| previous != next)
        .map(|(index, _)| index)
        .collect()
}

fn same_ids(previous: &[TaskRow], next: &[TaskRow]) -> bool {
    previous.len() == next.len()
        && previous.iter().zip(next).all(|(previous, next)| previous.task.id == next.task.id)
}

fn diff_rows(previous: &[TaskRow], next: &[TaskRow]) -> RowsChange {
    if same_ids(previous, next) {
        return RowsChange::Changed(changed_rows(previous, next));
    }

    if next.len() > previous.len() && same_ids(previous, &next[..previous.len()]) {
        return RowsChange::Added {
            index: previous.len(),
            changed: changed_rows(previous, next),
        };
    }

    if next.len() + 1 == previous.len() {
        let index = previous
            .iter()
            .zip(next)
            .position(|(previous, next)| previous.task.id != next.task.id)
            .unwrap_or(next.len());

        if previous[..index] == next[..index] && previous[index + 1..] == next[index..] {
            return RowsChange::Removed(index);
        }
    }

    RowsChange::Reset
}
