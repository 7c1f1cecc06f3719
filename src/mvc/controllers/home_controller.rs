// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::mvc::{
    traits::TaskIdRepository, AddTaskError, PromptModel, RemoveChoice, TaskEdit, TaskId, TaskList,
};
use crate::Callback;

/// Owns the task collection of the home screen.
///
/// Each mutation replaces the collection with a new [`TaskList`] and, when the value
/// changed, reports it through [`HomeController::on_tasks_changed`].
#[derive(Clone)]
pub struct HomeController<R: TaskIdRepository> {
    repo: R,
    tasks: Rc<RefCell<TaskList>>,
    pending_removal: Rc<Cell<Option<TaskId>>>,
    tasks_changed_callback: Rc<Callback<TaskList>>,
    alert_callback: Rc<Callback<PromptModel>>,
    confirm_remove_callback: Rc<Callback<PromptModel>>,
}

impl<R: TaskIdRepository> HomeController<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: Rc::new(RefCell::new(TaskList::default())),
            pending_removal: Rc::new(Cell::new(None)),
            tasks_changed_callback: Rc::new(Callback::default()),
            alert_callback: Rc::new(Callback::default()),
            confirm_remove_callback: Rc::new(Callback::default()),
        }
    }

    pub fn tasks(&self) -> TaskList {
        self.tasks.borrow().clone()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Returns `true` if the task was added. A duplicate title raises the alert instead.
    pub fn add_task(&self, title: &str) -> bool {
        let next = {
            let tasks = self.tasks.borrow();

            // checked before asking for an id, so rejected titles don't consume one
            tasks.check_new_title(title).and_then(|()| tasks.with_task(self.repo.next_id(), title))
        };

        match next {
            Ok(next) => {
                log::debug!("added task {title:?}");
                self.replace_tasks(next);
                true
            }
            Err(AddTaskError::DuplicateTitle(title)) => {
                log::info!("rejected duplicate task {title:?}");
                self.alert_callback.invoke(&PromptModel::duplicate_task());
                false
            }
            Err(AddTaskError::EmptyTitle) => {
                log::debug!("ignored blank task title");
                false
            }
        }
    }

    pub fn toggle_done(&self, id: TaskId) {
        let next = self.tasks.borrow().with_done_toggled(id);
        self.replace_tasks(next);
    }

    pub fn edit_task(&self, edit: TaskEdit) {
        let next = self.tasks.borrow().with_edit(&edit);
        self.replace_tasks(next);
    }

    /// Asks the user to confirm removing `id`. Nothing is removed until
    /// [`HomeController::resolve_remove`] is called with [`RemoveChoice::Confirm`].
    pub fn request_remove(&self, id: TaskId) {
        if let Some(previous) = self.pending_removal.replace(Some(id)) {
            log::debug!("remove request for {previous:?} replaced by {id:?}");
        }

        self.confirm_remove_callback.invoke(&PromptModel::remove_task());
    }

    pub fn pending_removal(&self) -> Option<TaskId> {
        self.pending_removal.get()
    }

    pub fn resolve_remove(&self, choice: RemoveChoice) {
        let Some(id) = self.pending_removal.take() else {
            log::debug!("remove answered without a pending request");
            return;
        };

        if choice == RemoveChoice::Cancel {
            return;
        }

        let next = self.tasks.borrow().without(id);
        self.replace_tasks(next);
    }

    pub fn on_tasks_changed(&self, callback: impl FnMut(&TaskList) + 'static) {
        self.tasks_changed_callback.on(callback);
    }

    pub fn on_alert(&self, callback: impl FnMut(&PromptModel) + 'static) {
        self.alert_callback.on(callback);
    }

    pub fn on_confirm_remove(&self, callback: impl FnMut(&PromptModel) + 'static) {
        self.confirm_remove_callback.on(callback);
    }

    fn replace_tasks(&self, next: TaskList) {
        if *self.tasks.borrow() == next {
            log::debug!("task list unchanged");
            return;
        }

        self.tasks.replace(next.clone());
        self.tasks_changed_callback.invoke(&next);
    }
}
