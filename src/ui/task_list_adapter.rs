// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    mvc::{traits::TaskIdRepository, HomeController, TaskRow, TaskRowsModel},
    ui,
};

pub fn connect<R: TaskIdRepository + Clone + 'static>(
    view_handle: &ui::MainWindow,
    controller: HomeController<R>,
    rows: TaskRowsModel,
) {
    rows.sync(&controller.tasks());
    ui::TaskListAdapter::get(view_handle)
        .set_tasks(Rc::new(MapModel::new(rows.clone(), map_row_to_item)).into());

    ui::TaskListAdapter::get(view_handle).on_toggle_task_done({
        let controller = controller.clone();
        let rows = rows.clone();

        move |index| {
            if let Some(id) = rows.task_id(index as usize) {
                controller.toggle_done(id);
            }
        }
    });

    ui::TaskListAdapter::get(view_handle).on_start_edit({
        let rows = rows.clone();

        move |index| {
            rows.start_edit(index as usize);
        }
    });

    ui::TaskListAdapter::get(view_handle).on_draft_edited({
        let rows = rows.clone();

        move |index, text| {
            rows.set_draft(index as usize, text.as_str());
        }
    });

    ui::TaskListAdapter::get(view_handle).on_cancel_edit({
        let rows = rows.clone();

        move |index| {
            rows.cancel_edit(index as usize);
        }
    });

    ui::TaskListAdapter::get(view_handle).on_submit_edit({
        let controller = controller.clone();
        let rows = rows.clone();

        move |index| {
            if let Some(edit) = rows.submit_edit(index as usize) {
                controller.edit_task(edit);
            }
        }
    });

    ui::TaskListAdapter::get(view_handle).on_remove_task({
        move |index| {
            let index = index as usize;

            if !rows.can_remove(index) {
                log::debug!("remove of row {index} ignored while editing");
                return;
            }

            if let Some(id) = rows.task_id(index) {
                controller.request_remove(id);
            }
        }
    });
}

// maps a TaskRow (data) to a TaskItemData (ui)
fn map_row_to_item(row: TaskRow) -> ui::TaskItemData {
    ui::TaskItemData {
        title: row.task.title.as_str().into(),
        draft: row.state.draft().into(),
        done: row.task.done,
        editing: row.state.is_editing(),
    }
}
