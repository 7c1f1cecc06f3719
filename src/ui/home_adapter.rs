// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::{ComponentHandle, Global, SharedString};

use crate::{
    mvc::{traits::TaskIdRepository, HomeController, PromptModel, TaskRowsModel},
    ui,
};

// one place to implement connection between adapter (view) and controller
pub fn connect<R: TaskIdRepository + Clone + 'static>(
    view_handle: &ui::MainWindow,
    controller: HomeController<R>,
    rows: TaskRowsModel,
) {
    ui::HomeAdapter::get(view_handle)
        .set_counter_label(counter_label(controller.task_count()).into());

    controller.on_tasks_changed({
        let view_handle = view_handle.as_weak();

        move |tasks| {
            rows.sync(tasks);
            ui::HomeAdapter::get(&view_handle.unwrap())
                .set_counter_label(counter_label(tasks.len()).into());
        }
    });

    controller.on_alert({
        let view_handle = view_handle.as_weak();

        move |prompt| {
            let view = view_handle.unwrap();
            let adapter = ui::HomeAdapter::get(&view);
            adapter.set_alert(map_prompt_to_data(prompt));
            adapter.set_alert_visible(true);
        }
    });

    controller.on_confirm_remove({
        let view_handle = view_handle.as_weak();

        move |prompt| {
            let view = view_handle.unwrap();
            let adapter = ui::HomeAdapter::get(&view);
            adapter.set_confirm(map_prompt_to_data(prompt));
            adapter.set_confirm_visible(true);
        }
    });

    ui::HomeAdapter::get(view_handle).on_add_task({
        let view_handle = view_handle.as_weak();
        let controller = controller.clone();

        move |title| {
            if controller.add_task(title.as_str()) {
                ui::HomeAdapter::get(&view_handle.unwrap()).set_new_task_title(SharedString::new());
            }
        }
    });

    ui::HomeAdapter::get(view_handle).on_answer_remove({
        let view_handle = view_handle.as_weak();

        move |accepted| {
            ui::HomeAdapter::get(&view_handle.unwrap()).set_confirm_visible(false);
            controller.resolve_remove(accepted.into());
        }
    });
}

// example: "Você tem 1 tarefa", "Você tem 3 tarefas"
fn counter_label(count: usize) -> String {
    format!("Você tem {count} {}", if count == 1 { "tarefa" } else { "tarefas" })
}

fn map_prompt_to_data(prompt: &PromptModel) -> ui::PromptData {
    ui::PromptData { title: prompt.title.as_str().into(), message: prompt.message.as_str().into() }
}
