// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod prompt_model;
pub use prompt_model::{PromptModel, RemoveChoice};

mod task_model;
pub use task_model::{TaskEdit, TaskId, TaskModel};

mod task_list;
pub use task_list::{AddTaskError, TaskList};

mod task_item_state;
pub use task_item_state::{EditMode, TaskItemState};

mod task_rows_model;
pub use task_rows_model::{TaskRow, TaskRowsModel};
