// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod clock_task_id_repository;
pub use clock_task_id_repository::*;

mod mock_task_id_repository;
pub use mock_task_id_repository::*;

pub mod traits;

pub fn task_id_repo() -> impl traits::TaskIdRepository + Clone {
    ClockTaskIdRepository::default()
}
