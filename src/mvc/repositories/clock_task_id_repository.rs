// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::Cell, rc::Rc};

use super::traits;
use crate::mvc::TaskId;

/// Hands out the current time in milliseconds as task id.
///
/// Two tasks created within the same millisecond (or while the system clock goes
/// backwards) would collide, so the id is bumped past the last one handed out.
#[derive(Clone, Default)]
pub struct ClockTaskIdRepository {
    last_id: Rc<Cell<Option<i64>>>,
}

impl traits::TaskIdRepository for ClockTaskIdRepository {
    fn next_id(&self) -> TaskId {
        let id = next_after(self.last_id.get(), chrono::Utc::now().timestamp_millis());
        self.last_id.set(Some(id));
        TaskId(id)
    }
}

fn next_after(last_id: Option<i64>, now: i64) -> i64 {
    match last_id {
        Some(last_id) if now <= last_id => last_id + 1,
        _ => now,
    }
}
