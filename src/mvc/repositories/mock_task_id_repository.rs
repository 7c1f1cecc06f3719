// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::Cell, rc::Rc};

use super::traits;
use crate::mvc::TaskId;

/// Deterministic ids: `first`, `first + 1`, ...
#[derive(Clone)]
pub struct MockTaskIdRepository {
    next: Rc<Cell<i64>>,
}

impl MockTaskIdRepository {
    pub fn new(first: i64) -> Self {
        Self { next: Rc::new(Cell::new(first)) }
    }
}

impl traits::TaskIdRepository for MockTaskIdRepository {
    fn next_id(&self) -> TaskId {
        let id = self.next.get();
        self.next.set(id + 1);
        TaskId(id)
    }
}
