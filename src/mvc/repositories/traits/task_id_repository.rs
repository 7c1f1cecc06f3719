// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::mvc::TaskId;

pub trait TaskIdRepository {
    /// Returns an id that was never returned before by this repository.
    fn next_id(&self) -> TaskId;
}
