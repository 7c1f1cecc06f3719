// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Content of a blocking dialog shown to the user.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct PromptModel {
    pub title: String,
    pub message: String,
}

impl PromptModel {
    pub fn duplicate_task() -> Self {
        Self {
            title: "Task já cadastrada".into(),
            message: "Você não pode cadastrar uma task com o mesmo nome".into(),
        }
    }

    pub fn remove_task() -> Self {
        Self {
            title: "Remover item".into(),
            message: "Tem certeza que você deseja remover esse item?".into(),
        }
    }
}

/// Answer to the remove confirmation: "Não" cancels, "Sim" confirms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveChoice {
    Cancel,
    Confirm,
}

impl From<bool> for RemoveChoice {
    fn from(accepted: bool) -> Self {
        if accepted {
            RemoveChoice::Confirm
        } else {
            RemoveChoice::Cancel
        }
    }
}
