//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and drives the model. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Focus cycling, cursor movement and activation

mod input;
mod navigation;

use crate::model::AppModel;

pub struct AppController {
    pub(crate) model: AppModel,
}

impl AppController {
    pub fn new(model: AppModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit()
    }
}
