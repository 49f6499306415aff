//! Interaction prompt (UI state)
//!
//! Host рисует prompt по `InteractPrompt`; симуляция только выставляет
//! видимость и title.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct InteractPrompt {
    pub visible: bool,
    pub title: String,
}

impl InteractPrompt {
    pub fn show(&mut self, title: &str) {
        self.visible = true;
        self.title.clear();
        self.title.push_str(title);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Event: игрок нажал interact на interactable (любом, не только оружии)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct Interacted {
    pub player: Entity,
    pub target: Entity,
}
