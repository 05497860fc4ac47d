use std::time::Instant;

use crate::step::Step;

/// Intent events produced by the wizard view and its host.
#[derive(Debug, Clone)]
pub enum WizardIntent {
    // View input
    TabPressed {
        step_id: u64,
    },
    ContentScrolled {
        scroll_top: f32,
    },
    Tick(Instant),
    Resized {
        width: f32,
    },

    // Host commands
    SetSteps(Vec<Step>),
    /// Move to a step programmatically, enabling it if needed.
    GoToStep {
        step_id: u64,
    },
    SetPanelHeight {
        step_id: u64,
        height: f32,
    },
    Teardown,
}

/// Effect events produced by the wizard reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEffect {
    /// Selection changed by a tab press or by scrolling.
    SelectionChanged {
        selected_step: u64,
        previously_selected_step: u64,
    },
}

/// Wizard event stream routed through the host update loop.
#[derive(Debug, Clone)]
pub enum WizardEvent {
    /// Intent event reduced by the wizard widget.
    Intent(WizardIntent),
    /// Notification for the host.
    Effect(WizardEffect),
}
