use std::time::Instant;

use iced::Task;

use super::event::{WizardEffect, WizardEvent, WizardIntent};
use super::state::WizardState;
use crate::controller::SelectionEffect;
use crate::view::scroll_content_to;

/// Reduce a wizard intent into state updates and effect tasks.
pub(super) fn reduce(
    state: &mut WizardState,
    intent: WizardIntent,
) -> Task<WizardEvent> {
    let effects = apply(state, intent, Instant::now());
    into_task(effects, state.scroll_id())
}

/// Apply an intent and collect the controller effects it produced.
pub(super) fn apply(
    state: &mut WizardState,
    intent: WizardIntent,
    now: Instant,
) -> Vec<SelectionEffect> {
    let mut effects = match intent {
        WizardIntent::TabPressed { step_id } => tab_pressed(state, step_id),
        WizardIntent::ContentScrolled { scroll_top } => {
            let (controller, _) = state.controller_and_steps();
            controller.on_content_scrolled(scroll_top, now);
            Vec::new()
        },
        WizardIntent::Tick(tick) => settle_scroll(state, tick),
        WizardIntent::Resized { width } => {
            if state.resize(width) {
                state.render_pass()
            } else {
                Vec::new()
            }
        },
        WizardIntent::SetSteps(steps) => {
            state.set_steps(steps);
            state.render_pass()
        },
        WizardIntent::GoToStep { step_id } => {
            if state.go_to_step(step_id) {
                state.render_pass()
            } else {
                Vec::new()
            }
        },
        WizardIntent::SetPanelHeight { step_id, height } => {
            state.set_panel_height(step_id, height);
            state.render_pass()
        },
        WizardIntent::Teardown => {
            let (controller, _) = state.controller_and_steps();
            controller.teardown();
            Vec::new()
        },
    };

    // A click scrolls immediately and the following render pass asks for
    // the same offset again.
    effects.dedup();
    effects
}

fn tab_pressed(state: &mut WizardState, step_id: u64) -> Vec<SelectionEffect> {
    let (controller, steps) = state.controller_and_steps();
    let mut effects = controller.on_tab_clicked(steps, step_id);
    if has_selection_change(&effects) {
        effects.extend(state.render_pass());
    }
    effects
}

fn settle_scroll(state: &mut WizardState, now: Instant) -> Vec<SelectionEffect> {
    let (controller, steps) = state.controller_and_steps();
    let mut effects = controller.on_tick(steps, now);
    if has_selection_change(&effects) {
        effects.extend(state.render_pass());
    }
    effects
}

fn has_selection_change(effects: &[SelectionEffect]) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, SelectionEffect::SelectionChanged { .. }))
}

fn into_task(
    effects: Vec<SelectionEffect>,
    scroll_id: &'static str,
) -> Task<WizardEvent> {
    if effects.is_empty() {
        return Task::none();
    }

    Task::batch(effects.into_iter().map(|effect| match effect {
        SelectionEffect::SelectionChanged {
            selected_step,
            previously_selected_step,
            ..
        } => Task::done(WizardEvent::Effect(WizardEffect::SelectionChanged {
            selected_step,
            previously_selected_step,
        })),
        SelectionEffect::ScrollTo { offset } => {
            scroll_content_to(scroll_id, offset)
        },
    }))
}
