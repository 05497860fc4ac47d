use std::time::Instant;

use crate::debounce::ScrollDebouncer;
use crate::offsets::{LayoutProbe, StepOffsetIndex};
use crate::resolver::resolve;
use crate::selection::{Normalized, SelectionState, normalize};
use crate::settings::WizardSettings;
use crate::step::{
    WizardStep, enabled_position, enabled_rank, position_of,
};

/// Whether a scroll settle is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    AwaitingScrollSettle,
}

/// Origin of the most recent programmatic or user scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollIntent {
    /// Scroll events reflect the user.
    #[default]
    User,
    /// A click moved the content; the next scroll event is its echo.
    ClickEcho,
    /// Scrolling committed the selection; the next layout pass must not
    /// pull the content back to the step start.
    ScrollCommitted,
}

/// Effects requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEffect {
    /// Selection moved between steps through user interaction.
    SelectionChanged {
        selected_step: u64,
        previously_selected_step: u64,
        selected_index: usize,
    },
    /// Content viewport should scroll to `offset`.
    ScrollTo { offset: f32 },
}

/// How a content scroll event was handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// The event was the echo of a click-driven scroll and was dropped.
    EchoSuppressed,
    /// A settle is pending; the host should tick the controller at or after
    /// `deadline`.
    SettleScheduled { deadline: Instant },
}

/// Selection state machine shared by header clicks and content scrolling.
///
/// One controller belongs to one wizard. Steps stay owned by the caller and
/// are passed into every transition.
#[derive(Debug, Clone)]
pub struct SelectionController {
    selection: SelectionState,
    offsets: StepOffsetIndex,
    debouncer: ScrollDebouncer,
    intent: ScrollIntent,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(&WizardSettings::default())
    }
}

impl SelectionController {
    pub fn new(settings: &WizardSettings) -> Self {
        Self {
            selection: SelectionState::Unselected,
            offsets: StepOffsetIndex::new(settings.content_top_offset),
            debouncer: ScrollDebouncer::new(settings.scroll_debounce()),
            intent: ScrollIntent::User,
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn offsets(&self) -> &StepOffsetIndex {
        &self.offsets
    }

    pub fn intent(&self) -> ScrollIntent {
        self.intent
    }

    pub fn debouncer(&self) -> &ScrollDebouncer {
        &self.debouncer
    }

    pub fn phase(&self) -> ControllerPhase {
        if self.debouncer.is_pending() {
            ControllerPhase::AwaitingScrollSettle
        } else {
            ControllerPhase::Idle
        }
    }

    /// Normalize step flags at the start of a render pass.
    pub fn sync_selection<S: WizardStep>(
        &mut self,
        steps: &mut [S],
    ) -> Normalized {
        let normalized = normalize(steps);
        self.selection = normalized.state;
        normalized
    }

    /// Rebuild offsets once layout is final and re-align the viewport.
    pub fn on_layout_settled<S, P>(
        &mut self,
        steps: &[S],
        probe: &P,
    ) -> Vec<SelectionEffect>
    where
        S: WizardStep,
        P: LayoutProbe + ?Sized,
    {
        if steps.is_empty() {
            self.offsets.clear();
            self.intent = ScrollIntent::User;
            return Vec::new();
        }

        self.offsets.rebuild(steps, probe);

        let mut effects = Vec::new();
        if self.intent == ScrollIntent::ScrollCommitted {
            self.intent = ScrollIntent::User;
        } else if let Some(effect) = self.scroll_to_selected(steps) {
            effects.push(effect);
        }

        effects
    }

    /// Handle a press on the header tab of `step_id`.
    pub fn on_tab_clicked<S: WizardStep>(
        &mut self,
        steps: &mut [S],
        step_id: u64,
    ) -> Vec<SelectionEffect> {
        let Some(target) = position_of(steps, step_id) else {
            log::trace!("wizard tab {step_id} is unknown; ignoring click");
            return Vec::new();
        };

        if steps[target].is_disabled() {
            log::trace!("wizard tab {step_id} is disabled; ignoring click");
            return Vec::new();
        }

        if self.selected_index() == Some(target) {
            return self.scroll_to_selected(steps).into_iter().collect();
        }

        let Some(changed) = self.switch_selection(steps, target) else {
            return Vec::new();
        };

        // Committing the selection scrolls the content; that scroll must not
        // be read back as user intent.
        self.intent = ScrollIntent::ClickEcho;
        self.debouncer.cancel();

        let mut effects = vec![changed];
        effects.extend(self.scroll_to_selected(steps));
        effects
    }

    /// Handle a content scroll event reported by the viewport.
    pub fn on_content_scrolled(
        &mut self,
        scroll_top: f32,
        now: Instant,
    ) -> ScrollOutcome {
        if self.intent == ScrollIntent::ClickEcho {
            log::trace!("wizard scroll to {scroll_top} is a click echo");
            self.intent = ScrollIntent::User;
            return ScrollOutcome::EchoSuppressed;
        }

        let deadline = self.debouncer.push(scroll_top, now);
        ScrollOutcome::SettleScheduled { deadline }
    }

    /// Settle a pending scroll once its quiet period has elapsed.
    pub fn on_tick<S: WizardStep>(
        &mut self,
        steps: &mut [S],
        now: Instant,
    ) -> Vec<SelectionEffect> {
        let Some(scroll_top) = self.debouncer.poll(now) else {
            return Vec::new();
        };

        if steps.is_empty() {
            return Vec::new();
        }

        // Boundaries are kept per enabled step, so resolution yields a rank.
        let rank = resolve(scroll_top, self.offsets.as_slice());
        let Some(resolved) = enabled_position(steps, rank) else {
            log::trace!(
                "wizard scroll to {scroll_top} resolved to unusable rank \
                 {rank}"
            );
            return Vec::new();
        };

        if self.selected_index() == Some(resolved) {
            return Vec::new();
        }

        match self.switch_selection(steps, resolved) {
            Some(changed) => {
                self.intent = ScrollIntent::ScrollCommitted;
                vec![changed]
            },
            None => Vec::new(),
        }
    }

    /// Release the pending settle when the wizard goes away.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
        self.intent = ScrollIntent::User;
    }

    fn switch_selection<S: WizardStep>(
        &mut self,
        steps: &mut [S],
        target: usize,
    ) -> Option<SelectionEffect> {
        let current = self
            .selected_index()
            .filter(|&index| index < steps.len() && steps[index].is_selected())
            .or_else(|| steps.iter().position(|step| step.is_selected()))?;

        steps[current].set_selected(false);
        steps[target].set_selected(true);
        self.selection = SelectionState::Selected(target);

        let changed = SelectionEffect::SelectionChanged {
            selected_step: steps[target].id(),
            previously_selected_step: steps[current].id(),
            selected_index: target,
        };
        log::debug!("wizard selection changed: {changed:?}");

        Some(changed)
    }

    fn scroll_to_selected<S: WizardStep>(
        &self,
        steps: &[S],
    ) -> Option<SelectionEffect> {
        let rank = enabled_rank(steps, self.selected_index()?)?;
        self.offsets
            .scroll_target(rank)
            .map(|offset| SelectionEffect::ScrollTo { offset })
    }
}
