use std::collections::HashMap;
use std::time::Duration;

use crate::controller::{ControllerPhase, SelectionController, SelectionEffect};
use crate::header::is_phone_width;
use crate::offsets::StackedPanels;
use crate::settings::WizardSettings;
use crate::step::{Step, WizardStep};
use crate::view::{CONTENT_SCROLL_ID, DEFAULT_PANEL_HEIGHT};

const DEFAULT_PANEL_SPACING: f32 = 16.0;
/// Deadline checks per debounce window while a settle is pending.
const SETTLE_TICKS_PER_WINDOW: u32 = 5;
const MIN_SETTLE_TICK: Duration = Duration::from_millis(1);

/// Steps, layout inputs and the selection controller of one wizard.
#[derive(Debug, Clone)]
pub(super) struct WizardState {
    steps: Vec<Step>,
    controller: SelectionController,
    settings: WizardSettings,
    phone_mode: bool,
    panel_heights: HashMap<u64, f32>,
    spacing: f32,
    scroll_id: &'static str,
}

impl WizardState {
    pub(super) fn new(settings: WizardSettings) -> Self {
        Self {
            steps: Vec::new(),
            controller: SelectionController::new(&settings),
            settings,
            phone_mode: false,
            panel_heights: HashMap::new(),
            spacing: DEFAULT_PANEL_SPACING,
            scroll_id: CONTENT_SCROLL_ID,
        }
    }

    pub(super) fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub(super) fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub(super) fn scroll_id(&self) -> &'static str {
        self.scroll_id
    }

    pub(super) fn set_scroll_id(&mut self, scroll_id: &'static str) {
        self.scroll_id = scroll_id;
    }

    /// Cadence of settle ticks, or `None` while no settle is pending.
    ///
    /// Ticks run several times per window so a settle lands shortly after
    /// its deadline instead of up to a full window late.
    pub(super) fn settle_tick_interval(&self) -> Option<Duration> {
        if self.controller.phase() != ControllerPhase::AwaitingScrollSettle {
            return None;
        }

        let window = self.settings.scroll_debounce();
        Some((window / SETTLE_TICKS_PER_WINDOW).max(MIN_SETTLE_TICK))
    }

    pub(super) fn is_phone_mode(&self) -> bool {
        self.phone_mode
    }

    pub(super) fn spacing(&self) -> f32 {
        self.spacing
    }

    pub(super) fn panel_height(&self, step_id: u64) -> f32 {
        self.panel_heights
            .get(&step_id)
            .copied()
            .unwrap_or(DEFAULT_PANEL_HEIGHT)
    }

    pub(super) fn set_panel_height(&mut self, step_id: u64, height: f32) {
        self.panel_heights.insert(step_id, height.max(0.0));
    }

    pub(super) fn set_steps(&mut self, steps: Vec<Step>) {
        self.panel_heights
            .retain(|id, _| steps.iter().any(|step| step.id() == *id));
        self.steps = steps;
    }

    /// Select `step_id` exclusively and enable it.
    pub(super) fn go_to_step(&mut self, step_id: u64) -> bool {
        if !self.steps.iter().any(|step| step.id() == step_id) {
            return false;
        }

        for step in &mut self.steps {
            let is_target = step.id() == step_id;
            step.set_selected(is_target);
            if is_target {
                step.set_disabled(false);
            }
        }
        true
    }

    /// Update phone mode from the wizard width; returns whether it changed.
    pub(super) fn resize(&mut self, width: f32) -> bool {
        let phone_mode = is_phone_width(width, self.settings.phone_breakpoint);
        let changed = phone_mode != self.phone_mode;
        self.phone_mode = phone_mode;
        changed
    }

    pub(super) fn layout(&self) -> StackedPanels {
        StackedPanels::from_steps(&self.steps, self.spacing, |step| {
            self.panel_height(step.id())
        })
    }

    /// Normalize, lay out and settle, as one render pass.
    pub(super) fn render_pass(&mut self) -> Vec<SelectionEffect> {
        self.controller.sync_selection(&mut self.steps);
        let layout = self.layout();
        self.controller.on_layout_settled(&self.steps, &layout)
    }

    #[cfg(test)]
    pub(super) fn set_spacing_for_tests(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    pub(super) fn controller_and_steps(
        &mut self,
    ) -> (&mut SelectionController, &mut [Step]) {
        (&mut self.controller, &mut self.steps)
    }
}
