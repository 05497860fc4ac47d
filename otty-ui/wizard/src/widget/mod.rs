pub(crate) mod event;
mod reducer;
mod state;

use iced::{Element, Subscription, Task};

pub use self::event::{WizardEffect, WizardEvent, WizardIntent};
use self::state::WizardState;
use crate::settings::WizardSettings;
use crate::step::{Step, WizardStep};
use crate::view::{PanelContext, WizardPalette, WizardView};

/// Wizard widget owning its steps and selection controller.
///
/// Hosts route [`WizardIntent`]s into [`WizardWidget::reduce`] and forward
/// [`WizardEffect`]s to whoever cares about selection changes.
pub struct WizardWidget {
    state: WizardState,
    palette: WizardPalette,
}

impl Default for WizardWidget {
    fn default() -> Self {
        Self::new(WizardSettings::default())
    }
}

impl WizardWidget {
    /// Create an empty wizard.
    pub fn new(settings: WizardSettings) -> Self {
        Self {
            state: WizardState::new(settings),
            palette: WizardPalette::default(),
        }
    }

    pub fn with_palette(mut self, palette: WizardPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Use a custom content scrollable id, for several wizards on one
    /// screen.
    pub fn with_scroll_id(mut self, scroll_id: &'static str) -> Self {
        self.state.set_scroll_id(scroll_id);
        self
    }

    /// Reduce a wizard intent into state updates and effect events.
    pub fn reduce(&mut self, intent: WizardIntent) -> Task<WizardEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Tick the controller while a scroll settle is pending.
    pub fn subscription(&self) -> Subscription<WizardIntent> {
        match self.state.settle_tick_interval() {
            Some(interval) => {
                iced::time::every(interval).map(WizardIntent::Tick)
            },
            None => Subscription::none(),
        }
    }

    /// Render the header and content panels.
    ///
    /// `on_intent` wraps wizard intents into the host message type.
    pub fn view<'a, Message, F>(
        &'a self,
        render_panel: impl Fn(&PanelContext<'a, Step>) -> Element<'a, Message>
        + 'a,
        on_intent: F,
    ) -> Element<'a, Message>
    where
        Message: Clone + 'a,
        F: Fn(WizardIntent) -> Message + Copy + 'a,
    {
        WizardView::new(self.state.steps(), render_panel)
            .selected_index(self.state.controller().selected_index())
            .phone_mode(self.state.is_phone_mode())
            .palette(self.palette)
            .panel_height(|step: &Step| self.state.panel_height(step.id()))
            .spacing(self.state.spacing())
            .scroll_id(self.state.scroll_id())
            .on_tab_press(move |step_id| {
                on_intent(WizardIntent::TabPressed { step_id })
            })
            .on_scroll(move |scroll_top| {
                on_intent(WizardIntent::ContentScrolled { scroll_top })
            })
            .view()
    }

    pub fn steps(&self) -> &[Step] {
        self.state.steps()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.controller().selected_index()
    }

    /// Return the selected step, if any.
    pub fn selected_step(&self) -> Option<&Step> {
        self.selected_index()
            .and_then(|index| self.state.steps().get(index))
    }

    pub fn is_phone_mode(&self) -> bool {
        self.state.is_phone_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CONTENT_SCROLL_ID;

    #[test]
    fn widgets_keep_their_own_scroll_ids() {
        let first = WizardWidget::default();
        let second = WizardWidget::default().with_scroll_id("second_wizard");

        assert_eq!(first.state.scroll_id(), CONTENT_SCROLL_ID);
        assert_eq!(second.state.scroll_id(), "second_wizard");
    }
}
