//! Step wizard selection core and a lightweight [`iced`] wizard widget.
//!
//! A wizard shows a header of step tabs above a vertically scrollable
//! column with one panel per enabled step. Pressing a tab and scrolling the
//! content both change the selected step, and each must ignore the scroll
//! echoes caused by the other.
//!
//! The crate is split into two layers:
//! - a UI-agnostic core ([`normalize`], [`StepOffsetIndex`], [`resolve`],
//!   [`ScrollDebouncer`], [`SelectionController`]) driven by explicit calls
//!   and returning [`SelectionEffect`]s;
//! - `iced` helpers ([`WizardView`], [`WizardWidget`]) that render the
//!   header and panels and turn effects into tasks.
//!
//! A render pass always runs in this order:
//! 1. [`SelectionController::sync_selection`] before layout;
//! 2. [`SelectionController::on_layout_settled`] once panel sizes are final;
//! 3. user input through [`SelectionController::on_tab_clicked`],
//!    [`SelectionController::on_content_scrolled`] and
//!    [`SelectionController::on_tick`].
//!
//! See `examples/wizard_view.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use otty_ui_wizard::{
//!     SelectionController, SelectionEffect, StackedPanels, Step,
//! };
//!
//! let mut steps = vec![Step::new(1), Step::new(2), Step::new(3)];
//! let mut controller = SelectionController::default();
//!
//! controller.sync_selection(&mut steps);
//! let layout = StackedPanels::from_steps(&steps, 0.0, |_| 200.0);
//! controller.on_layout_settled(&steps, &layout);
//!
//! let effects = controller.on_tab_clicked(&mut steps, 2);
//! assert!(matches!(
//!     effects[0],
//!     SelectionEffect::SelectionChanged { selected_step: 2, .. }
//! ));
//!
//! // The programmatic scroll comes back as a scroll event and is ignored.
//! let now = Instant::now();
//! controller.on_content_scrolled(120.0, now);
//! let later = now + Duration::from_millis(50);
//! assert!(controller.on_tick(&mut steps, later).is_empty());
//! ```

mod controller;
mod debounce;
mod errors;
mod header;
mod offsets;
mod resolver;
mod selection;
mod settings;
mod step;
mod view;
mod widget;

pub use controller::{
    ControllerPhase, ScrollIntent, ScrollOutcome, SelectionController,
    SelectionEffect,
};
pub use debounce::{DebounceState, SCROLL_DEBOUNCE_RATE, ScrollDebouncer};
pub use errors::WizardSettingsError;
pub use header::{
    HeaderTab, PHONE_BREAKPOINT, header_tabs, is_phone_width,
    last_enabled_index,
};
pub use offsets::{
    CONTENT_TOP_OFFSET, LayoutProbe, PanelBounds, StackedPanels,
    StepOffsetIndex,
};
pub use resolver::resolve;
pub use selection::{Normalized, SelectionState, StepMutation, normalize};
pub use settings::WizardSettings;
pub use step::{Step, WizardStep};
pub use view::{
    CONTENT_SCROLL_ID, PanelContext, WizardPalette, WizardView,
    scroll_content_to,
};
pub use widget::{WizardEffect, WizardEvent, WizardIntent, WizardWidget};
