use crate::step::{WizardStep, enabled_steps};

/// Widths at or below this value render the compact (phone) header.
pub const PHONE_BREAKPOINT: f32 = 559.0;

/// Return whether a wizard of `width` should use the compact header.
pub fn is_phone_width(width: f32, breakpoint: f32) -> bool {
    width <= breakpoint
}

/// Render data for one header tab.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderTab {
    pub step_id: u64,
    /// Label; empty in phone mode.
    pub text: String,
    pub icon: Option<String>,
    /// 1-based position, also shown when no icon is set.
    pub position: usize,
    pub size: usize,
    pub selected: bool,
    pub disabled: bool,
    pub hide_separator: bool,
    pub active_separator: bool,
    /// Only the selected tab takes part in the tab order.
    pub focusable: bool,
    /// The tab stretches to fill the remaining header width.
    pub stretch: bool,
}

impl HeaderTab {
    pub fn initials(&self) -> String {
        self.position.to_string()
    }
}

/// Project the steps into header tabs.
pub fn header_tabs<S: WizardStep>(
    steps: &[S],
    selected_index: Option<usize>,
    phone_mode: bool,
) -> Vec<HeaderTab> {
    let size = steps.len();
    let last_enabled = last_enabled_index(steps);

    steps
        .iter()
        .enumerate()
        .map(|(index, step)| HeaderTab {
            step_id: step.id(),
            text: if phone_mode {
                String::new()
            } else {
                step.text().to_owned()
            },
            icon: step.icon().map(str::to_owned),
            position: index + 1,
            size,
            selected: step.is_selected(),
            disabled: step.is_disabled(),
            hide_separator: index + 1 == size || phone_mode,
            active_separator: index < last_enabled,
            focusable: selected_index == Some(index),
            stretch: index == last_enabled,
        })
        .collect()
}

/// Index used for separator and stretch decisions.
///
/// The enabled count minus one, compared against positions in the full
/// collection. Matches the last enabled step while enabled steps lead.
pub fn last_enabled_index<S: WizardStep>(steps: &[S]) -> usize {
    enabled_steps(steps).count().saturating_sub(1)
}
