/// A single wizard step as seen by the selection core.
///
/// Steps are owned by the caller. The core only reads the flags and toggles
/// `selected` (and `disabled` during normalization).
pub trait WizardStep {
    /// Stable identifier used by header tabs and layout measurements.
    fn id(&self) -> u64;

    fn is_disabled(&self) -> bool;

    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);

    fn set_disabled(&mut self, disabled: bool);

    /// Label shown in the header tab.
    fn text(&self) -> &str {
        ""
    }

    /// Icon name shown in the header tab instead of the step number.
    fn icon(&self) -> Option<&str> {
        None
    }
}

/// Plain step data suitable for most wizards.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    id: u64,
    text: String,
    icon: Option<String>,
    disabled: bool,
    selected: bool,
}

impl Step {
    /// Create an enabled, unselected step without label or icon.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            text: String::new(),
            icon: None,
            disabled: false,
            selected: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl WizardStep for Step {
    fn id(&self) -> u64 {
        self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// Return the position of the step with `step_id`.
pub(crate) fn position_of<S: WizardStep>(
    steps: &[S],
    step_id: u64,
) -> Option<usize> {
    steps.iter().position(|step| step.id() == step_id)
}

/// Iterate over enabled steps in step order.
pub(crate) fn enabled_steps<S: WizardStep>(
    steps: &[S],
) -> impl Iterator<Item = &S> {
    steps.iter().filter(|step| !step.is_disabled())
}

/// Rank among enabled steps of the step at `index`.
///
/// Content panels and scroll boundaries exist only for enabled steps, so
/// they are addressed by rank rather than by position in `steps`.
pub(crate) fn enabled_rank<S: WizardStep>(
    steps: &[S],
    index: usize,
) -> Option<usize> {
    if steps.get(index)?.is_disabled() {
        return None;
    }
    Some(enabled_steps(&steps[..index]).count())
}

/// Position in `steps` of the enabled step with the given `rank`.
pub(crate) fn enabled_position<S: WizardStep>(
    steps: &[S],
    rank: usize,
) -> Option<usize> {
    steps
        .iter()
        .enumerate()
        .filter(|(_, step)| !step.is_disabled())
        .nth(rank)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_flags_and_labels() {
        let step = Step::new(7)
            .with_text("Connection")
            .with_icon("plug")
            .with_disabled(true)
            .with_selected(true);

        assert_eq!(step.id(), 7);
        assert_eq!(step.text(), "Connection");
        assert_eq!(step.icon(), Some("plug"));
        assert!(step.is_disabled());
        assert!(step.is_selected());
    }

    #[test]
    fn enabled_steps_skip_disabled_entries() {
        let steps = vec![
            Step::new(1),
            Step::new(2).with_disabled(true),
            Step::new(3),
        ];

        let ids: Vec<u64> = enabled_steps(&steps).map(|s| s.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(position_of(&steps, 3), Some(2));
        assert_eq!(position_of(&steps, 42), None);
    }

    #[test]
    fn rank_and_position_map_around_disabled_steps() {
        let steps = vec![
            Step::new(1),
            Step::new(2).with_disabled(true),
            Step::new(3),
        ];

        assert_eq!(enabled_rank(&steps, 0), Some(0));
        assert_eq!(enabled_rank(&steps, 1), None);
        assert_eq!(enabled_rank(&steps, 2), Some(1));
        assert_eq!(enabled_rank(&steps, 3), None);

        assert_eq!(enabled_position(&steps, 0), Some(0));
        assert_eq!(enabled_position(&steps, 1), Some(2));
        assert_eq!(enabled_position(&steps, 2), None);
    }
}
