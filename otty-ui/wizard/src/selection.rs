use crate::step::WizardStep;

/// Which step is selected after a render pass.
///
/// `Unselected` only exists for an empty step collection; a non-empty
/// collection always normalizes to `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(usize),
}

impl SelectionState {
    pub fn index(self) -> Option<usize> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(index) => Some(index),
        }
    }
}

/// A flag change applied to a step during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMutation {
    pub step_id: u64,
    pub disabled: Option<bool>,
    pub selected: Option<bool>,
}

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalized {
    pub state: SelectionState,
    pub mutations: Vec<StepMutation>,
}

/// Force the step collection into exactly one selected, enabled step.
///
/// When nothing is selected, several steps are selected, or the single
/// selected step is disabled, selection falls back to the first step, which
/// is also enabled. Only flags that actually change are reported, so running
/// this twice yields no mutations the second time.
pub fn normalize<S: WizardStep>(steps: &mut [S]) -> Normalized {
    if steps.is_empty() {
        return Normalized::default();
    }

    let mut selected = steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step.is_selected())
        .map(|(index, _)| index);
    let first = selected.next();
    let has_more = selected.next().is_some();

    match first {
        Some(index) if !has_more && !steps[index].is_disabled() => Normalized {
            state: SelectionState::Selected(index),
            mutations: Vec::new(),
        },
        _ => select_first(steps),
    }
}

fn select_first<S: WizardStep>(steps: &mut [S]) -> Normalized {
    let mut mutations = Vec::new();

    for (index, step) in steps.iter_mut().enumerate() {
        let disabled = if index == 0 && step.is_disabled() {
            step.set_disabled(false);
            Some(false)
        } else {
            None
        };

        let wants_selected = index == 0;
        let selected = if step.is_selected() != wants_selected {
            step.set_selected(wants_selected);
            Some(wants_selected)
        } else {
            None
        };

        if disabled.is_some() || selected.is_some() {
            mutations.push(StepMutation {
                step_id: step.id(),
                disabled,
                selected,
            });
        }
    }

    log::debug!(
        "wizard selection normalized to first step ({} mutations)",
        mutations.len()
    );

    Normalized {
        state: SelectionState::Selected(0),
        mutations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    fn steps(flags: &[(bool, bool)]) -> Vec<Step> {
        flags
            .iter()
            .enumerate()
            .map(|(index, &(disabled, selected))| {
                Step::new(index as u64 + 1)
                    .with_disabled(disabled)
                    .with_selected(selected)
            })
            .collect()
    }

    fn selected_count(steps: &[Step]) -> usize {
        steps.iter().filter(|step| step.is_selected()).count()
    }

    #[test]
    fn empty_collection_is_noop() {
        let mut empty: Vec<Step> = Vec::new();
        assert_eq!(normalize(&mut empty), Normalized::default());
    }

    #[test]
    fn given_no_selection_when_normalized_then_first_step_selected() {
        let mut steps = steps(&[(false, false), (false, false), (true, false)]);
        let result = normalize(&mut steps);

        assert_eq!(result.state, SelectionState::Selected(0));
        assert!(steps[0].is_selected());
        assert_eq!(selected_count(&steps), 1);
        assert_eq!(
            result.mutations,
            vec![StepMutation {
                step_id: 1,
                disabled: None,
                selected: Some(true),
            }]
        );
    }

    #[test]
    fn given_multiple_selected_when_normalized_then_only_first_remains() {
        let mut steps = steps(&[(false, false), (false, true), (false, true)]);
        let result = normalize(&mut steps);

        assert_eq!(result.state, SelectionState::Selected(0));
        assert_eq!(selected_count(&steps), 1);
        assert!(steps[0].is_selected());
        assert_eq!(result.mutations.len(), 3);
    }

    #[test]
    fn given_disabled_selection_when_normalized_then_first_step_enabled() {
        let mut steps = steps(&[(true, false), (true, true)]);
        let result = normalize(&mut steps);

        assert_eq!(result.state, SelectionState::Selected(0));
        assert!(steps[0].is_selected());
        assert!(!steps[0].is_disabled());
        assert!(!steps[1].is_selected());
        assert!(steps[1].is_disabled());
    }

    #[test]
    fn single_valid_selection_is_kept() {
        let mut steps = steps(&[(false, false), (false, true), (true, false)]);
        let result = normalize(&mut steps);

        assert_eq!(result.state, SelectionState::Selected(1));
        assert!(result.mutations.is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let cases: [&[(bool, bool)]; 5] = [
            &[(false, false), (false, false)],
            &[(true, true), (false, true)],
            &[(true, false), (false, true), (false, true)],
            &[(false, false), (false, true)],
            &[(true, true)],
        ];

        for flags in cases {
            let mut steps = steps(flags);
            let first = normalize(&mut steps);
            let snapshot = steps.clone();
            let second = normalize(&mut steps);

            assert_eq!(first.state, second.state);
            assert!(second.mutations.is_empty());
            assert_eq!(steps, snapshot);
        }
    }

    #[test]
    fn exactly_one_enabled_step_is_selected_after_normalization() {
        let cases: [&[(bool, bool)]; 4] = [
            &[(true, false), (true, false), (true, false)],
            &[(false, true), (false, true), (false, true)],
            &[(false, false), (true, true), (false, false)],
            &[(false, false), (false, false), (false, true)],
        ];

        for flags in cases {
            let mut steps = steps(flags);
            let result = normalize(&mut steps);
            let index = result.state.index().expect("non-empty selection");

            assert_eq!(selected_count(&steps), 1);
            assert!(steps[index].is_selected());
            assert!(!steps[index].is_disabled());
        }
    }
}
