use crate::step::{WizardStep, enabled_steps};

/// Distance between the top of the content viewport and the point where a
/// step is considered finished.
pub const CONTENT_TOP_OFFSET: f32 = 80.0;

/// Laid out bounds of a content panel, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    pub top: f32,
    pub height: f32,
}

impl PanelBounds {
    pub fn bottom_edge(&self) -> f32 {
        self.top + self.height
    }
}

/// Measurement capability supplied by the rendering layer.
///
/// Only valid once layout for the current render pass is final.
pub trait LayoutProbe {
    fn measure(&self, step_id: u64) -> Option<PanelBounds>;
}

impl<F> LayoutProbe for F
where
    F: Fn(u64) -> Option<PanelBounds>,
{
    fn measure(&self, step_id: u64) -> Option<PanelBounds> {
        self(step_id)
    }
}

/// Scroll boundaries of the enabled steps, in step order.
///
/// `offsets[k]` is where enabled step `k` ends: its bottom edge minus the
/// content top offset.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOffsetIndex {
    offsets: Vec<f32>,
    content_top_offset: f32,
}

impl Default for StepOffsetIndex {
    fn default() -> Self {
        Self::new(CONTENT_TOP_OFFSET)
    }
}

impl StepOffsetIndex {
    pub fn new(content_top_offset: f32) -> Self {
        Self {
            offsets: Vec::new(),
            content_top_offset,
        }
    }

    /// Recompute boundaries from the current layout.
    pub fn rebuild<S, P>(&mut self, steps: &[S], probe: &P)
    where
        S: WizardStep,
        P: LayoutProbe + ?Sized,
    {
        self.offsets.clear();

        for step in enabled_steps(steps) {
            let boundary = match probe.measure(step.id()) {
                Some(bounds) => bounds.bottom_edge() - self.content_top_offset,
                None => {
                    log::warn!(
                        "wizard step {} has no layout; reusing previous \
                         boundary",
                        step.id()
                    );
                    self.offsets
                        .last()
                        .copied()
                        .unwrap_or(-self.content_top_offset)
                },
            };
            self.offsets.push(boundary);
        }
    }

    /// Content scroll position that brings the enabled step of `rank` into
    /// view.
    ///
    /// A step starts where the previous one ends, so the first step maps
    /// to the very top.
    pub fn scroll_target(&self, rank: usize) -> Option<f32> {
        match rank {
            0 => Some(0.0),
            _ => self.offsets.get(rank - 1).copied(),
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}

/// Layout of content panels with declared heights stacked top to bottom.
///
/// Matches what [`crate::WizardView`] renders: one fixed-height panel per
/// enabled step separated by `spacing`.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedPanels {
    panels: Vec<(u64, f32)>,
    spacing: f32,
}

impl StackedPanels {
    pub fn new(spacing: f32) -> Self {
        Self {
            panels: Vec::new(),
            spacing: spacing.max(0.0),
        }
    }

    /// Build the stack for the enabled steps using `height_of` per step.
    pub fn from_steps<S: WizardStep>(
        steps: &[S],
        spacing: f32,
        height_of: impl Fn(&S) -> f32,
    ) -> Self {
        let mut stack = Self::new(spacing);
        for step in enabled_steps(steps) {
            stack.push(step.id(), height_of(step));
        }
        stack
    }

    pub fn push(&mut self, step_id: u64, height: f32) {
        self.panels.push((step_id, height.max(0.0)));
    }

    /// Total content height, including spacing between panels.
    pub fn content_height(&self) -> f32 {
        let heights: f32 = self.panels.iter().map(|(_, height)| height).sum();
        let gaps = self.panels.len().saturating_sub(1) as f32;
        heights + gaps * self.spacing
    }
}

impl LayoutProbe for StackedPanels {
    fn measure(&self, step_id: u64) -> Option<PanelBounds> {
        let mut top = 0.0;
        for &(id, height) in &self.panels {
            if id == step_id {
                return Some(PanelBounds { top, height });
            }
            top += height + self.spacing;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    fn three_steps() -> Vec<Step> {
        vec![Step::new(1), Step::new(2), Step::new(3)]
    }

    #[test]
    fn rebuild_subtracts_content_top_offset_from_bottom_edges() {
        let steps = three_steps();
        let stack = StackedPanels::from_steps(&steps, 0.0, |_| 200.0);
        let mut index = StepOffsetIndex::default();

        index.rebuild(&steps, &stack);

        assert_eq!(index.as_slice(), &[120.0, 320.0, 520.0]);
    }

    #[test]
    fn rebuild_skips_disabled_steps() {
        let steps = vec![
            Step::new(1),
            Step::new(2),
            Step::new(3).with_disabled(true),
        ];
        let stack = StackedPanels::from_steps(&steps, 10.0, |_| 100.0);
        let mut index = StepOffsetIndex::new(0.0);

        index.rebuild(&steps, &stack);

        assert_eq!(index.len(), 2);
        assert_eq!(index.as_slice(), &[100.0, 210.0]);
    }

    #[test]
    fn rebuild_replaces_stale_offsets_after_resize() {
        let steps = three_steps();
        let mut index = StepOffsetIndex::new(0.0);

        let stack = StackedPanels::from_steps(&steps, 0.0, |_| 50.0);
        index.rebuild(&steps, &stack);
        assert_eq!(index.as_slice(), &[50.0, 100.0, 150.0]);

        let stack = StackedPanels::from_steps(&steps, 0.0, |_| 80.0);
        index.rebuild(&steps, &stack);
        assert_eq!(index.as_slice(), &[80.0, 160.0, 240.0]);
    }

    #[test]
    fn unmeasured_step_reuses_previous_boundary() {
        let steps = three_steps();
        let probe = |step_id: u64| match step_id {
            1 => Some(PanelBounds {
                top: 0.0,
                height: 180.0,
            }),
            3 => Some(PanelBounds {
                top: 180.0,
                height: 100.0,
            }),
            _ => None,
        };
        let mut index = StepOffsetIndex::default();

        index.rebuild(&steps, &probe);

        assert_eq!(index.as_slice(), &[100.0, 100.0, 200.0]);
    }

    #[test]
    fn scroll_target_uses_previous_boundary() {
        let steps = three_steps();
        let mut index = StepOffsetIndex::new(0.0);
        let stack = StackedPanels::from_steps(&steps, 0.0, |_| 100.0);
        index.rebuild(&steps, &stack);

        assert_eq!(index.scroll_target(0), Some(0.0));
        assert_eq!(index.scroll_target(1), Some(100.0));
        assert_eq!(index.scroll_target(2), Some(200.0));
        assert_eq!(index.scroll_target(3), Some(300.0));
        assert_eq!(index.scroll_target(4), None);
    }

    #[test]
    fn stacked_panels_report_content_height() {
        let mut stack = StackedPanels::new(12.0);
        stack.push(1, 100.0);
        stack.push(2, 50.0);

        assert_eq!(stack.content_height(), 162.0);
        assert_eq!(
            stack.measure(2),
            Some(PanelBounds {
                top: 112.0,
                height: 50.0,
            })
        );
        assert_eq!(stack.measure(9), None);
    }
}
