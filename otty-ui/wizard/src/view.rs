use iced::widget::{
    Column, Row, Space, container, mouse_area, operation, scrollable, text,
};
use iced::{Color, Element, Length, Task, alignment, mouse};

use crate::header::{HeaderTab, header_tabs};
use crate::offsets::StackedPanels;
use crate::step::WizardStep;

/// Scrollable id of the wizard content area.
pub const CONTENT_SCROLL_ID: &str = "otty_wizard_content";

pub(crate) const DEFAULT_PANEL_HEIGHT: f32 = 320.0;
const SEPARATOR_WIDTH: f32 = 24.0;
const TAB_PADDING: [u16; 2] = [6, 10];

/// Colors used by the default header rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WizardPalette {
    pub foreground: Color,
    pub dim_foreground: Color,
    pub accent: Color,
    pub separator: Color,
}

impl Default for WizardPalette {
    fn default() -> Self {
        Self {
            foreground: Color::from_rgb(0.9, 0.9, 0.9),
            dim_foreground: Color::from_rgb(0.5, 0.5, 0.5),
            accent: Color::from_rgb(0.12, 0.46, 0.82),
            separator: Color::from_rgb(0.3, 0.3, 0.3),
        }
    }
}

/// Rendering context passed to panel callbacks.
pub struct PanelContext<'a, S: WizardStep> {
    pub step: &'a S,
    /// Position of the step in the full collection.
    pub index: usize,
    pub is_selected: bool,
}

type PanelRenderer<'a, S, Message> =
    dyn Fn(&PanelContext<'a, S>) -> Element<'a, Message> + 'a;
type TabRenderer<'a, Message> = dyn Fn(&HeaderTab) -> Element<'a, Message> + 'a;
type PanelHeight<'a, S> = dyn Fn(&S) -> f32 + 'a;
type TabAction<'a, Message> = dyn Fn(u64) -> Message + 'a;
type ScrollAction<'a, Message> = dyn Fn(f32) -> Message + 'a;

/// Header of step tabs above a scrollable column of step panels.
///
/// Panels get fixed heights from [`WizardView::panel_height`] so the
/// matching [`StackedPanels`] layout can be computed without measuring the
/// rendered tree.
pub struct WizardView<'a, S: WizardStep, Message: Clone + 'a> {
    steps: &'a [S],
    selected_index: Option<usize>,
    phone_mode: bool,
    palette: WizardPalette,
    render_panel: Box<PanelRenderer<'a, S, Message>>,
    render_tab: Option<Box<TabRenderer<'a, Message>>>,
    panel_height: Box<PanelHeight<'a, S>>,
    on_tab_press: Option<Box<TabAction<'a, Message>>>,
    on_scroll: Option<Box<ScrollAction<'a, Message>>>,
    spacing: f32,
    scroll_id: &'static str,
}

impl<'a, S, Message> WizardView<'a, S, Message>
where
    S: WizardStep + 'a,
    Message: Clone + 'a,
{
    /// Create a wizard view that renders each panel using `render_panel`.
    pub fn new(
        steps: &'a [S],
        render_panel: impl Fn(&PanelContext<'a, S>) -> Element<'a, Message> + 'a,
    ) -> Self {
        Self {
            steps,
            selected_index: None,
            phone_mode: false,
            palette: WizardPalette::default(),
            render_panel: Box::new(render_panel),
            render_tab: None,
            panel_height: Box::new(|_| DEFAULT_PANEL_HEIGHT),
            on_tab_press: None,
            on_scroll: None,
            spacing: 0.0,
            scroll_id: CONTENT_SCROLL_ID,
        }
    }

    /// Provide the selected step index used for tab focus.
    pub fn selected_index(mut self, index: Option<usize>) -> Self {
        self.selected_index = index;
        self
    }

    /// Render the compact header.
    pub fn phone_mode(mut self, phone_mode: bool) -> Self {
        self.phone_mode = phone_mode;
        self
    }

    pub fn palette(mut self, palette: WizardPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the default header tab rendering.
    pub fn render_tab(
        mut self,
        render_tab: impl Fn(&HeaderTab) -> Element<'a, Message> + 'a,
    ) -> Self {
        self.render_tab = Some(Box::new(render_tab));
        self
    }

    /// Height of each step panel.
    pub fn panel_height(
        mut self,
        panel_height: impl Fn(&S) -> f32 + 'a,
    ) -> Self {
        self.panel_height = Box::new(panel_height);
        self
    }

    /// Emit a message when an enabled header tab is pressed.
    pub fn on_tab_press(
        mut self,
        on_tab_press: impl Fn(u64) -> Message + 'a,
    ) -> Self {
        self.on_tab_press = Some(Box::new(on_tab_press));
        self
    }

    /// Emit a message with the content scroll top on every scroll.
    pub fn on_scroll(mut self, on_scroll: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_scroll = Some(Box::new(on_scroll));
        self
    }

    /// Vertical spacing between panels.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Use a custom scrollable id, for several wizards on one screen.
    pub fn scroll_id(mut self, scroll_id: &'static str) -> Self {
        self.scroll_id = scroll_id;
        self
    }

    /// Layout matching the panels this view renders.
    pub fn layout(&self) -> StackedPanels {
        StackedPanels::from_steps(self.steps, self.spacing, |step| {
            (self.panel_height)(step)
        })
    }

    /// Build the `Element` for the wizard.
    pub fn view(self) -> Element<'a, Message> {
        let header = self.header();

        let mut panels = Column::new().spacing(self.spacing);
        for (index, step) in self.steps.iter().enumerate() {
            if step.is_disabled() {
                continue;
            }

            let context = PanelContext {
                step,
                index,
                is_selected: step.is_selected(),
            };
            let panel = container((self.render_panel)(&context))
                .width(Length::Fill)
                .height(Length::Fixed((self.panel_height)(step).max(0.0)));
            panels = panels.push(panel);
        }

        let mut content = scrollable::Scrollable::new(panels)
            .id(self.scroll_id)
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(on_scroll) = self.on_scroll {
            content = content.on_scroll(move |viewport| {
                on_scroll(viewport.absolute_offset().y)
            });
        }

        Column::new()
            .push(header)
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn header(&self) -> Element<'a, Message> {
        let tabs =
            header_tabs(self.steps, self.selected_index, self.phone_mode);
        let mut row = Row::new().align_y(alignment::Vertical::Center);

        for tab in &tabs {
            let content = match self.render_tab {
                Some(ref render_tab) => render_tab(tab),
                None => default_tab(tab, &self.palette),
            };

            let content: Element<'a, Message> = match self.on_tab_press {
                Some(ref on_tab_press) if !tab.disabled => mouse_area(content)
                    .on_press(on_tab_press(tab.step_id))
                    .interaction(mouse::Interaction::Pointer)
                    .into(),
                _ => content,
            };

            let width = if tab.stretch {
                Length::Fill
            } else {
                Length::Shrink
            };
            row = row.push(container(content).width(width));

            if !tab.hide_separator {
                row = row.push(separator(tab.active_separator, &self.palette));
            }
        }

        container(row).width(Length::Fill).into()
    }
}

fn default_tab<'a, Message: 'a>(
    tab: &HeaderTab,
    palette: &WizardPalette,
) -> Element<'a, Message> {
    let color = if tab.selected {
        palette.accent
    } else if tab.disabled {
        palette.dim_foreground
    } else {
        palette.foreground
    };

    let marker = match tab.icon {
        Some(ref icon) => icon.clone(),
        None => tab.initials(),
    };

    let mut row = Row::new()
        .spacing(6)
        .align_y(alignment::Vertical::Center)
        .push(text(marker).color(color));
    if !tab.text.is_empty() {
        row = row.push(text(tab.text.clone()).color(color));
    }

    container(row).padding(TAB_PADDING).into()
}

fn separator<'a, Message: 'a>(
    active: bool,
    palette: &WizardPalette,
) -> Element<'a, Message> {
    let color = if active {
        palette.accent
    } else {
        palette.separator
    };

    container(Space::new().width(Length::Fixed(SEPARATOR_WIDTH)))
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

/// Task scrolling the wizard content to `offset`.
pub fn scroll_content_to<Message: Send + 'static>(
    scroll_id: &'static str,
    offset: f32,
) -> Task<Message> {
    operation::scroll_to(
        scroll_id,
        scrollable::AbsoluteOffset {
            x: 0.0,
            y: offset.max(0.0),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offsets::LayoutProbe;
    use crate::step::Step;

    #[derive(Debug, Clone)]
    enum Message {
        Tab(u64),
    }

    fn render_panel<'a>(
        context: &PanelContext<'a, Step>,
    ) -> Element<'a, Message> {
        text(context.step.text().to_owned()).into()
    }

    #[test]
    fn layout_matches_rendered_panels() {
        let steps = vec![
            Step::new(1).with_text("One"),
            Step::new(2).with_text("Two").with_disabled(true),
            Step::new(3).with_text("Three"),
        ];

        let view = WizardView::new(&steps, render_panel)
            .on_tab_press(Message::Tab)
            .panel_height(|step| if step.id() == 1 { 150.0 } else { 90.0 })
            .spacing(10.0);
        let layout = view.layout();

        assert_eq!(layout.content_height(), 250.0);
        assert_eq!(layout.measure(2), None);
        assert_eq!(layout.measure(3).map(|b| b.top), Some(160.0));
    }
}
