use env_logger::Env;
use iced::widget::{column, container, text};
use iced::{Element, Length, Subscription, Task};
use otty_ui_wizard::{
    PanelContext, Step, WizardEffect, WizardEvent, WizardIntent,
    WizardSettings, WizardStep, WizardWidget,
};

#[derive(Debug, Clone)]
enum Message {
    Wizard(WizardEvent),
}

struct AppState {
    wizard: WizardWidget,
}

impl AppState {
    fn new() -> (Self, Task<Message>) {
        let settings = WizardSettings::from_json(r#"{ "scroll_debounce_ms": 40 }"#)
            .unwrap_or_default();
        let mut wizard = WizardWidget::new(settings);

        let steps = vec![
            Step::new(1).with_text("Product type").with_selected(true),
            Step::new(2).with_text("Product information"),
            Step::new(3).with_text("Options"),
            Step::new(4).with_text("Pricing").with_icon("$"),
        ];
        let mut tasks = vec![wizard.reduce(WizardIntent::SetSteps(steps))];
        tasks.push(wizard.reduce(WizardIntent::SetPanelHeight {
            step_id: 2,
            height: 520.0,
        }));

        (
            Self { wizard },
            Task::batch(tasks).map(Message::Wizard),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Wizard(WizardEvent::Intent(intent)) => {
                self.wizard.reduce(intent).map(Message::Wizard)
            },
            Message::Wizard(WizardEvent::Effect(
                WizardEffect::SelectionChanged {
                    selected_step,
                    previously_selected_step,
                },
            )) => {
                log::info!(
                    "selection changed from {previously_selected_step} to \
                     {selected_step}"
                );
                Task::none()
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.wizard.view(render_panel, |intent| {
            Message::Wizard(WizardEvent::Intent(intent))
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        self.wizard
            .subscription()
            .map(|intent| Message::Wizard(WizardEvent::Intent(intent)))
    }
}

fn render_panel<'a>(context: &PanelContext<'a, Step>) -> Element<'a, Message> {
    let title = format!("{}. {}", context.index + 1, context.step.text());
    let body = if context.is_selected {
        "This step is selected."
    } else {
        "Scroll or press the header tab to select this step."
    };

    container(column![text(title).size(20), text(body)].spacing(8))
        .padding([12, 16])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(AppState::new, AppState::update, AppState::view)
        .subscription(AppState::subscription)
        .run()
}
