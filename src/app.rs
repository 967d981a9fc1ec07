use iced::{window, Element, Subscription, Task, Theme};

use crate::config::GeneratorConfig;
use crate::controller::{Action, Controller, Flow};
use crate::prompt::NativePrompter;

pub struct App {
    pub count_input: String,
    pub replace_even: bool,
    pub controller: Controller,
    prompter: NativePrompter,
}

#[derive(Debug, Clone)]
pub enum Message {
    CountChanged(String),
    ReplaceEvenToggled(bool),
    Generate,
    Clear,
    Save,
    Quit,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                count_input: String::new(),
                replace_even: false,
                controller: Controller::new(GeneratorConfig::default()),
                prompter: NativePrompter,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        self.controller.config().window_title()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let action = match message {
            Message::CountChanged(input) => {
                self.count_input = input;
                return Task::none();
            }
            Message::ReplaceEvenToggled(checked) => {
                self.replace_even = checked;
                return Task::none();
            }
            Message::Generate => Action::Generate {
                raw_count: self.count_input.clone(),
                replace_even: self.replace_even,
            },
            Message::Clear => Action::Clear,
            Message::Save => Action::Save,
            Message::Quit => Action::Quit,
        };

        match self.controller.handle(action, &mut self.prompter) {
            Flow::Continue => Task::none(),
            Flow::Exit => iced::exit(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        crate::ui::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // closing the window goes through the same path as the Quit button
        window::close_requests().map(|_| Message::Quit)
    }
}
