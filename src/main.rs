#![windows_subsystem = "windows"]

mod app;
mod chart;
mod config;
mod controller;
mod error;
mod file;
mod generator;
mod preview;
mod prompt;
mod ui;

use app::App;
use iced::window;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("starting number chart");

    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: config::WINDOW_SIZE,
            resizable: true,
            exit_on_close_request: false,
            ..Default::default()
        })
        .run_with(App::new)
}
