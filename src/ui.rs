use crate::app::App;
use crate::app::Message;
use iced::{
    widget::{button, checkbox, column, container, row, scrollable, text, text_input},
    Alignment, Element, Length,
};
use plotters_iced::ChartWidget;

pub fn view(app: &App) -> Element<'_, Message> {
    let input_row = row![
        text("Count (N):"),
        text_input("e.g. 50", &app.count_input)
            .on_input(Message::CountChanged)
            .on_submit(Message::Generate)
            .width(Length::Fixed(100.0)),
        button("Generate").on_press(Message::Generate),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let replace_even = checkbox("Replace even (with 0)", app.replace_even)
        .on_toggle(Message::ReplaceEvenToggled);

    let output = container(
        scrollable(text(app.controller.output()).size(13)).width(Length::Fill),
    )
    .padding(8)
    .width(Length::Fill)
    .height(Length::Fixed(160.0))
    .style(container::bordered_box);

    let controls = row![
        button("Save to file").on_press(Message::Save),
        button("Clear").on_press(Message::Clear),
        button("Quit").on_press(Message::Quit),
    ]
    .spacing(10);

    column![
        input_row,
        replace_even,
        text(format!(
            "Result (first {} items):",
            app.controller.config().preview_limit
        )),
        output,
        text("Chart:"),
        chart_view(app),
        controls,
    ]
    .spacing(10)
    .padding(20)
    .into()
}

fn chart_view(app: &App) -> Element<'_, Message> {
    match app.controller.surface().chart() {
        Some(chart) => ChartWidget::new(chart.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("No chart yet.").size(14))
            .padding(30)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}
