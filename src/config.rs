use std::ops::RangeInclusive;

use iced::Size;

/// Inclusive range every generated value falls into.
pub const VALUE_RANGE: RangeInclusive<i64> = 10..=1000;
/// Maximum number of values shown in the text output.
pub const PREVIEW_LIMIT: usize = 200;
/// Counts above this need an explicit confirmation.
pub const CONFIRM_THRESHOLD: usize = 100_000;
pub const DEFAULT_FILE_NAME: &str = "numbers.txt";
pub const WINDOW_SIZE: Size = Size::new(720.0, 640.0);

/// Parameters the controller runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub range: RangeInclusive<i64>,
    pub preview_limit: usize,
    pub confirm_threshold: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            range: VALUE_RANGE,
            preview_limit: PREVIEW_LIMIT,
            confirm_threshold: CONFIRM_THRESHOLD,
        }
    }
}

impl GeneratorConfig {
    pub fn window_title(&self) -> String {
        format!(
            "Number Generator {}\u{2013}{}",
            self.range.start(),
            self.range.end()
        )
    }
}
