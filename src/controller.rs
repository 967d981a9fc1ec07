//! Application state and the handling of user actions.
//!
//! Each action runs to completion before the next one is read. An action
//! that aborts (bad input, a cancelled prompt, a failed write) leaves the
//! list, the text output and the chart exactly as they were.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chart::{ChartSurface, NumberChart};
use crate::config::GeneratorConfig;
use crate::error::{CountError, ExportError};
use crate::file::{save_numbers, with_default_extension};
use crate::generator::{generate, GenerationRequest, NumberList};
use crate::preview::preview;
use crate::prompt::{Confirmation, Notice, Prompter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate { raw_count: String, replace_even: bool },
    Clear,
    Save,
    Quit,
}

/// Whether the event loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A parsed count, flagged when it is above the confirmation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountInput {
    pub count: usize,
    pub needs_confirmation: bool,
}

pub fn parse_count(raw: &str, confirm_threshold: usize) -> Result<CountInput, CountError> {
    let n: i64 = raw.trim().parse().map_err(|_| CountError::NotAnInteger)?;
    if n <= 0 {
        return Err(CountError::NotPositive);
    }
    let count = usize::try_from(n).map_err(|_| CountError::NotAnInteger)?;
    Ok(CountInput {
        count,
        needs_confirmation: count > confirm_threshold,
    })
}

pub struct Controller {
    config: GeneratorConfig,
    rng: StdRng,
    numbers: NumberList,
    output: String,
    surface: ChartSurface,
}

impl Controller {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: GeneratorConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            numbers: NumberList::default(),
            output: String::new(),
            surface: ChartSurface::default(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn numbers(&self) -> &NumberList {
        &self.numbers
    }

    /// Contents of the text output.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn surface(&self) -> &ChartSurface {
        &self.surface
    }

    pub fn handle(&mut self, action: Action, prompter: &mut dyn Prompter) -> Flow {
        match action {
            Action::Generate {
                raw_count,
                replace_even,
            } => {
                self.generate(&raw_count, replace_even, prompter);
                Flow::Continue
            }
            Action::Clear => {
                self.clear();
                Flow::Continue
            }
            Action::Save => {
                self.save(prompter);
                Flow::Continue
            }
            Action::Quit => {
                tracing::info!("quit requested");
                Flow::Exit
            }
        }
    }

    fn generate(&mut self, raw_count: &str, replace_even: bool, prompter: &mut dyn Prompter) {
        let input = match parse_count(raw_count, self.config.confirm_threshold) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(input = raw_count, error = %e, "rejected count");
                prompter.notify(Notice::error("Error", e.to_string()));
                return;
            }
        };

        if input.needs_confirmation {
            let message = format!(
                "N is very large (>{}). Do you want to continue?",
                self.config.confirm_threshold
            );
            if prompter.confirm("Confirm", &message) == Confirmation::Cancelled {
                tracing::debug!(count = input.count, "large generation cancelled");
                return;
            }
        }

        let request = GenerationRequest {
            count: input.count,
            range: self.config.range.clone(),
            replace_even,
        };
        let numbers = generate(&request, &mut self.rng);
        let output = preview(&numbers, self.config.preview_limit);
        let chart = NumberChart::render(&numbers);

        self.numbers = numbers;
        self.output = output;
        drop(self.surface.attach(chart));
        tracing::info!(count = input.count, replace_even, "generated numbers");
    }

    fn clear(&mut self) {
        self.numbers = NumberList::default();
        self.output.clear();
        drop(self.surface.detach());
        tracing::info!("cleared");
    }

    fn save(&mut self, prompter: &mut dyn Prompter) {
        if self.numbers.is_empty() {
            prompter.notify(Notice::info("Info", ExportError::Empty.to_string()));
            return;
        }
        let Some(path) = prompter.choose_save_path() else {
            tracing::debug!("save cancelled");
            return;
        };
        let picked = path.clone();
        let path = with_default_extension(path);
        // the dialog only checked for an existing file under the name it returned
        if path != picked && path.exists() {
            let message = format!(
                "{} already exists. Do you want to replace it?",
                path.display()
            );
            if prompter.confirm("Confirm", &message) == Confirmation::Cancelled {
                tracing::debug!(path = %path.display(), "overwrite declined");
                return;
            }
        }

        match save_numbers(&path, &self.numbers) {
            Ok(()) => {
                tracing::info!(path = %path.display(), count = self.numbers.len(), "saved numbers");
                prompter.notify(Notice::info(
                    "Saved",
                    format!("Saved to: {}", path.display()),
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                prompter.notify(Notice::error(
                    "Error",
                    format!("Error while saving: {e}"),
                ));
            }
        }
    }
}
