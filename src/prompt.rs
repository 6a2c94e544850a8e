//! Interactive questions asked while a chain runs.
//!
//! Commands never read the terminal themselves; they ask a [`Prompt`]
//! provider. The binary passes a [`TerminalPrompt`], while tests and other
//! non-interactive callers pass a [`CannedPrompt`] holding prepared answers.

use std::collections::VecDeque;

use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::{Error, Res};

pub trait Prompt {
    /// Asks for a positive number, offering `default`.
    fn input_number(&mut self, message: &str, default: u32) -> Res<u32>;

    /// Asks for a non-empty line of text.
    fn input_text(&mut self, message: &str) -> Res<String>;

    /// Asks a yes/no question, offering `default`.
    fn confirm(&mut self, message: &str, default: bool) -> Res<bool>;
}

/// Asks on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompt for TerminalPrompt {
    fn input_number(&mut self, message: &str, default: u32) -> Res<u32> {
        Input::<u32>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .validate_with(|n: &u32| {
                if *n >= 1 {
                    Ok(())
                } else {
                    Err("must be at least 1")
                }
            })
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn input_text(&mut self, message: &str) -> Res<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Res<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}

/// Answers from prepared queues.
///
/// Numbers and confirmations fall back to the offered default once their
/// queue is empty. Text has no default, so an empty text queue is an error.
#[derive(Debug, Default, Clone)]
pub struct CannedPrompt {
    pub numbers: VecDeque<u32>,
    pub texts: VecDeque<String>,
    pub confirmations: VecDeque<bool>,
    /// Every question asked, in order.
    pub asked: Vec<String>,
}

impl CannedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.numbers.extend(numbers);
        self
    }

    pub fn with_texts<S: Into<String>>(mut self, texts: impl IntoIterator<Item = S>) -> Self {
        self.texts.extend(texts.into_iter().map(Into::into));
        self
    }

    pub fn with_confirmations(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations.extend(answers);
        self
    }
}

impl Prompt for CannedPrompt {
    fn input_number(&mut self, message: &str, default: u32) -> Res<u32> {
        self.asked.push(message.to_string());
        Ok(self.numbers.pop_front().unwrap_or(default))
    }

    fn input_text(&mut self, message: &str) -> Res<String> {
        self.asked.push(message.to_string());
        self.texts
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("no answer prepared for '{}'", message)))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Res<bool> {
        self.asked.push(message.to_string());
        Ok(self.confirmations.pop_front().unwrap_or(default))
    }
}
