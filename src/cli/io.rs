use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::core::CliError;

/// Supplies one line of user input per prompt.
pub trait LineSource {
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Whether the source draws the prompt itself.
    fn renders_prompt(&self) -> bool {
        false
    }
}

/// Interactive terminal prompts.
pub struct PromptSource {
    theme: ColorfulTheme,
}

impl PromptSource {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for PromptSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PromptSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        eof_as_none(answer)
    }

    fn renders_prompt(&self) -> bool {
        true
    }
}

/// Ctrl-D at a prompt ends input the same way a closed script does.
fn eof_as_none(answer: dialoguer::Result<String>) -> Result<Option<String>, CliError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Newline-separated answers read from any buffered reader, e.g. piped stdin.
pub struct ScriptSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }
}
