use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// Message categories used by the console helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
    Prompt,
    Section,
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Error => "[x]",
        MessageKind::Prompt => ">",
        MessageKind::Info | MessageKind::Section => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, color: bool) -> String {
    let text = message.to_string();
    let icon = icon(kind);
    let formatted = if icon.is_empty() {
        text
    } else {
        format!("{icon} {text}")
    };

    if !color {
        return formatted;
    }

    match kind {
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Prompt => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

/// Line-oriented writer for shell messages.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let formatted = apply_style(kind, message, self.color);
        match kind {
            MessageKind::Section => writeln!(self.out, "\n{formatted}"),
            _ => writeln!(self.out, "{formatted}"),
        }
    }

    pub fn info(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Info, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Error, message)
    }

    pub fn prompt(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Prompt, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Section, title)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
