//! Input handling utilities

use super::theme::{DefaultTheme, Theme};
use crate::error::{Error, Result};
use console::Term;
use dialoguer::Input;
use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of line-oriented answers to prompts
pub trait LineInput {
    /// Show `prompt` and block until a full line is entered
    ///
    /// The returned line has its trailing newline removed.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String>;
}

/// Interactive terminal input backed by dialoguer
pub struct TerminalInput {
    theme: DefaultTheme,
    term: Term,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            theme: DefaultTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String> {
        // Flush pending page output before dialoguer takes over the terminal
        out.flush()?;

        // The theme draws its own separator after the prompt
        let prompt = prompt.trim_end().trim_end_matches(':');

        Input::<String>::with_theme(self.theme.dialoguer_theme())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(map_prompt_error)
    }
}

fn map_prompt_error(err: dialoguer::Error) -> Error {
    match err {
        // console reports Ctrl+C in raw mode as an interrupted read
        dialoguer::Error::IO(io_err) => Error::from_prompt_io(io_err),
    }
}

/// Plain line reader for pipes and scripted sessions
pub struct ReaderInput<R> {
    reader: R,
    echo_newline: bool,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_newline: true,
        }
    }

    /// Whether to end the prompt line after each answer
    ///
    /// A terminal already echoes the typed newline, so it must be off there.
    pub fn with_echo_newline(mut self, echo: bool) -> Self {
        self.echo_newline = echo;
        self
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<String> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(Error::from_prompt_io)?;

        if self.echo_newline {
            writeln!(out)?;
        }

        if read == 0 {
            return Err(Error::InputClosed);
        }
        // Undecodable bytes become replacement characters and fail validation downstream
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Terminal session: one answer source and one output sink
pub struct Console {
    input: Box<dyn LineInput>,
    out: Box<dyn Write>,
}

impl Console {
    pub fn new(input: Box<dyn LineInput>, out: Box<dyn Write>) -> Self {
        Self { input, out }
    }

    /// Console on the process's stdin/stdout
    ///
    /// Uses dialoguer when both ends are a terminal, a plain reader otherwise.
    pub fn stdio() -> Self {
        let stdin_is_term = io::stdin().is_terminal();
        let interactive = Term::stdout().is_term() && stdin_is_term;
        let input: Box<dyn LineInput> = if interactive {
            Box::new(TerminalInput::new())
        } else {
            Box::new(ReaderInput::new(io::stdin().lock()).with_echo_newline(!stdin_is_term))
        };
        tracing::debug!(interactive, "console attached");
        Self::new(input, Box::new(io::stdout()))
    }

    /// Raw output sink for components
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Print one line
    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// Ask for a line, returning it trimmed
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = self.input.read_line(prompt, &mut *self.out)?;
        Ok(answer.trim().to_string())
    }

    /// Ask a yes/no question; only "y" (any case) counts as yes
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(is_yes(&answer))
    }

    /// Block until Enter is pressed, discarding the input
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        self.ask(prompt).map(|_| ())
    }
}

/// Whether an answer is an explicit yes
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
