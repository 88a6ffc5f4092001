//! Terminal interaction: screen output, prompts and the step-by-step narrator.
//!
//! All user-facing I/O goes through the [`Screen`] trait so that narrated sorts and the
//! interactive menu can be driven by a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use console::Term;
use thiserror::Error;

use crate::display;
use crate::record::Record;
use crate::sort::{SortObserver, SortStatistics, StepEvent, StepKind};

/// Text shown while waiting between narrated steps.
pub const PAUSE_PROMPT: &str = "Press Enter to continue (q to quit)";

/// Text shown after a finished screen, where quitting has no meaning.
pub const CONTINUE_PROMPT: &str = "Press Enter to continue";

/// Something that can show text and ask the user for a line.
pub trait Screen {
    /// Clears the visible screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn clear(&mut self) -> io::Result<()>;

    /// Shows a block of text followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Shows `message` and reads one line of input, without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// Screen backed by the process's stdout and stdin.
pub struct TermScreen {
    term: Term,
}

impl TermScreen {
    #[must_use]
    pub fn stdout() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TermScreen {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Screen for TermScreen {
    fn clear(&mut self) -> io::Result<()> {
        if self.term.is_term() { self.term.clear_screen() } else { Ok(()) }
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.term.write_str(&format!("{message}: "))?;
        self.term.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// In-memory screen that replays scripted input and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedScreen {
    inputs: VecDeque<String>,
    /// Every block passed to [`Screen::show`], in order
    pub shown: Vec<String>,
    /// Every prompt message, in order
    pub prompts: Vec<String>,
    /// Number of clear requests
    pub clears: usize,
}

impl ScriptedScreen {
    /// Creates a screen that answers prompts with `inputs` and then reports end of input.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { inputs: inputs.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Everything shown so far, joined with newlines.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.shown.join("\n")
    }
}

impl Screen for ScriptedScreen {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.shown.push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.prompts.push(message.to_string());
        Ok(self.inputs.pop_front())
    }
}

/// How a narrated sort behaves between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarratorOptions {
    /// Wait for Enter after each step
    pub pause: bool,
    /// Clear the screen before each step
    pub clear: bool,
}

impl Default for NarratorOptions {
    fn default() -> Self {
        Self { pause: true, clear: true }
    }
}

/// Reasons a narrated sort stops early.
#[derive(Error, Debug)]
pub enum NarratorError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("sorting stopped by user")]
    Aborted,
}

/// Observer that renders every step of a sort on a [`Screen`].
pub struct StepNarrator<'s, S: Screen + ?Sized> {
    screen: &'s mut S,
    options: NarratorOptions,
}

impl<'s, S: Screen + ?Sized> StepNarrator<'s, S> {
    pub fn new(screen: &'s mut S, options: NarratorOptions) -> Self {
        Self { screen, options }
    }

    /// Shows the completion message after a finished sort, then waits for Enter when pausing.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen cannot be used.
    pub fn finish(&mut self, stats: &SortStatistics) -> io::Result<()> {
        self.screen.show(&display::completion_message(stats))?;
        if self.options.pause {
            // Any answer, or end of input, moves on to the results.
            self.screen.prompt(CONTINUE_PROMPT)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> Result<(), NarratorError> {
        if !self.options.pause {
            return Ok(());
        }
        match self.screen.prompt(PAUSE_PROMPT)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("q") => Err(NarratorError::Aborted),
            Some(_) => Ok(()),
            None => {
                // No more input: run the rest of the sort without waiting.
                self.options.pause = false;
                Ok(())
            }
        }
    }
}

impl<S: Screen + ?Sized> SortObserver<Record> for StepNarrator<'_, S> {
    type Error = NarratorError;

    fn on_step(&mut self, event: &StepEvent<'_, Record>) -> Result<(), NarratorError> {
        if event.kind == StepKind::PassSummary {
            self.screen.show(&display::pass_summary(event))?;
        } else {
            if self.options.clear {
                self.screen.clear()?;
            }
            self.screen.show(&display::header())?;
            self.screen.show(&display::step_screen(event))?;
        }
        self.wait()
    }
}
