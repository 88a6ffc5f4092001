//! Interactive menu for listing and sorting the Pokédex.

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use pokesort_lib::display::{self, EXIT_CHOICE, LIST_CHOICE};
use pokesort_lib::sort::SortMode;
use pokesort_lib::terminal::{CONTINUE_PROMPT, NarratorOptions, Screen, TermScreen};
use pokesort_lib::validation::validate_choice;

use crate::commands::command::Command;
use crate::commands::common::Narration;
use crate::commands::list::show_original;
use crate::commands::runner::{SortOutcome, run_sort};

const CHOICE_PROMPT: &str = "Enter your choice";
const VISUALIZE_PROMPT: &str = "Show step-by-step visualization? [y/n] (y)";

/// Run the interactive menu.
#[derive(Debug, Parser)]
#[command(
    name = "menu",
    about = "\x1b[38;5;72m[VIEW]\x1b[0m    \x1b[36mInteractive menu for listing and sorting the Pokédex\x1b[0m",
    long_about = r#"
Run the interactive menu.

  1       List the Pokédex in its original order
  2 - 6   Sort by stage, generation, HP, type, or name
  0       Exit

Each sort asks whether to show a step-by-step visualization (default: yes).
During a visualization, enter q at any pause to go back to the menu.
"#
)]
pub struct Menu {
    /// Do not clear the screen between menus and steps
    #[arg(long = "no-clear")]
    pub no_clear: bool,
}

/// What the user picked at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    List,
    Sort(SortMode),
    Exit,
}

impl MenuAction {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            LIST_CHOICE => Some(Self::List),
            EXIT_CHOICE => Some(Self::Exit),
            other => SortMode::from_menu_choice(other).map(Self::Sort),
        }
    }
}

/// Runs the menu loop on `screen` until the user exits or input ends.
///
/// Returns the number of sorts that ran to completion.
///
/// # Errors
///
/// Returns an error if the screen cannot be used.
pub fn run_menu<S: Screen + ?Sized>(screen: &mut S, clear: bool) -> Result<usize> {
    let choices = display::menu_choices();
    let mut completed = 0;

    loop {
        if clear {
            screen.clear()?;
        }
        screen.show(&display::header())?;
        screen.show(&display::menu())?;

        let Some(action) = read_action(screen, &choices)? else {
            info!("Input ended; leaving menu");
            break;
        };

        match action {
            MenuAction::List => {
                if clear {
                    screen.clear()?;
                }
                screen.show(&display::header())?;
                show_original(screen)?;
            }
            MenuAction::Sort(mode) => {
                let Some(visualize) = read_visualize(screen)? else { break };
                let narration = if visualize {
                    Narration::Visual(NarratorOptions { pause: true, clear })
                } else {
                    Narration::Quiet
                };
                info!("Menu sort: {} ({narration:?})", mode.title());
                if let SortOutcome::Completed(_) = run_sort(screen, mode, narration)? {
                    completed += 1;
                }
            }
            MenuAction::Exit => {
                if clear {
                    screen.clear()?;
                }
                screen.show(&display::exit_message())?;
                break;
            }
        }

        if screen.prompt(CONTINUE_PROMPT)?.is_none() {
            break;
        }
    }

    Ok(completed)
}

/// Prompts until a valid menu choice is entered. `None` means input ended.
fn read_action<S: Screen + ?Sized>(screen: &mut S, choices: &[&str]) -> Result<Option<MenuAction>> {
    loop {
        let Some(input) = screen.prompt(CHOICE_PROMPT)? else { return Ok(None) };
        match validate_choice(&input, choices, "choice") {
            Ok(choice) => return Ok(MenuAction::from_choice(choice)),
            Err(e) => {
                warn!("{e}");
                screen.show(&format!("{}", console::style(e).red()))?;
            }
        }
    }
}

/// Prompts for y/n with a default of y. `None` means input ended.
fn read_visualize<S: Screen + ?Sized>(screen: &mut S) -> Result<Option<bool>> {
    loop {
        let Some(input) = screen.prompt(VISUALIZE_PROMPT)? else { return Ok(None) };
        let answer = if input.trim().is_empty() { "y" } else { input.as_str() };
        match validate_choice(&answer.to_lowercase(), &["y", "n"], "visualization") {
            Ok(choice) => return Ok(Some(choice == "y")),
            Err(e) => screen.show(&format!("{}", console::style(e).red()))?,
        }
    }
}

impl Command for Menu {
    fn execute(&self, command_line: &str) -> Result<()> {
        info!("Command: {command_line}");
        let completed = run_menu(&mut TermScreen::stdout(), !self.no_clear)?;
        info!("Menu closed after {completed} completed sorts");
        Ok(())
    }
}
