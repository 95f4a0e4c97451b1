//! Line-driven interactive session.
//!
//! Each input line is parsed into an [`InteractiveCommand`], applied to the
//! [`SelectionState`] and, when the state changed, the grid is rendered again.
//! A command that fails is reported and the session continues.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

use twc_core::{SelectionError, SelectionState};
use twc_model::Palette;

pub const PROMPT: &str = "twc> ";

pub const HELP: &str = "\
Commands:
  light <colour>        set the light-mode background (freeform only)
  dark-bg <colour>      set the dark-mode background (freeform only)
  dark on|off|toggle    switch dark mode (freeform only)
  custom                use a palette colour as background
  scale <name>          choose the background scale (palette only)
  shade <key>           choose the background shade (palette only)
  reset                 return to the freeform background
  show                  render the grid again
  help                  show this help
  quit                  leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DarkSwitch {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    Light(String),
    DarkBackground(String),
    Dark(DarkSwitch),
    Custom,
    Scale(String),
    Shade(String),
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command: {command} (try `help`)")]
    Unknown { command: String },
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{command}` takes no argument")]
    UnexpectedArgument { command: &'static str },
    #[error("expected on, off or toggle, got {value}")]
    InvalidDarkSwitch { value: String },
}

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
///
/// Colour arguments keep the rest of the line so values such as
/// `rgb(15, 23, 42)` can be entered unquoted.
pub fn parse_command(line: &str) -> Result<Option<InteractiveCommand>, CommandParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "light" => InteractiveCommand::Light(required(rest, "light", "a colour")?),
        "dark-bg" => InteractiveCommand::DarkBackground(required(rest, "dark-bg", "a colour")?),
        "dark" => InteractiveCommand::Dark(parse_dark_switch(rest)?),
        "custom" => no_argument(rest, "custom", InteractiveCommand::Custom)?,
        "scale" => InteractiveCommand::Scale(required(rest, "scale", "a scale name")?),
        "shade" => InteractiveCommand::Shade(required(rest, "shade", "a shade key")?),
        "reset" => no_argument(rest, "reset", InteractiveCommand::Reset)?,
        "show" => no_argument(rest, "show", InteractiveCommand::Show)?,
        "help" | "?" => InteractiveCommand::Help,
        "quit" | "exit" | "q" => InteractiveCommand::Quit,
        _ => {
            return Err(CommandParseError::Unknown {
                command: word.to_string(),
            });
        }
    };
    Ok(Some(command))
}

fn required(
    rest: &str,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandParseError> {
    if rest.is_empty() {
        Err(CommandParseError::MissingArgument { command, argument })
    } else {
        Ok(rest.to_string())
    }
}

fn no_argument(
    rest: &str,
    command: &'static str,
    parsed: InteractiveCommand,
) -> Result<InteractiveCommand, CommandParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandParseError::UnexpectedArgument { command })
    }
}

fn parse_dark_switch(value: &str) -> Result<DarkSwitch, CommandParseError> {
    match value.to_ascii_lowercase().as_str() {
        "" | "toggle" => Ok(DarkSwitch::Toggle),
        "on" => Ok(DarkSwitch::On),
        "off" => Ok(DarkSwitch::Off),
        _ => Err(CommandParseError::InvalidDarkSwitch {
            value: value.to_string(),
        }),
    }
}

/// Applies a command to the state. On error the state is unchanged.
pub fn apply_command(
    state: &mut SelectionState,
    palette: &Palette,
    command: &InteractiveCommand,
) -> Result<Outcome, SelectionError> {
    match command {
        InteractiveCommand::Light(raw) => state.set_light_background(raw.as_str())?,
        InteractiveCommand::DarkBackground(raw) => state.set_dark_background(raw.as_str())?,
        InteractiveCommand::Dark(DarkSwitch::On) => state.set_dark_mode(true)?,
        InteractiveCommand::Dark(DarkSwitch::Off) => state.set_dark_mode(false)?,
        InteractiveCommand::Dark(DarkSwitch::Toggle) => state.toggle_dark_mode()?,
        InteractiveCommand::Custom => state.enable_palette_background(palette)?,
        InteractiveCommand::Scale(name) => state.select_scale(palette, name)?,
        InteractiveCommand::Shade(shade) => state.select_shade(palette, shade)?,
        InteractiveCommand::Reset => state.reset(),
        InteractiveCommand::Show => {}
        InteractiveCommand::Help => return Ok(Outcome::Help),
        InteractiveCommand::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Render)
}

/// Runs the session until `quit` or end of input.
///
/// `render` writes the grid for the current state; it is called once at
/// start and after every command that succeeds.
pub fn run_session<R, W, F>(
    palette: &Palette,
    state: &mut SelectionState,
    input: R,
    mut output: W,
    mut render: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&SelectionState, &mut W) -> Result<()>,
{
    info!(scales = palette.len(), "interactive session started");
    render(&*state, &mut output)?;
    writeln!(output, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(output, "error: {error}")?;
                continue;
            }
        };
        debug!(?command, "interactive command");
        match apply_command(state, palette, &command) {
            Ok(Outcome::Render) => render(&*state, &mut output)?,
            Ok(Outcome::Help) => writeln!(output, "{HELP}")?,
            Ok(Outcome::Quit) => break,
            Err(error) => writeln!(output, "error: {error}")?,
        }
    }
    info!("interactive session finished");
    Ok(())
}
