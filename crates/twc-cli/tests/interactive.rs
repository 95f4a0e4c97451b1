//! Interactive session scenarios driven through in-memory input.

use std::io::{Cursor, Write};

use twc_cli::interactive::{
    DarkSwitch, InteractiveCommand, Outcome, apply_command, parse_command, run_session,
};
use twc_core::{BackgroundMode, SelectionError, SelectionState, build_grid};
use twc_model::Palette;
use twc_palette::load_default_palette;
use twc_report::background_summary;

fn session(palette: &Palette, input: &str) -> (SelectionState, String) {
    let mut state = SelectionState::new();
    let mut output = Vec::new();
    run_session(
        palette,
        &mut state,
        Cursor::new(input.as_bytes()),
        &mut output,
        |state, out| {
            writeln!(out, "{}", background_summary(&build_grid(palette, state)))?;
            Ok(())
        },
    )
    .unwrap();
    (state, String::from_utf8(output).unwrap())
}

#[test]
fn palette_walkthrough() {
    let palette = load_default_palette().unwrap();
    let (state, output) = session(&palette, "custom\nscale blue\nshade 900\nquit\n");

    assert_eq!(
        state.active_background(&palette).unwrap().to_string(),
        "#1e3a8a"
    );
    assert!(state.uses_light_text());
    assert!(output.contains("Background: #ffffff (light mode)"));
    assert!(output.contains("Background: #f8fafc (palette slate 50)"));
    assert!(output.contains("Background: #eff6ff (palette blue 50)"));
    assert!(output.contains("Background: #1e3a8a (palette blue 900)"));
}

#[test]
fn errors_are_reported_and_the_session_continues() {
    let palette = load_default_palette().unwrap();
    let (state, output) = session(&palette, "scale blue\npaint it\nlight not-a-color\nshow\n");

    assert!(output.contains("error: choosing a scale is only available with a palette background"));
    assert!(output.contains("error: unknown command: paint"));
    assert!(output.contains("Background: \"not-a-color\" is not a colour (light mode)"));
    assert_eq!(state.light_background(), "not-a-color");
    assert_eq!(state.mode(), &BackgroundMode::Freeform);
}

#[test]
fn end_of_input_finishes_the_session() {
    let palette = load_default_palette().unwrap();
    let (state, output) = session(&palette, "dark on");

    assert!(state.is_dark_mode());
    assert!(output.contains("Background: #000000 (dark mode)"));
    assert!(output.ends_with("twc> \n"));
}

#[test]
fn help_and_quit_do_not_render() {
    let palette = load_default_palette().unwrap();
    let mut state = SelectionState::new();

    let help = parse_command("help").unwrap().unwrap();
    assert_eq!(
        apply_command(&mut state, &palette, &help).unwrap(),
        Outcome::Help
    );
    let quit = parse_command("exit").unwrap().unwrap();
    assert_eq!(
        apply_command(&mut state, &palette, &quit).unwrap(),
        Outcome::Quit
    );
    assert_eq!(state, SelectionState::new());
}

#[test]
fn freeform_commands_fail_in_palette_mode() {
    let palette = load_default_palette().unwrap();
    let mut state = SelectionState::new();
    apply_command(&mut state, &palette, &InteractiveCommand::Custom).unwrap();
    let before = state.clone();

    let error = apply_command(
        &mut state,
        &palette,
        &InteractiveCommand::Dark(DarkSwitch::Toggle),
    )
    .unwrap_err();
    assert!(matches!(error, SelectionError::RequiresFreeform { .. }));
    let error = apply_command(
        &mut state,
        &palette,
        &InteractiveCommand::Shade("975".to_string()),
    )
    .unwrap_err();
    assert!(matches!(error, SelectionError::UnknownShade { .. }));
    assert_eq!(state, before);

    apply_command(&mut state, &palette, &InteractiveCommand::Reset).unwrap();
    assert!(!state.is_palette_mode());
}
