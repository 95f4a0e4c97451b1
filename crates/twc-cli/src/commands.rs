use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ColorChoice;
use comfy_table::Table;
use tracing::{info, info_span};

use twc_cli::interactive::run_session;
use twc_contrast::{normalize, score};
use twc_core::{SelectionState, build_grid};
use twc_model::Palette;
use twc_palette::{load_default_palette, load_palette_file};
use twc_report::{
    ABOUT, background_summary, grid_table, pair_table, palette_table, shade_table,
    write_grid_html, write_grid_json,
};

use crate::cli::{BackgroundArgs, CheckArgs, GridArgs, GridFormatArg, ShadesArgs};

/// Loads `--palette-file` when given, otherwise the built-in palette.
pub fn load_palette(path: Option<&Path>) -> Result<Palette> {
    match path {
        Some(path) => {
            load_palette_file(path).with_context(|| format!("load palette {}", path.display()))
        }
        None => load_default_palette().context("load built-in palette"),
    }
}

pub fn run_grid(args: &GridArgs, palette: &Palette, color: ColorChoice) -> Result<()> {
    let span = info_span!("grid", format = ?args.format);
    let _guard = span.enter();
    let state = initial_state(&args.background, palette)?;
    let grid = build_grid(palette, &state);
    info!(
        sections = grid.sections.len(),
        cells = grid.cell_count(),
        dropped = grid.dropped,
        "grid built"
    );

    let to_terminal = args.output.is_none() && io::stdout().is_terminal();
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        GridFormatArg::Table => {
            writeln!(out, "{}", background_summary(&grid))?;
            let mut table = grid_table(&grid);
            style_table(&mut table, color, to_terminal);
            writeln!(out, "{table}")?;
        }
        GridFormatArg::Json => write_grid_json(&grid, &mut out)?,
        GridFormatArg::Html => write_grid_html(&grid, &mut out)?,
    }
    out.flush()?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "grid written");
    }
    Ok(())
}

pub fn run_interactive(args: &BackgroundArgs, palette: &Palette, color: ColorChoice) -> Result<()> {
    let mut state = initial_state(args, palette)?;
    let to_terminal = io::stdout().is_terminal();
    let stdin = io::stdin();
    run_session(
        palette,
        &mut state,
        stdin.lock(),
        io::stdout().lock(),
        |state, out| {
            let grid = build_grid(palette, state);
            writeln!(out, "{}", background_summary(&grid))?;
            let mut table = grid_table(&grid);
            style_table(&mut table, color, to_terminal);
            writeln!(out, "{table}")?;
            Ok(())
        },
    )
}

pub fn run_palettes(palette: &Palette, color: ColorChoice) -> Result<()> {
    let mut table = palette_table(palette);
    style_table(&mut table, color, io::stdout().is_terminal());
    println!("{table}");
    Ok(())
}

pub fn run_shades(args: &ShadesArgs, palette: &Palette, color: ColorChoice) -> Result<()> {
    let scale = palette
        .scale(args.scale.trim())
        .ok_or_else(|| anyhow!("unknown colour scale: {}", args.scale))?;
    let mut table = shade_table(scale);
    style_table(&mut table, color, io::stdout().is_terminal());
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &CheckArgs, color: ColorChoice) -> Result<()> {
    let foreground =
        normalize(&args.foreground).ok_or_else(|| anyhow!("{:?} is not a colour", args.foreground))?;
    let background =
        normalize(&args.background).ok_or_else(|| anyhow!("{:?} is not a colour", args.background))?;
    let mut table = pair_table(foreground, background, score(foreground, background));
    style_table(&mut table, color, io::stdout().is_terminal());
    println!("{table}");
    Ok(())
}

pub fn run_about() -> Result<()> {
    println!("{ABOUT}");
    Ok(())
}

/// Builds the starting selection from `--background`, `--dark-background`,
/// `--dark` and `--palette-color`.
fn initial_state(args: &BackgroundArgs, palette: &Palette) -> Result<SelectionState> {
    let mut state = SelectionState::new();
    state.set_light_background(args.background.as_str())?;
    state.set_dark_background(args.dark_background.as_str())?;
    state.set_dark_mode(args.dark)?;
    if let Some(selection) = &args.palette_color {
        state
            .select_palette_color(palette, &selection.scale, &selection.shade)
            .with_context(|| {
                format!("select palette colour {}:{}", selection.scale, selection.shade)
            })?;
    }
    Ok(state)
}

fn style_table(table: &mut Table, color: ColorChoice, to_terminal: bool) {
    match color {
        ColorChoice::Always => {
            table.enforce_styling();
        }
        ColorChoice::Never => {
            table.force_no_tty();
        }
        ColorChoice::Auto if !to_terminal => {
            table.force_no_tty();
        }
        ColorChoice::Auto => {}
    }
}
