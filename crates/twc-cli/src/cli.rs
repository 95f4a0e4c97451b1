//! CLI argument definitions for `twc`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "twc",
    version,
    about = "Colour accessibility for Tailwind CSS - WCAG contrast of every palette shade",
    long_about = "Score every shade of the Tailwind CSS palette against a background \
                  using the WCAG 2.0 contrast ratio.\n\n\
                  The background is either a freeform light/dark colour or a \
                  colour picked from the palette itself."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Palette CSV (`scale,shade,color`) to use instead of the built-in
    /// Tailwind CSS v3 palette.
    #[arg(long = "palette-file", value_name = "PATH", global = true)]
    pub palette_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score every palette shade against the background and print the grid.
    Grid(GridArgs),

    /// Change the background step by step and re-render after each command.
    Interactive(BackgroundArgs),

    /// List the palette's scales with their 500 swatch.
    Palettes,

    /// List the shades of one scale.
    Shades(ShadesArgs),

    /// Score a single foreground/background pair.
    Check(CheckArgs),

    /// Show information about this tool.
    About,
}

/// Initial background selection, shared by `grid` and `interactive`.
#[derive(Parser, Debug, Clone)]
pub struct BackgroundArgs {
    /// Light-mode background colour (any CSS colour).
    #[arg(long = "background", value_name = "COLOUR", default_value = "#ffffff")]
    pub background: String,

    /// Dark-mode background colour (any CSS colour).
    #[arg(
        long = "dark-background",
        value_name = "COLOUR",
        default_value = "#000000"
    )]
    pub dark_background: String,

    /// Start in dark mode.
    #[arg(long = "dark")]
    pub dark: bool,

    /// Use a palette colour as background instead, e.g. `slate:500`.
    #[arg(long = "palette-color", value_name = "SCALE:SHADE", value_parser = parse_palette_color)]
    pub palette_color: Option<PaletteColorArg>,
}

#[derive(Parser)]
pub struct GridArgs {
    #[command(flatten)]
    pub background: BackgroundArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: GridFormatArg,

    /// Write the output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShadesArgs {
    /// Scale name, e.g. `slate`.
    #[arg(value_name = "SCALE")]
    pub scale: String,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Text colour (any CSS colour).
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Background colour (any CSS colour).
    #[arg(value_name = "BACKGROUND")]
    pub background: String,
}

/// A `(scale, shade)` pair given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColorArg {
    pub scale: String,
    pub shade: String,
}

fn parse_palette_color(value: &str) -> Result<PaletteColorArg, String> {
    let (scale, shade) = value
        .split_once(':')
        .ok_or_else(|| format!("expected SCALE:SHADE, got {value:?}"))?;
    let (scale, shade) = (scale.trim(), shade.trim());
    if scale.is_empty() || shade.is_empty() {
        return Err(format!("expected SCALE:SHADE, got {value:?}"));
    }
    Ok(PaletteColorArg {
        scale: scale.to_string(),
        shade: shade.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GridFormatArg {
    Table,
    Json,
    Html,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults() {
        let cli = Cli::try_parse_from(["twc", "grid"]).unwrap();
        let Command::Grid(args) = cli.command else {
            panic!("expected grid command");
        };
        assert_eq!(args.background.background, "#ffffff");
        assert_eq!(args.background.dark_background, "#000000");
        assert!(!args.background.dark);
        assert_eq!(args.background.palette_color, None);
        assert_eq!(args.format, GridFormatArg::Table);
        assert!(args.output.is_none());
    }

    #[test]
    fn grid_with_palette_color_and_global_flags() {
        let cli = Cli::try_parse_from([
            "twc",
            "grid",
            "--palette-color",
            "slate:500",
            "--format",
            "html",
            "--palette-file",
            "colours.csv",
        ])
        .unwrap();
        assert_eq!(
            cli.palette_file.as_deref(),
            Some(std::path::Path::new("colours.csv"))
        );
        let Command::Grid(args) = cli.command else {
            panic!("expected grid command");
        };
        assert_eq!(
            args.background.palette_color,
            Some(PaletteColorArg {
                scale: "slate".to_string(),
                shade: "500".to_string(),
            })
        );
        assert_eq!(args.format, GridFormatArg::Html);
    }

    #[test]
    fn palette_color_needs_both_parts() {
        assert!(parse_palette_color("slate").is_err());
        assert!(parse_palette_color("slate:").is_err());
        assert!(parse_palette_color(":500").is_err());
        assert_eq!(
            parse_palette_color(" blue : 950 ").unwrap(),
            PaletteColorArg {
                scale: "blue".to_string(),
                shade: "950".to_string(),
            }
        );
        assert!(Cli::try_parse_from(["twc", "grid", "--palette-color", "slate"]).is_err());
    }

    #[test]
    fn check_takes_two_colours() {
        let cli = Cli::try_parse_from(["twc", "check", "#767676", "white"]).unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.foreground, "#767676");
        assert_eq!(args.background, "white");
        assert!(Cli::try_parse_from(["twc", "check", "#767676"]).is_err());
    }
}
