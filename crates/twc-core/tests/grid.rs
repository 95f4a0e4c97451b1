//! Grid derivation scenarios.

use twc_core::{SelectionState, build_grid};
use twc_model::{Grade, HexColor, Palette};
use twc_palette::load_default_palette;

#[test]
fn default_grid_scores_everything_against_white() {
    let palette = load_default_palette().unwrap();
    let grid = build_grid(&palette, &SelectionState::new());

    assert_eq!(grid.background, Some(HexColor::WHITE));
    assert_eq!(grid.sections.len(), 22);
    assert_eq!(grid.cell_count(), 242);
    assert_eq!(grid.dropped, 0);

    let slate_950 = grid.cell("slate", "950").unwrap();
    assert_eq!(slate_950.color.to_string(), "#020617");
    assert_eq!(slate_950.score.unwrap().grade, Grade::Aaa);

    let slate_50 = grid.cell("slate", "50").unwrap().score.unwrap();
    assert_eq!(slate_50.grade, Grade::Fail);
}

#[test]
fn headings_follow_emphasis_shade() {
    let palette = load_default_palette().unwrap();
    let mut state = SelectionState::new();

    let light = build_grid(&palette, &state);
    assert_eq!(
        light.section("blue").unwrap().heading_color.map(|c| c.to_string()),
        Some("#1d4ed8".to_string())
    );

    state.set_dark_mode(true).unwrap();
    let dark = build_grid(&palette, &state);
    assert_eq!(dark.emphasis_shade.as_str(), "400");
    assert_eq!(
        dark.section("blue").unwrap().heading_color.map(|c| c.to_string()),
        Some("#60a5fa".to_string())
    );
    assert!(dark.light_text);
}

#[test]
fn dark_mode_scores_only_depend_on_background() {
    let palette = load_default_palette().unwrap();
    let mut state = SelectionState::new();
    state.set_dark_background("#ffffff").unwrap();

    let light = build_grid(&palette, &state);
    state.set_dark_mode(true).unwrap();
    let dark = build_grid(&palette, &state);

    assert_eq!(light.background, dark.background);
    assert_ne!(light.emphasis_shade, dark.emphasis_shade);
    for (a, b) in light.sections.iter().zip(&dark.sections) {
        assert_eq!(a.cells, b.cells);
    }
}

#[test]
fn palette_background_scores_against_slate_500() {
    let palette = load_default_palette().unwrap();
    let mut state = SelectionState::new();
    state.enable_palette_background(&palette).unwrap();
    state.select_scale(&palette, "slate").unwrap();
    state.select_shade(&palette, "500").unwrap();

    let grid = build_grid(&palette, &state);
    assert_eq!(grid.background.unwrap().to_string(), "#64748b");

    let same = grid.cell("slate", "500").unwrap().score.unwrap();
    assert_eq!(same.ratio, 1.0);
    assert_eq!(same.grade, Grade::Fail);

    let lightest = grid.cell("slate", "50").unwrap().score.unwrap();
    assert!((lightest.ratio - 4.55).abs() < 0.01);
    assert_eq!(lightest.grade, Grade::Aa);
}

#[test]
fn unparseable_entries_are_dropped() {
    let mut palette = Palette::new();
    palette.insert("mixed", "100", "hsl(0, 0%, 100%)").unwrap();
    palette.insert("mixed", "200", "not-a-color").unwrap();
    palette.insert("mixed", "300", "black").unwrap();
    palette.insert("broken", "1", "inherit").unwrap();

    let grid = build_grid(&palette, &SelectionState::new());

    assert_eq!(grid.dropped, 2);
    let shades: Vec<&str> = grid
        .section("mixed")
        .unwrap()
        .cells
        .iter()
        .map(|cell| cell.shade.as_str())
        .collect();
    assert_eq!(shades, ["100", "300"]);
    assert!(grid.section("broken").unwrap().cells.is_empty());
    assert!(grid.cell("mixed", "200").is_none());
}

#[test]
fn unparseable_background_omits_scores() {
    let palette = load_default_palette().unwrap();
    let mut state = SelectionState::new();
    state.set_light_background("#12").unwrap();

    let grid = build_grid(&palette, &state);
    assert_eq!(grid.background, None);
    assert_eq!(grid.background_raw.as_deref(), Some("#12"));
    assert_eq!(grid.cell_count(), 242);
    assert!(
        grid.sections
            .iter()
            .flat_map(|section| &section.cells)
            .all(|cell| cell.score.is_none())
    );
}

#[test]
fn rebuilding_is_deterministic() {
    let palette = load_default_palette().unwrap();
    let state = SelectionState::new();
    assert_eq!(build_grid(&palette, &state), build_grid(&palette, &state));
}

#[test]
fn shade_columns_are_unioned() {
    let mut palette = Palette::new();
    palette.insert("a", "50", "#fff").unwrap();
    palette.insert("b", "50", "#eee").unwrap();
    palette.insert("b", "DEFAULT", "#000").unwrap();

    let grid = build_grid(&palette, &SelectionState::new());
    let columns: Vec<String> = grid.shade_columns().iter().map(ToString::to_string).collect();
    assert_eq!(columns, ["50", "DEFAULT"]);
}
