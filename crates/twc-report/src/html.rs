//! Standalone HTML page for the contrast grid.
//!
//! The page mirrors the grid view: a header describing the background, then
//! one heading per scale (drawn in the emphasis shade) followed by a "CSS"
//! sample, the shade key and the score for every shade.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use twc_core::{ContrastGrid, GridCell, GridSection};

use crate::common::{HEADLINE, PAGE_TITLE, WCAG_CONTRAST_URL, background_summary, score_label};

const STYLESHEET: &str = "body{margin:0;padding:0 1rem;font-family:system-ui,sans-serif}\
header{padding-top:1rem;text-align:center}\
.grid{display:flex;flex-wrap:wrap;gap:1.5rem;padding:1rem 0}\
.cell{display:flex;flex-direction:column;align-items:center;width:7rem}\
.sample{font-size:1.875rem;font-weight:700}\
.score{font-weight:600}";

pub fn write_grid_html<W: Write>(grid: &ContrastGrid, writer: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.get_mut().write_all(b"<!DOCTYPE html>\n")?;

    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", "en"));
    xml.write_event(Event::Start(html))?;

    write_head(&mut xml)?;

    let mut body = BytesStart::new("body");
    let text_color = if grid.light_text { "#ffffff" } else { "#000000" };
    let body_style = match grid.background {
        Some(background) => format!("background-color: {background}; color: {text_color}"),
        None => format!("color: {text_color}"),
    };
    body.push_attribute(("style", body_style.as_str()));
    xml.write_event(Event::Start(body))?;

    xml.write_event(Event::Start(BytesStart::new("header")))?;
    text_element(&mut xml, "h1", &[], HEADLINE)?;
    xml.write_event(Event::Start(BytesStart::new("p")))?;
    xml.write_event(Event::Text(BytesText::new("Scores use the ")))?;
    text_element(&mut xml, "a", &[("href", WCAG_CONTRAST_URL)], "WCAG")?;
    xml.write_event(Event::Text(BytesText::new(" contrast ratio definitions.")))?;
    xml.write_event(Event::End(BytesEnd::new("p")))?;
    text_element(&mut xml, "p", &[], &background_summary(grid))?;
    xml.write_event(Event::End(BytesEnd::new("header")))?;

    xml.write_event(Event::Start(BytesStart::new("main")))?;
    for section in &grid.sections {
        write_section(&mut xml, section)?;
    }
    xml.write_event(Event::End(BytesEnd::new("main")))?;

    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;
    xml.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_head<W: Write>(xml: &mut Writer<W>) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("head")))?;
    let mut charset = BytesStart::new("meta");
    charset.push_attribute(("charset", "utf-8"));
    xml.write_event(Event::Empty(charset))?;
    let mut description = BytesStart::new("meta");
    description.push_attribute(("name", "description"));
    description.push_attribute(("content", PAGE_TITLE));
    xml.write_event(Event::Empty(description))?;
    text_element(xml, "title", &[], PAGE_TITLE)?;
    text_element(xml, "style", &[], STYLESHEET)?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(())
}

fn write_section<W: Write>(xml: &mut Writer<W>, section: &GridSection) -> Result<()> {
    let heading_style = section
        .heading_color
        .map(|color| format!("color: {color}"));
    let heading_attrs: Vec<(&str, &str)> = heading_style
        .as_deref()
        .map(|style| vec![("style", style)])
        .unwrap_or_default();
    text_element(xml, "h2", &heading_attrs, &section.scale)?;

    let mut grid = BytesStart::new("div");
    grid.push_attribute(("class", "grid"));
    xml.write_event(Event::Start(grid))?;
    for cell in &section.cells {
        write_cell(xml, cell)?;
    }
    xml.write_event(Event::End(BytesEnd::new("div")))?;
    Ok(())
}

fn write_cell<W: Write>(xml: &mut Writer<W>, cell: &GridCell) -> Result<()> {
    let mut node = BytesStart::new("div");
    node.push_attribute(("class", "cell"));
    xml.write_event(Event::Start(node))?;

    let sample_style = format!("color: {}", cell.color);
    text_element(
        xml,
        "div",
        &[("class", "sample"), ("style", sample_style.as_str())],
        "CSS",
    )?;
    text_element(xml, "span", &[("class", "shade")], cell.shade.as_str())?;

    xml.write_event(Event::Start(BytesStart::new("span")))?;
    xml.write_event(Event::Text(BytesText::new("Score: ")))?;
    text_element(xml, "span", &[("class", "score")], &score_label(cell.score))?;
    xml.write_event(Event::End(BytesEnd::new("span")))?;

    xml.write_event(Event::End(BytesEnd::new("div")))?;
    Ok(())
}

fn text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
