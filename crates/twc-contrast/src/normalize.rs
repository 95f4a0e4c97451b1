//! Colour normalization: any CSS colour string to canonical `#rrggbb`.

use tracing::trace;

use twc_model::HexColor;

/// Parses a CSS colour string and reduces it to an opaque [`HexColor`].
///
/// Accepts every syntax `csscolorparser` understands: 3/4/6/8 digit hex,
/// `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()`, `lab()`/`lch()`,
/// `oklab()`/`oklch()` and named colours. Out-of-gamut channels are clamped
/// and alpha is discarded. Returns `None` for anything that is not a colour;
/// callers drop such entries instead of reporting them.
pub fn normalize(raw: &str) -> Option<HexColor> {
    let value = raw.trim();
    // csscolorparser indexes into the string by byte; keep it to ASCII input.
    if value.is_empty() || !value.is_ascii() {
        trace!(raw, "dropping non-colour input");
        return None;
    }
    match csscolorparser::parse(value) {
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();
            Some(HexColor::from_rgb(r, g, b))
        }
        Err(error) => {
            trace!(raw, %error, "dropping unparseable colour");
            None
        }
    }
}

/// [`normalize`], returning the canonical string form.
pub fn normalize_to_hex_string(raw: &str) -> Option<String> {
    normalize(raw).map(|color| color.to_string())
}
