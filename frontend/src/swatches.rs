use tracing::{info, warn};
use yew::prelude::*;

use crate::colors::{rgb_to_hex, Palette};

/// Mount point for the palette preview.
pub const SWATCHES_ELEMENT_ID: &str = "color-examples";

#[derive(Properties, PartialEq)]
pub struct PaletteSwatchesProps {
    #[prop_or_default]
    pub palette: Palette,
    #[prop_or(1)]
    pub step: usize,
}

impl Default for PaletteSwatchesProps {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            step: 1,
        }
    }
}

/// One labeled bar per palette entry, walking the whole palette once.
#[function_component(PaletteSwatches)]
pub fn palette_swatches(props: &PaletteSwatchesProps) -> Html {
    let palette = props.palette;
    let Some(first) = palette.get(0) else {
        return html! {};
    };
    let colors = match palette.get_set(first, palette.len(), props.step) {
        Ok(colors) => colors,
        Err(err) => {
            warn!(error = %err, "cannot walk palette");
            return html! { <p>{ err.to_string() }</p> };
        }
    };
    info!(palette = palette.len(), shown = colors.len(), "rendering palette swatches");

    html! {
        <div>
            { for colors.iter().map(|color| {
                let style = format!(
                    "width: 200px; height: 20px; background-color: {color}; color: {};",
                    contrast_text(color)
                );
                html! { <div style={style}>{ *color }</div> }
            }) }
        </div>
    }
}

/// Inverse of a `#rrggbb` color, so swatch labels stay readable.
pub fn contrast_text(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => rgb_to_hex(!r, !g, !b),
        None => "#000000".to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
