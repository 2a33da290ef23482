//! Open/closed indicator drawn inside the arrow surface.
//!
//! Purely presentational: it reads the open flag and a tone and reports
//! nothing back to the widget.

use splitdrop_dom::{Color, Element, Style};

/// Glyph color, one of two fixed tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowTone {
    /// Translucent accent shown while the list is open.
    Open,
    /// Neutral grey shown while closed.
    Closed,
}

impl ArrowTone {
    pub fn for_state(is_open: bool) -> Self {
        if is_open { Self::Open } else { Self::Closed }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Open => Color::rgba(56, 171, 223, 0.35),
            Self::Closed => Color::rgb(0x94, 0x94, 0x94),
        }
    }
}

/// Build the indicator element: an up-pointing glyph while open.
pub fn indicator(id: impl Into<String>, is_open: bool, tone: ArrowTone) -> Element {
    let glyph = if is_open { "▲" } else { "▼" };
    Element::text(glyph)
        .id(id)
        .style(Style::new().foreground(tone.color()))
        .data("tone", tone.color().to_css())
}
