//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2c, 0x34), // bg
        bg1: Color::Rgb(0x21, 0x25, 0x2b), // bg-darker
        bg2: Color::Rgb(0x3e, 0x44, 0x51), // bg-highlight
        fg0: Color::Rgb(0xab, 0xb2, 0xbf), // fg
        fg1: Color::Rgb(0x9d, 0xa5, 0xb4), // fg-dim
        grey1: Color::Rgb(0x4b, 0x52, 0x63), // gutter
        grey2: Color::Rgb(0x7f, 0x84, 0x8e),
        accent: Color::Rgb(0x56, 0xb6, 0xc2),
        emphasis: Color::Rgb(0xe5, 0xc0, 0x7b), // yellow
        selection: Color::Rgb(0x3e, 0x44, 0x51),
    }
}
