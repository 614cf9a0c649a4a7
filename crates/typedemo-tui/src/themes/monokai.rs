//! Monokai theme

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x27, 0x28, 0x22), // background
        bg1: Color::Rgb(0x3e, 0x3d, 0x32),
        bg2: Color::Rgb(0x49, 0x48, 0x3e), // line
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2), // foreground
        fg1: Color::Rgb(0xd0, 0xd0, 0xc0),
        grey1: Color::Rgb(0x5f, 0x5c, 0x4d),
        grey2: Color::Rgb(0x90, 0x8c, 0x77),
        accent: Color::Rgb(0xae, 0x81, 0xff),   // purple
        emphasis: Color::Rgb(0xe6, 0xdb, 0x74), // yellow
        selection: Color::Rgb(0x3e, 0x3d, 0x32),
    }
}
