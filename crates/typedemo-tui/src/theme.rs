use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Semantic colors
    /// Active tab, cursor marker, focused borders
    pub accent: Color,
    /// Emphasized demo lines
    pub emphasis: Color,
    /// Background of whole-line reveals
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            emphasis: Color::Rgb(0xd8, 0xa6, 0x57),
            selection: Color::Rgb(0x45, 0x40, 0x3d),
        }
    }
}
