use ratatui::style::{Color as RColor, Modifier, Style as RStyle};

/// RGB color used throughout the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const DARK_GRAY: Color = Color::new(100, 100, 100);
    pub const CYAN: Color = Color::new(80, 200, 220);
    pub const YELLOW: Color = Color::new(230, 200, 60);
    pub const LIME: Color = Color::new(140, 220, 80);
    pub const ERROR: Color = Color::new(230, 90, 90);
    pub const SELECTION_BG: Color = Color::new(40, 60, 90);
    pub const FIELD_BG: Color = Color::new(30, 30, 40);
}

impl From<Color> for RColor {
    fn from(c: Color) -> Self {
        RColor::Rgb(c.r, c.g, c.b)
    }
}

/// Small builder over ratatui's Style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl From<Style> for RStyle {
    fn from(s: Style) -> Self {
        let mut style = RStyle::default();
        if let Some(fg) = s.fg {
            style = style.fg(fg.into());
        }
        if let Some(bg) = s.bg {
            style = style.bg(bg.into());
        }
        if s.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}
