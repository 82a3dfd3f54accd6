use ratatui::style::Color;

/// All colors used by the TUI, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // ── Board ──────────────────────────────────────────────────────
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    pub board_border: Color,
    pub board_label: Color,

    // ── Overlays (light-square variant, dark-square variant) ──────
    pub overlay_cursor: (Color, Color),
    pub overlay_destination: (Color, Color),
    pub overlay_chosen: (Color, Color),
    pub overlay_en_passant: (Color, Color),

    // ── Panels ────────────────────────────────────────────────────
    pub panel_border: Color,
    pub heading: Color,
    pub key_hint: Color,
    pub positive: Color,
    pub warning: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,

    // ── Dialogs ───────────────────────────────────────────────────
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub dialog_highlight: Color,
}

impl Theme {
    /// Dark theme, for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            light_square: Color::Rgb(240, 217, 181),
            dark_square: Color::Rgb(181, 136, 99),
            // Explicit RGB: many terminals remap the ANSI white and black.
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(0, 0, 0),
            board_border: Color::Cyan,
            board_label: Color::Yellow,

            overlay_cursor: (Color::LightYellow, Color::Yellow),
            overlay_destination: (Color::LightBlue, Color::Blue),
            overlay_chosen: (Color::LightMagenta, Color::Magenta),
            overlay_en_passant: (Color::LightCyan, Color::Cyan),

            panel_border: Color::Cyan,
            heading: Color::Yellow,
            key_hint: Color::Green,
            positive: Color::Green,
            warning: Color::Red,
            muted: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,

            dialog_bg: Color::Black,
            dialog_border: Color::Magenta,
            dialog_highlight: Color::Yellow,
        }
    }

    /// Light theme, for terminals with a light background.
    pub fn light() -> Self {
        Self {
            light_square: Color::Rgb(238, 238, 210),
            dark_square: Color::Rgb(118, 150, 86),
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(0, 0, 0),
            board_border: Color::Rgb(40, 90, 140),
            board_label: Color::Rgb(120, 80, 0),

            overlay_cursor: (Color::Rgb(246, 246, 105), Color::Rgb(186, 202, 43)),
            overlay_destination: (Color::Rgb(170, 200, 240), Color::Rgb(90, 130, 200)),
            overlay_chosen: (Color::Rgb(230, 170, 230), Color::Rgb(170, 90, 170)),
            overlay_en_passant: (Color::Rgb(170, 230, 230), Color::Rgb(80, 160, 160)),

            panel_border: Color::Rgb(40, 90, 140),
            heading: Color::Rgb(120, 80, 0),
            key_hint: Color::Rgb(0, 120, 0),
            positive: Color::Rgb(0, 120, 0),
            warning: Color::Rgb(180, 0, 0),
            muted: Color::Rgb(120, 120, 120),

            text_primary: Color::Rgb(30, 30, 30),
            text_secondary: Color::Rgb(80, 80, 80),

            dialog_bg: Color::Rgb(245, 245, 245),
            dialog_border: Color::Rgb(140, 40, 140),
            dialog_highlight: Color::Rgb(160, 60, 0),
        }
    }

    /// Create a theme from a preference string ("light" or "dark").
    /// Returns dark for any unrecognized or `None` value.
    pub fn from_preference(pref: Option<&str>) -> Self {
        match pref {
            Some("light") => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Toggle between dark and light theme in place.
    pub fn toggle(&mut self) {
        *self = if self.is_dark() {
            Self::light()
        } else {
            Self::dark()
        };
    }

    /// Dark theme uses ANSI white for primary text; light uses an RGB grey.
    pub fn is_dark(&self) -> bool {
        self.text_primary == Color::White
    }

    pub fn name(&self) -> &'static str {
        if self.is_dark() {
            "Dark"
        } else {
            "Light"
        }
    }

    /// Pick the light- or dark-square variant of an overlay pair.
    pub fn overlay(pair: (Color, Color), is_light_square: bool) -> Color {
        if is_light_square {
            pair.0
        } else {
            pair.1
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
