use ratatui::style::Color;

/// Terminal palette: phosphor green on black with red faults.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub bright: Color,
    pub fault: Color,
    pub dimmed: Color,
    pub glitch: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::neon()
    }
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            text: Color::Rgb(57, 255, 20),    // #39FF14 neon green
            bright: Color::Rgb(255, 255, 255),
            fault: Color::Rgb(255, 0, 60),    // #FF003C
            dimmed: Color::Rgb(85, 85, 85),   // #555555
            glitch: Color::Rgb(0, 255, 255),  // cyan for substitutes
        }
    }

    pub fn current() -> Self {
        Self::neon()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn bright() -> Color {
        Theme::current().bright
    }
    pub fn fault() -> Color {
        Theme::current().fault
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn glitch() -> Color {
        Theme::current().glitch
    }
}
