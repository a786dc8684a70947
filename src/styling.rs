use serde::Serialize;

pub const ESC: &str = "\x1b";
pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const BLUE: &str = "\x1b[94m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Terminal styles used for tester output.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorPalette {
    Red,
    Green,
    Yellow,
    Blue,
    Reset,
    Bold,
}

impl ColorPalette {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Reset,
        Self::Bold,
    ];

    pub fn escape(&self) -> &'static str {
        match self {
            Self::Red => RED,
            Self::Green => GREEN,
            Self::Yellow => YELLOW,
            Self::Blue => BLUE,
            Self::Reset => RESET,
            Self::Bold => BOLD,
        }
    }

    /// Wraps `s` in this style, or returns it untouched when colors are off
    /// (`NO_COLOR`, `CLICOLOR=0`).
    pub fn paint(&self, s: &str) -> String {
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            self.wrap(s)
        } else {
            s.to_owned()
        }
    }

    fn wrap(&self, s: &str) -> String {
        format!("{}{}{}", self.escape(), s, Self::Reset.escape())
    }
}

pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
