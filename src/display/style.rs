use std::io::IsTerminal;

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const TEXT: Rgb = Rgb(230, 236, 244);
pub const PRIMARY: Rgb = Rgb(58, 201, 111);
pub const CAUTION: Rgb = Rgb(242, 196, 15);
pub const WARNING: Rgb = Rgb(255, 176, 59);
pub const DANGER: Rgb = Rgb(226, 92, 92);
pub const ACCENT: Rgb = Rgb(82, 196, 224);

pub const SYNTAX_KEY: Rgb = Rgb(82, 167, 244);
pub const SYNTAX_STRING: Rgb = Rgb(230, 219, 116);
pub const SYNTAX_NUMBER: Rgb = Rgb(180, 130, 240);
pub const SYNTAX_KEYWORD: Rgb = Rgb(233, 120, 180);
pub const SYNTAX_TAG: Rgb = Rgb(240, 92, 92);
pub const SYNTAX_COMMENT: Rgb = Rgb(117, 113, 94);

const RESET: &str = "\x1b[0m";

fn force_color() -> bool {
    std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty())
}

fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

pub fn should_use_color<T: IsTerminal>(stream: &T) -> bool {
    force_color() || (stream.is_terminal() && !no_color())
}

/// Whether output carries ANSI escapes. `Plain` output is the bare text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Colored,
    Plain,
}

impl Palette {
    /// Picks a palette for `stream`, unless the user asked for plain output.
    /// Stdout and stderr each get their own palette.
    pub fn detect<T: IsTerminal>(stream: &T, disable_color: bool) -> Self {
        if !disable_color && should_use_color(stream) {
            Palette::Colored
        } else {
            Palette::Plain
        }
    }

    pub fn paint(self, text: &str, color: Rgb) -> String {
        self.styled(text, &format!("38;2;{};{};{}", color.0, color.1, color.2))
    }

    pub fn bold(self, text: &str) -> String {
        self.styled(text, "1")
    }

    pub fn bold_paint(self, text: &str, color: Rgb) -> String {
        self.styled(text, &format!("1;38;2;{};{};{}", color.0, color.1, color.2))
    }

    pub fn dim(self, text: &str) -> String {
        self.styled(text, "2")
    }

    fn styled(self, text: &str, sgr: &str) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Colored if text.is_empty() => String::new(),
            Palette::Colored => format!("\x1b[{sgr}m{text}{RESET}"),
        }
    }
}

/// Emphasis applied to the summary panel, keyed off the status code class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Caution,
    Warning,
    Error,
    Neutral,
}

impl StatusClass {
    pub fn of(status_code: u16) -> Self {
        match status_code {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Caution,
            400..=499 => StatusClass::Warning,
            500..=599 => StatusClass::Error,
            _ => StatusClass::Neutral,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            StatusClass::Success => PRIMARY,
            StatusClass::Caution => CAUTION,
            StatusClass::Warning => WARNING,
            StatusClass::Error => DANGER,
            StatusClass::Neutral => TEXT,
        }
    }
}

#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
