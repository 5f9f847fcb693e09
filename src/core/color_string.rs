//! Text buffer with optional ANSI terminal styling
//!
//! [`ColorString`] accumulates plain text and, when colour is enabled,
//! the escape sequences produced by its styling methods. With colour
//! disabled every styling call is a no-op, so the buffer only ever holds
//! the appended text.

use std::fmt;

/// Terminal escape sequences understood by [`ColorString`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermColor {
    Reset,
    Bright,
    Dim,
    Underscore,
    Blink,
    Reverse,
    Hidden,

    FgBlack,
    FgRed,
    FgGreen,
    FgYellow,
    FgBlue,
    FgMagenta,
    FgCyan,
    FgWhite,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
}

impl TermColor {
    /// The literal escape sequence for this style
    pub const fn code(self) -> &'static str {
        match self {
            TermColor::Reset => "\x1b[0m",
            TermColor::Bright => "\x1b[1m",
            TermColor::Dim => "\x1b[2m",
            TermColor::Underscore => "\x1b[4m",
            TermColor::Blink => "\x1b[5m",
            TermColor::Reverse => "\x1b[7m",
            TermColor::Hidden => "\x1b[8m",

            TermColor::FgBlack => "\x1b[30m",
            TermColor::FgRed => "\x1b[31m",
            TermColor::FgGreen => "\x1b[32m",
            TermColor::FgYellow => "\x1b[33m",
            TermColor::FgBlue => "\x1b[34m",
            TermColor::FgMagenta => "\x1b[35m",
            TermColor::FgCyan => "\x1b[36m",
            TermColor::FgWhite => "\x1b[37m",

            TermColor::BgBlack => "\x1b[40m",
            TermColor::BgRed => "\x1b[41m",
            TermColor::BgGreen => "\x1b[42m",
            TermColor::BgYellow => "\x1b[43m",
            TermColor::BgBlue => "\x1b[44m",
            TermColor::BgMagenta => "\x1b[45m",
            TermColor::BgCyan => "\x1b[46m",
            TermColor::BgWhite => "\x1b[47m",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorString {
    buf: String,
    allow_color: bool,
}

impl ColorString {
    pub fn new(allow_color: bool) -> Self {
        Self {
            buf: String::new(),
            allow_color,
        }
    }

    #[inline]
    pub fn color_enabled(&self) -> bool {
        self.allow_color
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// Append an escape sequence, unless colour is disabled
    pub fn append_color(&mut self, color: TermColor) -> &mut Self {
        if self.allow_color {
            self.buf.push_str(color.code());
        }
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.append_color(TermColor::Reset)
    }

    pub fn bright(&mut self) -> &mut Self {
        self.append_color(TermColor::Bright)
    }

    pub fn dim(&mut self) -> &mut Self {
        self.append_color(TermColor::Dim)
    }

    pub fn underscore(&mut self) -> &mut Self {
        self.append_color(TermColor::Underscore)
    }

    pub fn blink(&mut self) -> &mut Self {
        self.append_color(TermColor::Blink)
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.append_color(TermColor::Reverse)
    }

    pub fn hidden(&mut self) -> &mut Self {
        self.append_color(TermColor::Hidden)
    }

    pub fn black(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgBlack, TermColor::BgBlack)
    }

    pub fn red(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgRed, TermColor::BgRed)
    }

    pub fn green(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgGreen, TermColor::BgGreen)
    }

    pub fn yellow(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgYellow, TermColor::BgYellow)
    }

    pub fn blue(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgBlue, TermColor::BgBlue)
    }

    pub fn magenta(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgMagenta, TermColor::BgMagenta)
    }

    pub fn cyan(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgCyan, TermColor::BgCyan)
    }

    pub fn white(&mut self, background: bool) -> &mut Self {
        self.fg_or_bg(background, TermColor::FgWhite, TermColor::BgWhite)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.buf.clear();
        self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn fg_or_bg(&mut self, background: bool, fg: TermColor, bg: TermColor) -> &mut Self {
        self.append_color(if background { bg } else { fg })
    }
}

impl fmt::Display for ColorString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
