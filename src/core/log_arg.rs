//! Tagged log call arguments and message rendering
//!
//! A leveled log call takes an ordered slice of [`LogArg`] values. Each one is
//! either a primitive, rendered with its display form, or a structured value,
//! rendered as JSON. [`render_message`] joins them into the message string that
//! every stream receives.

use super::error::Result;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use serde_json::Value;
use std::borrow::Cow;
use std::{fmt, io};

/// JSON indentation is capped at this many spaces
pub const MAX_PRETTY_PRINT_SPACE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Structured value, always rendered as JSON
    Json(Value),
}

impl LogArg {
    /// Capture any serializable value as a structured argument
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(LogArg::Json(serde_json::to_value(value)?))
    }

    #[inline]
    pub fn is_structured(&self) -> bool {
        matches!(self, LogArg::Json(_) | LogArg::Null)
    }

    /// Render this argument as it appears in a message
    pub fn render(&self, pretty_print_space: Option<usize>) -> Cow<'_, str> {
        match self {
            LogArg::Str(s) => Cow::Borrowed(s.as_str()),
            LogArg::Int(i) => Cow::Owned(i.to_string()),
            LogArg::UInt(u) => Cow::Owned(u.to_string()),
            LogArg::Float(f) => Cow::Owned(format_float(*f)),
            LogArg::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            LogArg::Null => Cow::Borrowed("null"),
            LogArg::Json(value) => Cow::Owned(to_json(value, pretty_print_space)),
        }
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Join arguments into a message, each preceded by a single space
pub fn render_message(args: &[LogArg], pretty_print_space: Option<usize>) -> String {
    let mut message = String::new();
    for arg in args {
        message.push(' ');
        message.push_str(&arg.render(pretty_print_space));
    }
    message
}

/// Shortest round-trip spelling: positional between 1e-7 and 1e21,
/// exponent form (`1e+21`, `1.5e-7`) outside that range
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        return format!("{}Infinity", sign);
    }
    if f == 0.0 {
        // -0.0 prints as "0"
        return "0".to_string();
    }

    let sci = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // decimal point sits after `n` digits
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat(-n as usize), digits)
    } else {
        let (head, tail) = digits.split_at(1);
        let point = if tail.is_empty() { "" } else { "." };
        let sign = if n > 0 { '+' } else { '-' };
        format!("{}{}{}e{}{}", head, point, tail, sign, (n - 1).abs())
    };

    if f < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// JSON formatter that spells floats like primitive arguments
struct FloatSpelling<F>(F);

impl<F: Formatter> Formatter for FloatSpelling<F> {
    fn write_f32<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f32) -> io::Result<()> {
        self.write_f64(writer, f32_to_f64(value))
    }

    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_float(value).as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}

fn serialize_with<F: Formatter>(value: &Value, formatter: F) -> Option<String> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, FloatSpelling(formatter));
    value.serialize(&mut serializer).ok()?;
    String::from_utf8(out).ok()
}

fn to_json(value: &Value, pretty_print_space: Option<usize>) -> String {
    let width = pretty_print_space.unwrap_or(0).min(MAX_PRETTY_PRINT_SPACE);
    let rendered = if width == 0 {
        serialize_with(value, CompactFormatter)
    } else {
        let indent = " ".repeat(width);
        serialize_with(value, PrettyFormatter::with_indent(indent.as_bytes()))
    };
    rendered.unwrap_or_else(|| value.to_string())
}

/// Widen through the shortest `f32` spelling so `0.1_f32` stays `0.1`
fn f32_to_f64(v: f32) -> f64 {
    v.to_string().parse().unwrap_or(v as f64)
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Str(s.to_string())
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Str(s)
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Str(s.clone())
    }
}

impl From<bool> for LogArg {
    fn from(b: bool) -> Self {
        LogArg::Bool(b)
    }
}

impl From<char> for LogArg {
    fn from(c: char) -> Self {
        LogArg::Str(c.to_string())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogArg {
            fn from(v: $t) -> Self {
                LogArg::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogArg {
            fn from(v: $t) -> Self {
                LogArg::UInt(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LogArg {
    fn from(v: f32) -> Self {
        LogArg::Float(f32_to_f64(v))
    }
}

impl From<f64> for LogArg {
    fn from(v: f64) -> Self {
        LogArg::Float(v)
    }
}

impl From<Value> for LogArg {
    fn from(value: Value) -> Self {
        LogArg::Json(value)
    }
}

impl<T: Into<LogArg>> From<Option<T>> for LogArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogArg::Null, Into::into)
    }
}
