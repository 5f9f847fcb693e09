//! Level-to-colour policy hook

use super::color_string::ColorString;
use super::log_level::LogLevel;

/// Applies the colour for a level to a stream's buffer
///
/// Implement this (or pass a closure) to replace a stream's colour mapping.
pub trait ColorPicker: Send + Sync {
    fn pick(&self, level: LogLevel, buffer: &mut ColorString);
}

/// INFO white, WARNING yellow, ERROR red, CRITICAL red background,
/// FATAL bright on red background. DEBUG keeps the terminal default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultColorPicker;

impl ColorPicker for DefaultColorPicker {
    fn pick(&self, level: LogLevel, buffer: &mut ColorString) {
        match level {
            LogLevel::Debug => {}
            LogLevel::Info => {
                buffer.white(false);
            }
            LogLevel::Warning => {
                buffer.yellow(false);
            }
            LogLevel::Error => {
                buffer.red(false);
            }
            LogLevel::Critical => {
                buffer.red(true);
            }
            LogLevel::Fatal => {
                buffer.red(true).bright();
            }
        }
    }
}

/// Never colours anything
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainColorPicker;

impl ColorPicker for PlainColorPicker {
    fn pick(&self, _level: LogLevel, _buffer: &mut ColorString) {}
}

impl<F> ColorPicker for F
where
    F: Fn(LogLevel, &mut ColorString) + Send + Sync,
{
    fn pick(&self, level: LogLevel, buffer: &mut ColorString) {
        self(level, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked(picker: &dyn ColorPicker, level: LogLevel) -> String {
        let mut buffer = ColorString::new(true);
        picker.pick(level, &mut buffer);
        buffer.to_string()
    }

    #[test]
    fn test_default_mapping() {
        let picker = DefaultColorPicker;
        assert_eq!(picked(&picker, LogLevel::Debug), "");
        assert_eq!(picked(&picker, LogLevel::Info), "\x1b[37m");
        assert_eq!(picked(&picker, LogLevel::Warning), "\x1b[33m");
        assert_eq!(picked(&picker, LogLevel::Error), "\x1b[31m");
        assert_eq!(picked(&picker, LogLevel::Critical), "\x1b[41m");
        assert_eq!(picked(&picker, LogLevel::Fatal), "\x1b[41m\x1b[1m");
    }

    #[test]
    fn test_plain_picker() {
        for level in LogLevel::ALL {
            assert_eq!(picked(&PlainColorPicker, level), "");
        }
    }

    #[test]
    fn test_closure_picker() {
        let picker = |level: LogLevel, buffer: &mut ColorString| {
            if level >= LogLevel::Error {
                buffer.magenta(false);
            }
        };
        assert_eq!(picked(&picker, LogLevel::Info), "");
        assert_eq!(picked(&picker, LogLevel::Fatal), "\x1b[35m");
    }
}
