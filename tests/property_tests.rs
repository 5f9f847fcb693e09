//! Property-based tests for justlog using proptest

use chrono::DateTime;
use justlog::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
        Just(LogLevel::Fatal),
    ]
}

/// One step of work on a ColorString: plain text or a styling call
#[derive(Debug, Clone)]
enum Op {
    Text(String),
    Style(u8),
    Color(u8, bool),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,8}".prop_map(Op::Text),
        (0u8..7).prop_map(Op::Style),
        (0u8..8, any::<bool>()).prop_map(|(c, bg)| Op::Color(c, bg)),
    ]
}

fn apply(buffer: &mut ColorString, op: &Op) {
    match op {
        Op::Text(text) => {
            buffer.append(text);
        }
        Op::Style(n) => {
            match n {
                0 => buffer.reset(),
                1 => buffer.bright(),
                2 => buffer.dim(),
                3 => buffer.underscore(),
                4 => buffer.blink(),
                5 => buffer.reverse(),
                _ => buffer.hidden(),
            };
        }
        Op::Color(n, bg) => {
            match n {
                0 => buffer.black(*bg),
                1 => buffer.red(*bg),
                2 => buffer.green(*bg),
                3 => buffer.yellow(*bg),
                4 => buffer.blue(*bg),
                5 => buffer.magenta(*bg),
                6 => buffer.cyan(*bg),
                _ => buffer.white(*bg),
            };
        }
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Display names parse back to the same level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering follows the ordinals
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1.ordinal();
        let val2 = level2.ordinal();

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
    }

    /// is_min_level is exactly `level >= min_level`
    #[test]
    fn test_is_min_level(min_level in any_level(), level in any_level()) {
        let logger = Logger::with_stream("p", min_level, Arc::new(OutputStream::detached(false)));
        prop_assert_eq!(logger.is_min_level(level), level >= min_level);
        prop_assert!(logger.is_min_level(min_level));
    }
}

// ============================================================================
// ColorString Tests
// ============================================================================

proptest! {
    /// With colour off only the appended text survives
    #[test]
    fn test_disabled_color_is_plain_text(ops in proptest::collection::vec(any_op(), 0..40)) {
        let mut buffer = ColorString::new(false);
        let mut expected = String::new();
        for op in &ops {
            apply(&mut buffer, op);
            if let Op::Text(text) = op {
                expected.push_str(text);
            }
        }
        prop_assert_eq!(buffer.as_str(), expected.as_str());
        prop_assert!(!buffer.as_str().contains('\x1b'));
    }

    /// clear always empties the buffer
    #[test]
    fn test_clear_empties(
        ops in proptest::collection::vec(any_op(), 0..40),
        color in any::<bool>(),
    ) {
        let mut buffer = ColorString::new(color);
        for op in &ops {
            apply(&mut buffer, op);
        }
        buffer.clear();
        prop_assert_eq!(buffer.to_string(), "");
    }
}

// ============================================================================
// Stream and Logger Tests
// ============================================================================

proptest! {
    /// Uncoloured default output is exactly the documented layout
    #[test]
    fn test_default_layout(
        level in any_level(),
        name in "[a-z]{1,10}",
        message in "[ -~]{0,40}",
        secs in 0i64..4_000_000_000,
    ) {
        let time = DateTime::from_timestamp(secs, 0).unwrap();
        let stream = OutputStream::detached(false);
        let out = stream.write(level, &name, &message, time, &[]).unwrap();
        let expected = format!(
            "{} [{}] [{}] {}",
            TimestampFormat::Rfc1123.format(&time),
            level,
            name,
            message
        );
        prop_assert_eq!(out, expected);
    }

    /// Coloured output always starts and ends with a reset
    #[test]
    fn test_colored_output_is_reset(level in any_level(), message in "[a-z ]{0,20}") {
        let stream = OutputStream::detached(true);
        let out = stream.write_at_now(level, "p", &message).unwrap();
        prop_assert!(out.starts_with("\x1b[0m"));
        prop_assert!(out.ends_with("\x1b[0m"));
    }

    /// Every stream of a logger ends up with the same output
    #[test]
    fn test_fan_out_is_identical(
        stream_count in 1usize..6,
        level in any_level(),
        words in proptest::collection::vec("[a-z]{1,6}", 0..5),
    ) {
        let streams: Vec<Arc<OutputStream>> =
            (0..stream_count).map(|_| Arc::new(OutputStream::detached(false))).collect();
        let mut logger = Logger::with_stream("fan", LogLevel::Debug, streams[0].clone());
        for stream in &streams[1..] {
            logger.add_stream(stream.clone());
        }

        let args: Vec<LogArg> = words.iter().map(LogArg::from).collect();
        logger.log(level, &args);

        let first = streams[0].last_output();
        prop_assert!(!first.is_empty());
        for stream in &streams {
            prop_assert_eq!(stream.last_output(), first.clone());
        }
    }

    /// The message is every argument preceded by one space
    #[test]
    fn test_message_rendering(words in proptest::collection::vec("[a-z0-9]{0,6}", 0..8)) {
        let args: Vec<LogArg> = words.iter().map(LogArg::from).collect();
        let expected: String = words.iter().map(|w| format!(" {}", w)).collect();
        prop_assert_eq!(justlog::render_message(&args, None), expected);
    }
}
