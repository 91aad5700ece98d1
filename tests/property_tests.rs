//! Property-based tests for srelab_log using proptest

use proptest::prelude::*;
use srelab_log::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

fn quiet_logger() -> (Logger, std::sync::Arc<parking_lot::Mutex<Vec<u8>>>) {
    #[derive(Clone)]
    struct Sink(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let shared = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let engine = Engine::with_output(Sink(shared.clone()));
    engine.set_formatter(Formatter::new().without_timestamp());
    (engine.logger(), shared)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering follows the numeric values
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1.is_enabled_at(level2), val1 <= val2);
    }

    /// Test that LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(level.to_string(), level.to_str());
    }

    /// Test that parsing ignores case
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let name = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_uppercase()
        };
        let parsed: LogLevel = name.parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Test that FromStr for LogLevel handles invalid input gracefully
    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[^PFEWIDTpfewidt]+") {
        let result: std::result::Result<LogLevel, String> = invalid_str.parse();
        prop_assert!(result.is_err(), "Expected parse error for '{}', got: {:?}", invalid_str, result);
        prop_assert_eq!(srelab_log::config::parse_level(&invalid_str), LogLevel::Info);
    }
}

// ============================================================================
// Message Sanitization Tests
// ============================================================================

proptest! {
    /// Test that newlines are sanitized in log messages (prevents log injection)
    #[test]
    fn test_message_sanitization_newlines(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, &message, LogContext::new());

        prop_assert!(!entry.message.contains('\n'),
                "LogEntry contains unsanitized newline: {:?}", entry.message);

        let body = message.strip_suffix('\n').unwrap_or(&message);
        if body.contains('\n') {
            prop_assert!(entry.message.contains("\\n"),
                    "Newlines not properly escaped: {:?}", entry.message);
        }
    }

    /// Test that carriage returns and tabs are sanitized
    #[test]
    fn test_message_sanitization_control_chars(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, &message, LogContext::new());

        prop_assert!(!entry.message.contains('\r'));
        prop_assert!(!entry.message.contains('\t'));
    }

    /// Test that log injection attacks are prevented
    #[test]
    fn test_log_injection_prevention(
        legitimate_msg in "[a-zA-Z0-9 ]+",
        injected_level in prop_oneof![
            Just("error"),
            Just("warning"),
            Just("fatal"),
        ]
    ) {
        let (logger, out) = quiet_logger();
        let malicious_input = format!("{}\nlevel={} msg=\"Fake admin login\"", legitimate_msg, injected_level);
        logger.error(&[&malicious_input]);

        let written = String::from_utf8(out.lock().clone()).unwrap();
        prop_assert_eq!(written.lines().count(), 1,
                   "Record was split across lines: {:?}", written);
    }
}

// ============================================================================
// Facade Tests
// ============================================================================

proptest! {
    /// Test that the level gate is exactly `level <= threshold`
    #[test]
    fn test_level_gate(threshold in any_level(), level in any_level()) {
        prop_assume!(level != LogLevel::Panic && level != LogLevel::Fatal);
        let (logger, out) = quiet_logger();
        logger.set_level(threshold);

        logger.logf(level, format_args!("gate"));

        let written = !out.lock().is_empty();
        prop_assert_eq!(written, level <= threshold);
    }

    /// Test that attached fields never leak into the parent handle
    #[test]
    fn test_with_field_is_copy_on_attach(
        keys in prop::collection::btree_set("[a-z]{1,8}", 1..6)
    ) {
        let (base, _) = quiet_logger();
        let mut current = base.clone();
        let mut sizes = Vec::new();

        for key in &keys {
            let next = current.with_field(key.as_str(), 1);
            sizes.push(current.entry().context().len());
            current = next;
        }

        prop_assert!(base.entry().context().is_empty());
        prop_assert_eq!(sizes, (0..keys.len()).collect::<Vec<_>>());
        prop_assert_eq!(current.entry().context().len(), keys.len());
    }

    /// Test that every line ends with exactly one src field, whatever the keys
    #[test]
    fn test_single_trailing_src(
        fields in prop::collection::btree_map(".*", "[a-zA-Z0-9 .:]*", 0..5),
        message in "[a-zA-Z0-9 .:]*"
    ) {
        let (mut logger, out) = quiet_logger();
        for (key, value) in &fields {
            logger = logger.with_field(key.as_str(), value.as_str());
        }
        logger.info(&[&message]);

        let written = String::from_utf8(out.lock().clone()).unwrap();
        let line = written.trim_end_matches('\n');
        prop_assert_eq!(line.matches(" src=").count(), 1, "{}", line);
        prop_assert!(line.contains(" src=property_tests.rs:"), "{}", line);
        let tail = line.rsplit(" src=").next().unwrap_or_default();
        prop_assert!(tail.starts_with("property_tests.rs:"));
        prop_assert!(tail["property_tests.rs:".len()..].parse::<u32>().is_ok());
    }
}

// ============================================================================
// Safety Tests (No Panics)
// ============================================================================

proptest! {
    /// Test that formatting never panics regardless of input
    #[test]
    fn test_format_no_panic(
        message in ".*",
        key in ".*",
        value in ".*",
        level in any_level()
    ) {
        let context = LogContext::new().with_field(key, value);
        let entry = LogEntry::new(level, &message, context);

        let logfmt = Formatter::new().format(&entry);
        let text = Formatter::new().with_output_format(OutputFormat::Text).format(&entry);
        prop_assert!(logfmt.ends_with('\n'));
        prop_assert!(text.ends_with('\n'));
    }
}
