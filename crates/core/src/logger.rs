/// Receives formatted status lines emitted during evaluation.
pub trait Logger {
    /// Logs a single line.
    fn log(&mut self, line: &str);
}

/// Blanket implementation for logger closures.
impl<F> Logger for F
where
    F: FnMut(&str),
{
    fn log(&mut self, line: &str) {
        self(line);
    }
}

/// A no-op logger that discards every line.
impl Logger for () {
    fn log(&mut self, _line: &str) {}
}

/// Forwards lines to the [`log`] facade at `info` level.
///
/// Nothing is printed unless the application installs a `log` backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLogger;

impl LogLogger {
    /// Target used for every forwarded record.
    pub const TARGET: &'static str = "zeroth";
}

impl Logger for LogLogger {
    fn log(&mut self, line: &str) {
        log::info!(target: Self::TARGET, "{line}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn closure_collects_lines() {
        let mut lines = Vec::new();
        {
            let mut logger = |line: &str| lines.push(line.to_owned());
            logger.log("first");
            logger.log("second");
        }
        assert_eq!(lines, ["first", "second"]);
    }

    /// Records every `log` record so forwarding can be checked.
    struct Capture {
        records: Mutex<Vec<(String, log::Level, String)>>,
    }

    impl log::Log for Capture {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            self.records.lock().unwrap().push((
                record.target().to_owned(),
                record.level(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn log_logger_forwards_to_log_facade() {
        // The only test in this crate that installs a backend.
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Info);

        LogLogger.log("budget 1, fx result: 3");

        let records = CAPTURE.records.lock().unwrap();
        assert_eq!(
            *records,
            [(
                LogLogger::TARGET.to_owned(),
                log::Level::Info,
                "budget 1, fx result: 3".to_owned(),
            )]
        );
    }
}
