//! Human-readable dumps of decoded structures.
//!
//! Types implement [`Loggable`] to describe themselves as a list of
//! indented `title: value` lines, and [`Logger`] writes those lines to a
//! [`LogOutput`].

#[derive(Debug, Clone)]
pub enum LogOutput {
    Log(log::Level),
    LogTarget(log::Level, String),
    StdOut,
    StdErr,
    #[cfg(feature = "log-to-file")]
    File(std::sync::Arc<parking_lot::Mutex<std::fs::File>>),
}

impl From<log::Level> for LogOutput {
    fn from(value: log::Level) -> Self {
        Self::Log(value)
    }
}

impl LogOutput {
    #[cfg(feature = "log-to-file")]
    pub fn file(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self::File(std::sync::Arc::new(parking_lot::Mutex::new(
            file,
        ))))
    }

    fn print(&self, msg: &str) {
        match self {
            LogOutput::Log(level) => log::log!(*level, "{}", msg),
            LogOutput::LogTarget(level, target) => {
                log::log!(target: target, *level, "{}", msg)
            }
            LogOutput::StdOut => println!("{}", msg),
            LogOutput::StdErr => eprintln!("{}", msg),
            #[cfg(feature = "log-to-file")]
            LogOutput::File(file) => {
                use std::io::Write;

                let mut file = file.lock();
                file.write_all(msg.as_bytes()).ok();
                file.write_all(b"\n").ok();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogItem {
    level: usize,
    title: String,
    value: Option<String>,
}

impl LogItem {
    pub fn new<T: Into<String>, V: Into<String>>(level: usize, title: T, value: Option<V>) -> Self {
        Self {
            level,
            title: title.into(),
            value: value.map(Into::into),
        }
    }
}

impl<T: ToString, V: ToString> From<(usize, T, V)> for LogItem {
    fn from((level, title, value): (usize, T, V)) -> Self {
        Self::new(level, title.to_string(), Some(value.to_string()))
    }
}

impl<T: ToString> From<(usize, T)> for LogItem {
    fn from((level, value): (usize, T)) -> Self {
        Self::new::<_, String>(level, value.to_string(), None)
    }
}

pub struct Logger;

impl Logger {
    pub fn log<T>(output: &LogOutput, loggable: &T)
    where
        T: Loggable + ?Sized,
    {
        for line in Self::render(&loggable.as_log()) {
            output.print(&line);
        }
    }

    /// The first item is a heading. Values of the following items are
    /// aligned per indentation level.
    fn render(items: &[LogItem]) -> Vec<String> {
        let mut lines = Vec::with_capacity(items.len());

        if let Some(heading) = items.first() {
            lines.push(heading.title.clone());
        }

        let body = items.get(1..).unwrap_or(&[]);
        let align = |level: usize| {
            body.iter()
                .filter(|i| i.level == level && i.value.is_some())
                .map(|i| i.title.len())
                .max()
                .unwrap_or(0)
        };

        for LogItem {
            level,
            title,
            value,
        } in body
        {
            let indent = "  ".repeat(*level);

            let line = match value {
                Some(value) => {
                    let padding = " ".repeat(align(*level).saturating_sub(title.len()));
                    format!("{indent}{title}: {padding}{value}")
                }
                None => format!("{indent}{title}:"),
            };

            lines.push(line);
        }

        lines
    }
}

pub trait Loggable {
    fn as_log(&self) -> Vec<LogItem>;
}

#[macro_export]
macro_rules ! log_vec {
    [$($msg:tt)*] => {
        $crate::to_log!(vec: $($msg)*)
    }
}

#[macro_export]
macro_rules! to_log {
    ([$($array:tt)*],) => {
        vec![$($array)*]
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr)) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr)) => {
        $crate::to_log!([$($array)* ($level, $title).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),], $($msg)*)
    };

    ([$($array:tt)*], ($level:literal, $title:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title).into(),], $($msg)*)
    };

    (vec: $($msg:tt)*) => {
        $crate::to_log!([], $($msg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl Loggable for Sample {
        fn as_log(&self) -> Vec<LogItem> {
            log_vec![
                (0, "Sample"),
                (1, "Id", 7),
                (1, "Long title", "x"),
                (1, "Nested"),
                (2, "Value", 1.5),
            ]
        }
    }

    #[test]
    fn render_aligns_per_level() {
        let lines = Logger::render(&Sample.as_log());

        assert_eq!(
            lines,
            vec![
                "Sample".to_string(),
                "  Id:         7".to_string(),
                "  Long title: x".to_string(),
                "  Nested:".to_string(),
                "    Value: 1.5".to_string(),
            ]
        );
    }
}
