// src/poller/report.rs
use super::error::PollError;
use serde_json::Value;
use std::io::{self, Write};

/// Line-oriented report stream. Every line is flushed as soon as it is written
/// so piped output can be followed live.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn status(&mut self, code: u16) -> io::Result<()> {
        self.line(format_args!("Status: {}", code))
    }

    pub fn body(&mut self, body: &Value) -> io::Result<()> {
        self.line(format_args!("{}", body))
    }

    pub fn error(&mut self, err: &PollError) -> io::Result<()> {
        self.line(format_args!("Error: {}", err))
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_status_then_body() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.status(200).unwrap();
        reporter.body(&json!({"ok": true})).unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "Status: 200\n{\"ok\":true}\n");
    }

    #[test]
    fn test_error_line() {
        let mut reporter = Reporter::new(Vec::new());
        reporter
            .error(&PollError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            .unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "Error: unexpected HTTP status 500 Internal Server Error\n");
    }

    fn json_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-z ]{0,12}".prop_map(Value::from),
        ]
    }

    fn json_value() -> impl Strategy<Value = Value> {
        json_leaf().prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_success_block_is_status_then_body(code in 100u16..600, body in json_value()) {
            let mut reporter = Reporter::new(Vec::new());
            reporter.status(code).unwrap();
            reporter.body(&body).unwrap();

            let out = String::from_utf8(reporter.into_inner()).unwrap();
            let lines: Vec<&str> = out.lines().collect();

            prop_assert_eq!(lines.len(), 2);
            prop_assert_eq!(lines[0], format!("Status: {}", code));
            let printed: Value = serde_json::from_str(lines[1]).unwrap();
            prop_assert_eq!(printed, body);
        }
    }
}
