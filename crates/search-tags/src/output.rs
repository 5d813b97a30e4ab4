//! Helpers for rendering patterns and search hits.

use std::io::Write;

use eyre::{Context, Result};
use serde::Serialize;

use crate::search::Hit;

#[derive(Serialize)]
struct PatternReport<'a> {
    abbreviation: &'a str,
    pattern: &'a str,
}

#[derive(Serialize)]
struct HitReport<'a> {
    path: String,
    line: usize,
    text: &'a str,
}

impl<'a> From<&'a Hit> for HitReport<'a> {
    fn from(hit: &'a Hit) -> Self {
        Self {
            path: hit.path.display().to_string(),
            line: hit.line,
            text: &hit.text,
        }
    }
}

fn write_json_line<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, value).wrap_err("failed to serialize JSON output")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}

pub(crate) fn write_pattern(
    writer: &mut dyn Write,
    abbreviation: &str,
    pattern: &str,
    json: bool,
) -> Result<()> {
    if json {
        return write_json_line(
            writer,
            &PatternReport {
                abbreviation,
                pattern,
            },
        );
    }
    writeln!(writer, "{pattern}").wrap_err("failed to write pattern")
}

pub(crate) fn write_hit(writer: &mut dyn Write, hit: &Hit, json: bool) -> Result<()> {
    if json {
        return write_json_line(writer, &HitReport::from(hit));
    }
    writeln!(writer, "{}:{}: {}", hit.path.display(), hit.line, hit.text).wrap_err_with(|| {
        format!(
            "failed to write match at {}:{}",
            hit.path.display(),
            hit.line
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        if let Err(err) = f(&mut buffer) {
            panic!("writing should succeed: {err}");
        }
        String::from_utf8(buffer).unwrap_or_else(|err| panic!("output should be UTF-8: {err}"))
    }

    fn hit() -> Hit {
        Hit {
            path: PathBuf::from("src/App.jsx"),
            line: 12,
            text: "<b className=\"x\">".into(),
        }
    }

    #[test]
    fn writes_plain_pattern() {
        let out = rendered(|w| write_pattern(w, ".x", "className=(?=.*?x).*", false));
        assert_eq!(out, "className=(?=.*?x).*\n");
    }

    #[test]
    fn writes_pattern_report_json() -> Result<()> {
        let out = rendered(|w| write_pattern(w, ".x", "className=(?=.*?x).*", true));
        let parsed: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(
            parsed.get("abbreviation"),
            Some(&serde_json::Value::String(".x".into()))
        );
        assert_eq!(
            parsed.get("pattern"),
            Some(&serde_json::Value::String("className=(?=.*?x).*".into()))
        );
        Ok(())
    }

    #[test]
    fn writes_hit_with_location() {
        let out = rendered(|w| write_hit(w, &hit(), false));
        assert_eq!(out, "src/App.jsx:12: <b className=\"x\">\n");
    }

    #[test]
    fn writes_hit_json() -> Result<()> {
        let out = rendered(|w| write_hit(w, &hit(), true));
        let parsed: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(parsed.get("line"), Some(&serde_json::Value::from(12_u64)));
        assert_eq!(
            parsed.get("path"),
            Some(&serde_json::Value::String("src/App.jsx".into()))
        );
        Ok(())
    }
}
