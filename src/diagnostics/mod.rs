//! Pretty, source-annotated error reporting.
//!
//! Renders [`crate::driver::CompileError`] variants that carry a line number
//! as an `ariadne` report with a labeled source snippet; everything else
//! falls back to a plain `eprintln!` of its `Display`, matching the
//! graceful-degradation behavior this falls back to when a report itself
//! can't be built (e.g. the line number is out of range for the source
//! actually on disk).

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::CompileError;

/// The byte range of line `line` (1-based) within `source`, clamped to the
/// source's bounds.
fn line_byte_range(source: &str, line: u32) -> std::ops::Range<usize> {
    let mut current_line = 1u32;
    let mut start = 0usize;
    for (idx, ch) in source.char_indices() {
        if ch == '\n' {
            if current_line == line {
                return start..idx;
            }
            current_line += 1;
            start = idx + 1;
        }
    }
    if current_line == line {
        return start..source.len();
    }
    let len = source.len();
    len..len
}

fn line_for_error(error: &CompileError) -> Option<u32> {
    match error {
        CompileError::Lex(e) => Some(e.line),
        CompileError::Parse(e) => Some(e.line),
        CompileError::Codegen(crate::codegen::CodegenError::UndeclaredIdentifier { line, .. })
        | CompileError::Codegen(crate::codegen::CodegenError::DuplicateLet { line, .. }) => {
            Some(*line)
        }
        _ => None,
    }
}

/// Prints `error` to stderr, with a labeled source snippet when a line
/// number is available and the source is accessible; otherwise a plain
/// message.
pub fn report_error(filename: &str, source: &str, error: &CompileError) {
    let Some(line) = line_for_error(error) else {
        eprintln!("{error}");
        return;
    };
    let range = line_byte_range(source, line);
    if range.start > source.len() || range.end > source.len() {
        eprintln!("{error}");
        return;
    }

    let build_report = || {
        Report::build(ReportKind::Error, (filename, range.clone()))
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_label(
                Label::new((filename, range.clone()))
                    .with_message(error.to_string())
                    .with_color(Color::Red),
            )
            .finish()
    };

    let report = build_report();
    if report
        .eprint((filename, Source::from(source)))
        .is_err()
    {
        eprintln!("{error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_byte_range_finds_middle_line() {
        let source = "a\nbb\nccc";
        assert_eq!(line_byte_range(source, 2), 2..4);
    }

    #[test]
    fn line_byte_range_finds_first_line() {
        let source = "abc\ndef";
        assert_eq!(line_byte_range(source, 1), 0..3);
    }

    #[test]
    fn line_byte_range_finds_last_unterminated_line() {
        let source = "abc\ndef";
        assert_eq!(line_byte_range(source, 2), 4..7);
    }

    #[test]
    fn line_byte_range_out_of_bounds_is_empty_at_end() {
        let source = "abc";
        let range = line_byte_range(source, 99);
        assert_eq!(range.start, range.end);
    }
}
