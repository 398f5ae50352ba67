use once_cell::unsync::OnceCell;
use std::fmt::{Display, Formatter};

/// 1-based line and column of a byte offset into a source buffer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position")
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}

/// Source bytes with a lazily computed, cached line-break index.
///
/// The line-break table is built once on first use and reused for every
/// subsequent `line_text` lookup — the Driver calls this once per failed
/// parse to slice out the offending line for its diagnostic.
pub struct Code<'c> {
    pub value: &'c [u8],
    line_breaks: OnceCell<Vec<usize>>,
}

impl<'c> From<&'c [u8]> for Code<'c> {
    fn from(value: &'c [u8]) -> Self {
        Code::new(value)
    }
}
impl<'c> From<&'c str> for Code<'c> {
    fn from(value: &'c str) -> Self {
        Code::new(value.as_bytes())
    }
}

impl<'c> Code<'c> {
    pub fn new(value: &'c [u8]) -> Self {
        Self {
            value,
            line_breaks: OnceCell::new(),
        }
    }

    fn obtain_line_breaks(&self) -> &Vec<usize> {
        self.line_breaks.get_or_init(|| {
            self.value
                .iter()
                .enumerate()
                .filter_map(|(index, n)| if *n == b'\n' { Some(index) } else { None })
                .collect()
        })
    }

    /// The raw text of 1-based `line`, or `None` if the source has fewer
    /// lines than that (e.g. an empty source has no line 1 text, only a
    /// diagnostic position).
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line == 0 {
            return None;
        }
        let line_breaks = self.obtain_line_breaks();
        let start = if line == 1 {
            0
        } else {
            *line_breaks.get(line - 2)? + 1
        };
        let end = line_breaks.get(line - 1).copied().unwrap_or(self.value.len());
        if start > self.value.len() {
            return None;
        }
        Some(String::from_utf8_lossy(&self.value[start..end]).into_owned())
    }
}
