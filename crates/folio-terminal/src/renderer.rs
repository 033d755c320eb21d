//! Output log: the ordered, styled lines shown above the input.

use std::collections::VecDeque;

/// Kind tag carried by every rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Banner and status text from the terminal itself.
    System,
    /// The prompt plus the escaped text the user submitted.
    InputEcho,
    /// Command output.
    Output,
    /// Unknown command or failed effect.
    Error,
    /// Spacer between command invocations.
    Blank,
}

impl LineKind {
    /// CSS class a page host styles this kind with.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::InputEcho => "input-echo",
            Self::Output => "output",
            Self::Error => "error",
            Self::Blank => "blank",
        }
    }
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Monotonic id, unique for the lifetime of the log (survives `clear`).
    pub id: u64,
    pub kind: LineKind,
    /// Trusted markup. May span several visual rows.
    pub content: String,
}

/// Append-only log of rendered lines with a bottom-pinned viewport.
#[derive(Debug, Clone)]
pub struct OutputLog {
    lines: VecDeque<Line>,
    next_id: u64,
    max_lines: Option<usize>,
    viewport_rows: usize,
    scroll_offset: usize,
}

impl OutputLog {
    /// Create an empty log. `max_lines` bounds scrollback.
    pub fn new(max_lines: Option<usize>) -> Self {
        Self {
            lines: VecDeque::new(),
            next_id: 0,
            max_lines,
            viewport_rows: 24,
            scroll_offset: 0,
        }
    }

    /// Append a line and scroll so it is visible.
    pub fn append(&mut self, content: impl Into<String>, kind: LineKind) {
        let line = Line {
            id: self.next_id,
            kind,
            content: content.into(),
        };
        self.next_id += 1;
        self.lines.push_back(line);
        if let Some(max) = self.max_lines {
            while self.lines.len() > max {
                self.lines.pop_front();
            }
        }
        self.scroll_to_bottom();
    }

    /// Append an empty spacer line.
    pub fn blank(&mut self) {
        self.append(String::new(), LineKind::Blank);
    }

    /// Remove every line at once.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_offset = 0;
    }

    /// Lines, oldest first.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The most recently appended line.
    pub fn last(&self) -> Option<&Line> {
        self.lines.back()
    }

    /// Tell the log how many lines the host viewport shows.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Index of the first visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_rows)
    }

    /// Scroll to an explicit offset, clamped.
    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_scroll());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Lines inside the viewport.
    pub fn visible(&self) -> impl Iterator<Item = &Line> {
        self.lines
            .iter()
            .skip(self.scroll_offset)
            .take(self.viewport_rows)
    }
}

impl Default for OutputLog {
    fn default() -> Self {
        Self::new(None)
    }
}
