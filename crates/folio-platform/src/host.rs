//! The page the terminal is embedded in.

use folio_types::error::{FolioError, Result};

/// Where an external resource should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// A new browsing context (tab/window).
    NewContext,
    /// Replace the current browsing context (used for `mailto:` links).
    CurrentContext,
}

/// Effects the terminal asks its host page to perform.
pub trait PageHost {
    /// Scroll the element with `id` into view, leaving `header_offset` units
    /// above it for a fixed header. Returns `Ok(false)` when no such element
    /// exists.
    fn scroll_into_view(&mut self, id: &str, header_offset: u32) -> Result<bool>;

    /// Open `url` in the given browsing context. Fire-and-forget.
    fn open_url(&mut self, url: &str, target: OpenTarget) -> Result<()>;
}

/// In-memory host: a fixed set of element ids, with every requested effect
/// recorded instead of performed.
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    elements: Vec<String>,
    /// `(id, header_offset)` for each successful scroll.
    pub scrolled: Vec<(String, u32)>,
    /// `(url, target)` for each open request.
    pub opened: Vec<(String, OpenTarget)>,
    /// When set, every `open_url` fails as a blocked popup would.
    pub block_opens: bool,
}

impl MemoryHost {
    /// Create a host whose page contains the given element ids.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Whether the page contains an element with `id`.
    pub fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e == id)
    }
}

impl PageHost for MemoryHost {
    fn scroll_into_view(&mut self, id: &str, header_offset: u32) -> Result<bool> {
        if !self.has_element(id) {
            return Ok(false);
        }
        self.scrolled.push((id.to_string(), header_offset));
        Ok(true)
    }

    fn open_url(&mut self, url: &str, target: OpenTarget) -> Result<()> {
        if self.block_opens {
            return Err(FolioError::Host(format!("blocked opening {url}")));
        }
        self.opened.push((url.to_string(), target));
        Ok(())
    }
}
