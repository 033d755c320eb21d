//! Console stand-in for the host page.

use std::io::Write;

use folio_platform::{OpenTarget, PageHost};
use folio_types::error::Result;

/// Host that reports effects on a writer instead of a page.
///
/// The "page" has exactly the configured section ids.
pub struct ConsoleHost<W: Write> {
    sections: Vec<String>,
    out: W,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(sections: Vec<String>, out: W) -> Self {
        Self { sections, out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PageHost for ConsoleHost<W> {
    fn scroll_into_view(&mut self, id: &str, header_offset: u32) -> Result<bool> {
        if !self.sections.iter().any(|s| s == id) {
            return Ok(false);
        }
        writeln!(self.out, "[page] scrolled to #{id} (offset {header_offset}px)")?;
        Ok(true)
    }

    fn open_url(&mut self, url: &str, target: OpenTarget) -> Result<()> {
        let context = match target {
            OpenTarget::NewContext => "new tab",
            OpenTarget::CurrentContext => "current tab",
        };
        writeln!(self.out, "[page] open {url} in {context}")?;
        Ok(())
    }
}
