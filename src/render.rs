//! HTML output writer with reusable buffer management.
//!
//! Recursive rendering writes every chunk's templates and content straight
//! into one buffer instead of concatenating per-level fragments.

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use ferrocreole::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.write_str("<tt>");
/// writer.write_str("code");
/// writer.write_str("</tt>");
///
/// assert_eq!(writer.into_string(), "<tt>code</tt>");
/// ```
#[derive(Debug, Clone)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Creole output is dominated by templates; ~1.5x input is typical.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 2)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Continue writing into an existing buffer, keeping its contents.
    #[inline]
    pub fn from_string(out: String) -> Self {
        Self { out }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1500);
    }

    #[test]
    fn test_writer_write_str() {
        let mut writer = HtmlWriter::new();
        writer.write_str("<p>");
        writer.write_str("\n");
        assert_eq!(writer.as_str(), "<p>\n");
        assert_eq!(writer.len(), 4);
    }

    #[test]
    fn test_writer_from_string_appends() {
        let mut writer = HtmlWriter::from_string(String::from("<hr />"));
        writer.write_str("\n");
        assert_eq!(writer.into_string(), "<hr />\n");
    }
}
