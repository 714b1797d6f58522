//! Emission currency: ordered chunks of output text carrying source origins
//!
//! A fragment is an ordered tree of text chunks and child fragments. Each
//! fragment optionally names the source position it came from; text chunks
//! inherit the nearest enclosing origin when the source map is built.

use crate::utils::Position;

#[derive(Debug, Clone)]
pub enum Chunk {
    Text(String),
    Child(Fragment),
}

#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub origin: Option<Position>,
    pub chunks: Vec<Chunk>,
}

impl Fragment {
    /// A fragment originating at the given source position.
    pub fn new(origin: Position) -> Self {
        Self {
            origin: Some(origin),
            chunks: Vec::new(),
        }
    }

    /// A fragment with no origin of its own (the prelude and other glue).
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.push_str(text);
        self
    }

    pub fn child(mut self, fragment: Fragment) -> Self {
        self.push(fragment);
        self
    }

    pub fn push_str(&mut self, text: impl Into<String>) {
        self.chunks.push(Chunk::Text(text.into()));
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.chunks.push(Chunk::Child(fragment));
    }

    /// Flatten to plain text, discarding origins.
    pub fn to_code(&self) -> String {
        let mut out = String::new();
        self.write_code(&mut out);
        out
    }

    fn write_code(&self, out: &mut String) {
        for chunk in &self.chunks {
            match chunk {
                Chunk::Text(text) => out.push_str(text),
                Chunk::Child(child) => child.write_code(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_preserves_order() {
        let inner = Fragment::new(Position::new(2, 4)).text("b").text("c");
        let fragment = Fragment::bare().text("a").child(inner).text("d");
        assert_eq!(fragment.to_code(), "abcd");
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(Fragment::bare().to_code(), "");
    }
}
