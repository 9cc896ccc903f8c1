//! Passage - A book/chapter/verse-range reference

use serde::{Deserialize, Serialize};

/// A scripture passage within one chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passage {
    pub book: String,
    pub chapter: u32,
    pub verse_start: u32,
    pub verse_end: u32,
}

impl Passage {
    pub fn new(book: impl Into<String>, chapter: u32, verse_start: u32, verse_end: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse_start,
            verse_end,
        }
    }
}

impl std::fmt::Display for Passage {
    /// Formats the reference, e.g. `João 3:16` or `Gênesis 1:1-31`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.verse_start == self.verse_end {
            write!(f, "{} {}:{}", self.book, self.chapter, self.verse_start)
        } else {
            write!(
                f,
                "{} {}:{}-{}",
                self.book, self.chapter, self.verse_start, self.verse_end
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_with_range() {
        let passage = Passage::new("Gênesis", 1, 1, 31);
        assert_eq!(passage.to_string(), "Gênesis 1:1-31");
    }

    #[test]
    fn test_reference_single_verse() {
        let passage = Passage::new("João", 3, 16, 16);
        assert_eq!(passage.to_string(), "João 3:16");
    }
}
