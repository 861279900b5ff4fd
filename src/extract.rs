//! src/extract.rs
use crate::spec::NGramSizes;

/// Delimiter between the tokens of an n-gram key.
pub const NGRAM_DELIMITER: &str = "_";

/// Emits `(key, 1)` pairs for every enabled n-gram size over a document's
/// token sequence. Holds its size set by value; configuration is fixed at
/// construction and never consulted from ambient state per record.
#[derive(Debug, Clone, Copy)]
pub struct NGramExtractor {
    sizes: NGramSizes,
}

impl NGramExtractor {
    pub fn new(sizes: NGramSizes) -> Self {
        NGramExtractor { sizes }
    }

    pub fn sizes(&self) -> NGramSizes {
        self.sizes
    }

    /// Slides a window of each enabled width over the tokens and lazily
    /// yields one count-of-1 record per window. A size-n window exists only
    /// where n tokens remain, so a sequence of length L produces exactly
    /// `max(0, L - n + 1)` records for size n and none ever cross into
    /// another document.
    pub fn extract<'a>(
        &self,
        tokens: &'a [&'a str],
    ) -> impl Iterator<Item = (String, u64)> + use<'a> {
        self.sizes.iter().flat_map(move |n| {
            tokens
                .windows(n)
                .map(|window| (window.join(NGRAM_DELIMITER), 1))
        })
    }
}
