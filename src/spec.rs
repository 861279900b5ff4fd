//! src/spec.rs
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const MIN_NGRAM_SIZE: usize = 1;
pub const MAX_NGRAM_SIZE: usize = 5;

/// The subset of n-gram sizes {1..5} enabled for a run. Built once at job
/// start and passed by value into the extraction stage; never re-derived
/// from ambient state per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NGramSizes(u8);

impl NGramSizes {
    pub fn empty() -> Self {
        NGramSizes(0)
    }

    pub fn enable(&mut self, n: usize) -> Result<(), ConfigError> {
        if !(MIN_NGRAM_SIZE..=MAX_NGRAM_SIZE).contains(&n) {
            return Err(ConfigError::SizeOutOfRange(n as u64));
        }
        self.0 |= 1 << (n - 1);
        Ok(())
    }

    pub fn contains(&self, n: usize) -> bool {
        (MIN_NGRAM_SIZE..=MAX_NGRAM_SIZE).contains(&n) && self.0 & (1 << (n - 1)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled sizes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + use<> {
        let mask = self.0;
        (MIN_NGRAM_SIZE..=MAX_NGRAM_SIZE).filter(move |n| mask & (1 << (n - 1)) != 0)
    }
}

impl FromStr for NGramSizes {
    type Err = ConfigError;

    /// Parses a comma-separated list such as `1,2,3,5`. An empty list is a
    /// configuration error; the job has nothing to count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sizes = NGramSizes::empty();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let n: u64 = entry.parse().map_err(|source| ConfigError::InvalidSize {
                entry: entry.to_string(),
                source,
            })?;
            if !(MIN_NGRAM_SIZE as u64..=MAX_NGRAM_SIZE as u64).contains(&n) {
                return Err(ConfigError::SizeOutOfRange(n));
            }
            sizes.enable(n as usize)?;
        }
        if sizes.is_empty() {
            return Err(ConfigError::EmptySizes);
        }
        Ok(sizes)
    }
}

/// Everything a run needs to know, fixed before the first document is read.
#[derive(Debug, Clone)]
pub struct CountSpec {
    input_dir: PathBuf,
    output_dir: PathBuf,
    sizes: NGramSizes,
}

impl CountSpec {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, sizes: NGramSizes) -> Self {
        CountSpec {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            sizes,
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn sizes(&self) -> NGramSizes {
        self.sizes
    }
}
