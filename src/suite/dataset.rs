//! Benchmark input dataset.

/// Ordered sequence of integers generated once before measurement.
///
/// The dataset is immutable after construction. The owning suite replaces it
/// wholesale on re-setup rather than mutating it in place, so a populated
/// dataset always holds exactly the sequence its constructor produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Build a dataset of consecutive integers `1..=size`.
    #[must_use]
    pub fn consecutive(size: usize) -> Self {
        Self {
            values: (1..=size as i64).collect(),
        }
    }

    /// Build a dataset from explicit values.
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// An empty dataset, the state before setup has run.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the elements.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
