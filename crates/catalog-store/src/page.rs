/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: usize,
    size: usize,
}

impl Page {
    pub const fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    pub const fn number(self) -> usize {
        self.number
    }

    pub const fn size(self) -> usize {
        self.size
    }

    /// Take this page out of an ordered sequence
    pub(crate) fn slice<T>(self, items: impl Iterator<Item = T>) -> Vec<T> {
        items.skip(self.number.saturating_mul(self.size)).take(self.size).collect()
    }
}
