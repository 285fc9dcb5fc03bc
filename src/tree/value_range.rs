use std::fmt;

/// Inclusive range of legal leaf values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Stands in for negative infinity during a search.
    pub fn lower_sentinel(&self) -> Option<i32> {
        self.min.checked_sub(1)
    }

    /// Stands in for positive infinity during a search.
    pub fn upper_sentinel(&self) -> Option<i32> {
        self.max.checked_add(1)
    }

    pub fn has_sentinels(&self) -> bool {
        self.lower_sentinel().is_some() && self.upper_sentinel().is_some()
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
