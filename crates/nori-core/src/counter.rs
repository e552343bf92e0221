//! A counter cell with an explicit initial value.

/// An integer cell that remembers its initial value for resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    initial: i64,
    count: i64,
}

impl Counter {
    /// Create a counter starting at `initial`.
    pub fn new(initial: i64) -> Self {
        Self {
            initial,
            count: initial,
        }
    }

    /// Increment and return the new value.
    pub fn increment(&mut self) -> i64 {
        self.count += 1;
        self.count
    }

    /// Decrement and return the new value.
    pub fn decrement(&mut self) -> i64 {
        self.count -= 1;
        self.count
    }

    /// The current value. Never mutates.
    pub fn value(&self) -> i64 {
        self.count
    }

    /// Reset to the initial value and return it.
    pub fn reset(&mut self) -> i64 {
        self.count = self.initial;
        self.count
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_from_five() {
        let mut counter = Counter::new(5);
        assert_eq!(counter.increment(), 6);
        assert_eq!(counter.decrement(), 5);
        assert_eq!(counter.reset(), 5);
    }

    #[test]
    fn test_value_does_not_mutate() {
        let mut counter = Counter::new(3);
        counter.increment();
        assert_eq!(counter.value(), 4);
        assert_eq!(counter.value(), 4);
    }

    #[test]
    fn test_reset_returns_to_initial_not_zero() {
        let mut counter = Counter::new(10);
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.reset(), 10);
    }
}
