/// Monotonic like counter for the current session
#[derive(Debug, Clone, Default)]
pub struct LikeCounter {
    count: u64,
}

impl LikeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one like and return the new total
    pub fn like(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Badge text, e.g. "1 Like" or "3 Likes"
    pub fn label(&self) -> String {
        if self.count == 1 {
            "1 Like".to_string()
        } else {
            format!("{} Likes", self.count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_number_of_likes() {
        for n in [0u64, 1, 2, 17, 250] {
            let mut counter = LikeCounter::new();
            for _ in 0..n {
                counter.like();
            }
            assert_eq!(counter.count(), n);
        }
    }

    #[test]
    fn test_like_returns_new_total() {
        let mut counter = LikeCounter::new();
        assert_eq!(counter.like(), 1);
        assert_eq!(counter.like(), 2);
    }

    #[test]
    fn test_label_pluralizes() {
        let mut counter = LikeCounter::new();
        assert_eq!(counter.label(), "0 Likes");
        counter.like();
        assert_eq!(counter.label(), "1 Like");
        counter.like();
        assert_eq!(counter.label(), "2 Likes");
    }
}
