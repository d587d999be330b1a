//! Tick - Process-wide monotonic identifier source
//!
//! Collection identifiers, document keys and document revisions are all
//! drawn from one tick sequence. A tick is never handed out twice.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic tick generator shared by the collection directory and the
/// storage engine.
#[derive(Debug, Default)]
pub struct TickGenerator {
    last: AtomicU64,
}

impl TickGenerator {
    /// Creates a generator whose first tick is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator whose first tick is `last + 1`.
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// Returns the next tick.
    #[inline]
    pub fn next(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns the most recently issued tick (0 if none).
    #[inline]
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_ticks_increase() {
        let ticks = TickGenerator::new();
        assert_eq!(ticks.next(), 1);
        assert_eq!(ticks.next(), 2);
        assert_eq!(ticks.current(), 2);
    }

    #[test]
    fn test_starting_after() {
        let ticks = TickGenerator::starting_after(33);
        assert_eq!(ticks.next(), 34);
    }

    #[test]
    fn test_no_duplicates_across_threads() {
        let ticks = Arc::new(TickGenerator::new());
        let mut handles = vec![];

        for _ in 0..8 {
            let t = Arc::clone(&ticks);
            handles.push(thread::spawn(move || (0..250).map(|_| t.next()).collect::<Vec<_>>()));
        }

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();

        assert_eq!(all.len(), 2000);
    }
}
