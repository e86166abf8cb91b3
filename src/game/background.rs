//! Cosmetic background selection.

use rand::Rng;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct BackgroundPicker {
    count: usize,
    current: Option<usize>,
}

impl BackgroundPicker {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: None,
        }
    }

    /// Choose a background uniformly at random, never repeating the current
    /// one when there is an alternative. Returns the new index, or `None`
    /// when no backgrounds are configured.
    pub fn pick<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.count == 0 {
            warn!("no backgrounds configured, keeping the current one");
            return None;
        }

        let next = match self.current {
            Some(current) if self.count > 1 => {
                // Draw from the other count-1 slots and skip over the current one
                let candidate = rng.gen_range(0..self.count - 1);
                if candidate >= current {
                    candidate + 1
                } else {
                    candidate
                }
            }
            _ => rng.gen_range(0..self.count),
        };

        self.current = Some(next);
        Some(next)
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_never_repeats_with_several_options() {
        let mut picker = BackgroundPicker::new(3);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut previous = picker.pick(&mut rng).unwrap();
        for _ in 0..500 {
            let next = picker.pick(&mut rng).unwrap();
            assert_ne!(next, previous);
            assert!(next < 3);
            previous = next;
        }
    }

    #[test]
    fn test_all_options_reachable() {
        let mut picker = BackgroundPicker::new(4);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[picker.pick(&mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_single_option_repeats() {
        let mut picker = BackgroundPicker::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(picker.pick(&mut rng), Some(0));
        assert_eq!(picker.pick(&mut rng), Some(0));
    }

    #[test]
    fn test_no_options_is_noop() {
        let mut picker = BackgroundPicker::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(picker.pick(&mut rng), None);
        assert_eq!(picker.current(), None);
    }
}
