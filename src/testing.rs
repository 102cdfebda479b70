//! Deterministic RNG scripting for unit tests.

use std::collections::VecDeque;

use rand::RngCore;

/// Replays a fixed sequence of raw words, then yields zeros. Lets a test pin
/// a single uniform draw (e.g. "the intercept roll is 0.15") without caring
/// how many draws preceded it.
pub struct ScriptedRng {
    words: VecDeque<u32>,
}

impl ScriptedRng {
    #[must_use]
    pub fn new(words: &[u32]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Script uniform `f32` draws in `[0, 1)`. Mirrors the standard 24-bit
    /// float conversion: `fraction << 8` reproduces the requested value.
    #[must_use]
    pub fn from_f32s(values: &[f32]) -> Self {
        let words: Vec<u32> = values
            .iter()
            .map(|v| {
                let fraction = (f64::from(*v) * f64::from(1u32 << 24)) as u32;
                fraction << 8
            })
            .collect();
        Self::new(&words)
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.words.pop_front().unwrap_or(0)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn scripted_f32_round_trips() {
        let mut rng = ScriptedRng::from_f32s(&[0.15, 0.85]);
        let first: f32 = rng.random();
        let second: f32 = rng.random();
        assert!((first - 0.15).abs() < 1e-6);
        assert!((second - 0.85).abs() < 1e-6);
        // Exhausted script falls back to zero.
        let third: f32 = rng.random();
        assert!(third.abs() < f32::EPSILON);
    }
}
