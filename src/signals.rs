// Synthetic signal generation and boundary-ladder construction
//
// The randomness stands in for a real predictive model, so it sits behind a
// small trait: the coordination core and the roles only see a SignalSource,
// and a trained component can replace RandomSignalSource without touching
// either.

use rand::{thread_rng, Rng};

use crate::types::{LADDER_LEVELS, LONG_SIGNAL_MAX, SHORT_SIGNAL_MAX};

/// Source of per-symbol synthetic market values.
pub trait SignalSource {
    /// Synthetic base reference value for a symbol.
    fn base_price(&mut self, symbol: &str) -> f64;

    /// Long-direction strength on the 0..=7 scale.
    fn long_strength(&mut self, symbol: &str) -> u8;

    /// Short-direction strength on the narrower 0..=3 scale.
    fn short_strength(&mut self, symbol: &str) -> u8;
}

/// Default source: uniform pseudo-randomness, no persisted state.
#[derive(Debug, Default)]
pub struct RandomSignalSource;

impl SignalSource for RandomSignalSource {
    fn base_price(&mut self, _symbol: &str) -> f64 {
        100.0 + thread_rng().gen_range(0..=50000) as f64 / 100.0
    }

    fn long_strength(&mut self, _symbol: &str) -> u8 {
        thread_rng().gen_range(0..=LONG_SIGNAL_MAX)
    }

    fn short_strength(&mut self, _symbol: &str) -> u8 {
        thread_rng().gen_range(0..=SHORT_SIGNAL_MAX)
    }
}

/// The two 7-level price ladders bracketing a base reference value, each
/// enumerated from the steepest offset to the base-adjacent one.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLadder {
    /// Strictly ascending, 7%..1% below base.
    pub low: Vec<f64>,
    /// Strictly descending, 7%..1% above base.
    pub high: Vec<f64>,
}

impl BoundaryLadder {
    pub fn around(base: f64) -> Self {
        let mut low = Vec::with_capacity(LADDER_LEVELS);
        let mut high = Vec::with_capacity(LADDER_LEVELS);

        for i in 0..LADDER_LEVELS {
            let offset = 0.01 * (LADDER_LEVELS - i) as f64;
            low.push(base * (1.0 - offset));
            high.push(base * (1.0 + offset));
        }

        Self { low, high }
    }
}

/// Render a ladder as the published comma-separated decimal sequence.
pub fn format_levels(levels: &[f64]) -> String {
    let mut out = levels
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(", ");
    out.push('\n');
    out
}

/// First value of a published ladder, if the sequence parses.
pub fn parse_first_level(text: &str) -> Option<f64> {
    text.split(',').next()?.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_ordering() {
        let ladder = BoundaryLadder::around(1000.0);

        assert_eq!(ladder.low.len(), LADDER_LEVELS);
        assert_eq!(ladder.high.len(), LADDER_LEVELS);

        for pair in ladder.low.windows(2) {
            assert!(pair[0] < pair[1], "low ladder must be strictly ascending");
        }
        for pair in ladder.high.windows(2) {
            assert!(pair[0] > pair[1], "high ladder must be strictly descending");
        }
    }

    #[test]
    fn test_ladder_centered_on_base() {
        let base = 1000.0;
        let ladder = BoundaryLadder::around(base);

        assert!((ladder.low[0] - 930.0).abs() < 1e-9);
        assert!((ladder.low[6] - 990.0).abs() < 1e-9);
        assert!((ladder.high[0] - 1070.0).abs() < 1e-9);
        assert!((ladder.high[6] - 1010.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_and_parse_roundtrip_first_level() {
        let ladder = BoundaryLadder::around(250.0);
        let rendered = format_levels(&ladder.low);

        assert!(rendered.ends_with('\n'));
        assert_eq!(rendered.matches(", ").count(), LADDER_LEVELS - 1);

        let first = parse_first_level(&rendered).unwrap();
        assert!((first - ladder.low[0]).abs() < 1e-6);
    }

    #[test]
    fn test_parse_first_level_rejects_garbage() {
        assert_eq!(parse_first_level("not a number, 2.0"), None);
        assert_eq!(parse_first_level(""), None);
    }

    #[test]
    fn test_random_source_respects_ranges() {
        let mut source = RandomSignalSource;

        for _ in 0..50 {
            assert!(source.long_strength("BTC") <= LONG_SIGNAL_MAX);
            assert!(source.short_strength("BTC") <= SHORT_SIGNAL_MAX);
            let base = source.base_price("BTC");
            assert!((100.0..=600.0).contains(&base));
        }
    }
}
