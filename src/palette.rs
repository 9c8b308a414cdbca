//! Process-wide visual constants: categorical palette, monochrome ramp,
//! alarm color, and the hatch-pattern alphabet.
//!
//! All tables are immutable and shared read-only by every trace
//! processed in one run; there is no initialization-order dependency.

use serde::{Serialize, Serializer};

/// 20-entry categorical fill palette (D3 Category20 ordering).
///
/// Indexed modulo [`CATEGORICAL_PERIOD`]; the final entry is
/// intentionally unused so normal fills never collide visually with the
/// deadline-miss alarm color.
pub const CATEGORICAL: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Cycle length for categorical color assignment (entry 19 reserved).
pub const CATEGORICAL_PERIOD: i64 = 19;

/// Override color for deadline-miss highlighting. Distinct from both the
/// categorical palette and every grey-ramp shade.
pub const ALARM_COLOR: &str = "red";

/// Categorical color for a secondary-axis key.
#[inline]
pub fn categorical_color(key: i64) -> &'static str {
    CATEGORICAL[key.rem_euclid(CATEGORICAL_PERIOD) as usize]
}

/// Builds an `n`-shade monochrome ramp from lightest to darkest.
///
/// Callers size the ramp `|keys| + 2` and index it from 1 so position 0
/// (the lightest shade, invisible on a white background) stays unused.
pub fn grey_ramp(n: usize) -> Vec<String> {
    match n {
        0 => Vec::new(),
        1 => vec!["#ffffff".to_string()],
        _ => (0..n)
            .map(|i| {
                let v = 255 - (i * 255 + (n - 1) / 2) / (n - 1);
                format!("#{v:02x}{v:02x}{v:02x}")
            })
            .collect(),
    }
}

/// Fixed alphabet of fill textures, cycled modulo its length.
///
/// Cycling is intentional: pattern collisions are acceptable once the
/// key space exceeds the alphabet, because color remains the primary
/// discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HatchPattern {
    Blank,
    Dot,
    Ring,
    HorizontalDash,
    VerticalDash,
    Cross,
    HorizontalWave,
    VerticalWave,
    CrissCross,
    RightDiagonalLine,
    LeftDiagonalLine,
    DiagonalCross,
    RightDiagonalDash,
    LeftDiagonalDash,
    LeftDiagonalWave,
    RightDiagonalWave,
    Spiral,
}

impl HatchPattern {
    /// Alphabet in assignment order.
    pub const ALL: [HatchPattern; 17] = [
        HatchPattern::Blank,
        HatchPattern::Dot,
        HatchPattern::Ring,
        HatchPattern::HorizontalDash,
        HatchPattern::VerticalDash,
        HatchPattern::Cross,
        HatchPattern::HorizontalWave,
        HatchPattern::VerticalWave,
        HatchPattern::CrissCross,
        HatchPattern::RightDiagonalLine,
        HatchPattern::LeftDiagonalLine,
        HatchPattern::DiagonalCross,
        HatchPattern::RightDiagonalDash,
        HatchPattern::LeftDiagonalDash,
        HatchPattern::LeftDiagonalWave,
        HatchPattern::RightDiagonalWave,
        HatchPattern::Spiral,
    ];

    /// Pattern assigned to a secondary-axis key (period-17 cycle).
    #[inline]
    pub fn for_key(key: i64) -> HatchPattern {
        Self::ALL[key.rem_euclid(Self::ALL.len() as i64) as usize]
    }

    /// One-character token understood by hatch-capable backends.
    pub fn token(self) -> &'static str {
        match self {
            HatchPattern::Blank => " ",
            HatchPattern::Dot => ".",
            HatchPattern::Ring => "o",
            HatchPattern::HorizontalDash => "-",
            HatchPattern::VerticalDash => "|",
            HatchPattern::Cross => "+",
            HatchPattern::HorizontalWave => "\"",
            HatchPattern::VerticalWave => ":",
            HatchPattern::CrissCross => "@",
            HatchPattern::RightDiagonalLine => "/",
            HatchPattern::LeftDiagonalLine => "\\",
            HatchPattern::DiagonalCross => "x",
            HatchPattern::RightDiagonalDash => ",",
            HatchPattern::LeftDiagonalDash => "`",
            HatchPattern::LeftDiagonalWave => "v",
            HatchPattern::RightDiagonalWave => ">",
            HatchPattern::Spiral => "*",
        }
    }
}

impl Serialize for HatchPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_categorical_cycle_skips_last_entry() {
        // Period-19 cycle: key and key+19 share a color, entry 19 unused.
        for key in 0..40 {
            assert_eq!(categorical_color(key), categorical_color(key + 19));
        }
        let used: HashSet<&str> = (0..100).map(categorical_color).collect();
        assert_eq!(used.len(), 19);
        assert!(!used.contains(CATEGORICAL[19]));
    }

    #[test]
    fn test_pattern_cycle_period_17() {
        for key in 0..40 {
            assert_eq!(HatchPattern::for_key(key), HatchPattern::for_key(key + 17));
        }
        let used: HashSet<HatchPattern> = (0..17).map(HatchPattern::for_key).collect();
        assert_eq!(used.len(), 17);
    }

    #[test]
    fn test_pattern_tokens_distinct() {
        let tokens: HashSet<&str> = HatchPattern::ALL.iter().map(|p| p.token()).collect();
        assert_eq!(tokens.len(), 17);
    }

    #[test]
    fn test_grey_ramp_light_to_dark() {
        let ramp = grey_ramp(5);
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp[0], "#ffffff");
        assert_eq!(ramp[4], "#000000");
        // Strictly darkening.
        for w in ramp.windows(2) {
            assert!(w[0] > w[1]);
        }
        assert!(!ramp.contains(&ALARM_COLOR.to_string()));
    }

    #[test]
    fn test_grey_ramp_degenerate_sizes() {
        assert!(grey_ramp(0).is_empty());
        assert_eq!(grey_ramp(1), vec!["#ffffff"]);
    }
}
