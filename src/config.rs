use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Scoring formula parameters.
///
/// A hit is worth `floor(base_points * multiplier)` where the
/// multiplier is `1 + combo / combo_per_multiplier`, computed from the
/// combo *before* the hit. With the defaults (100/100) the product is
/// `100 + combo` exactly, so the default path never actually rounds;
/// floor is the documented rule for other formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFormula {
    pub base_points: u32,
    pub combo_per_multiplier: u32,
}

impl ScoreFormula {
    pub fn multiplier(&self, combo: u32) -> f64 {
        1.0 + f64::from(combo) / f64::from(self.combo_per_multiplier)
    }

    pub fn points(&self, combo: u32) -> u64 {
        (f64::from(self.base_points) * self.multiplier(combo)).floor() as u64
    }
}

impl Default for ScoreFormula {
    fn default() -> Self {
        Self {
            base_points: 100,
            combo_per_multiplier: 100,
        }
    }
}

/// Engine parameters for one session.
///
/// Defaults: 4 lanes, a ±100ms hit window, a 50ms miss sweep, and a
/// 3 second resume countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub lane_count: usize,
    /// Half-width of the hit window around a note's start time.
    pub tolerance_ms: f64,
    /// When false, `end` values in the beatmap file are ignored at load
    /// and every note becomes a tap.
    pub hold_notes: bool,
    pub score: ScoreFormula,
    pub sweep_interval_ms: f64,
    pub resume_delay_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lane_count: 4,
            tolerance_ms: 100.0,
            hold_notes: true,
            score: ScoreFormula::default(),
            sweep_interval_ms: 50.0,
            resume_delay_ms: 3000.0,
        }
    }
}

impl EngineConfig {
    /// Check the config for values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.lane_count >= 1, "lane_count must be at least 1");
        ensure!(self.tolerance_ms > 0.0, "tolerance_ms must be positive");
        ensure!(
            self.score.combo_per_multiplier >= 1,
            "combo_per_multiplier must be at least 1"
        );
        ensure!(
            self.sweep_interval_ms > 0.0,
            "sweep_interval_ms must be positive"
        );
        ensure!(
            self.resume_delay_ms >= 0.0,
            "resume_delay_ms must not be negative"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formula_is_integer_exact() {
        let formula = ScoreFormula::default();
        assert_eq!(formula.points(0), 100);
        assert_eq!(formula.points(1), 101);
        assert_eq!(formula.points(50), 150);
        assert_eq!(formula.points(250), 350);
    }

    #[test]
    fn custom_formula_floors() {
        let formula = ScoreFormula {
            base_points: 10,
            combo_per_multiplier: 3,
        };
        // 10 * (1 + 1/3) = 13.33..
        assert_eq!(formula.points(1), 13);
    }

    #[test]
    fn default_config_is_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_lanes() {
        let config = EngineConfig {
            lane_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
