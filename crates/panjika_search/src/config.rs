//! Engine configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Call [`PanchangConfig::validate`] after deserializing.

use panjika_ephem::{RiseSetConfig, SiderealMode};
use serde::{Deserialize, Serialize};

/// Anchor hours and retry offsets for the local solar day resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Local wall-clock hour the sunrise search is anchored at.
    pub sunrise_anchor_hour: u32,
    /// Local hour for the sunset search.
    pub sunset_anchor_hour: u32,
    /// Local hour for moonrise/moonset; noon makes the ±12 h search window
    /// coincide with the civil day.
    pub moon_anchor_hour: u32,
    /// Offsets (hours) tried in order around each anchor.
    pub retry_offsets_hours: Vec<i32>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            sunrise_anchor_hour: 5,
            sunset_anchor_hour: 12,
            moon_anchor_hour: 12,
            retry_offsets_hours: vec![0, 1, -1],
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        for hour in [
            self.sunrise_anchor_hour,
            self.sunset_anchor_hour,
            self.moon_anchor_hour,
        ] {
            if hour > 23 {
                return Err("anchor hours must be within 0..=23");
            }
        }
        if self.retry_offsets_hours.is_empty() {
            return Err("retry_offsets_hours must not be empty");
        }
        if self.retry_offsets_hours.iter().any(|h| h.abs() > 12) {
            return Err("retry offsets must be within ±12 hours");
        }
        Ok(())
    }
}

/// Forward-scan and bisection parameters for the crossing solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossingConfig {
    /// Scan step in days.
    pub step_days: f64,
    /// How far past the start to scan before giving up, days.
    pub horizon_days: f64,
    /// Bisection halvings per bracket.
    pub max_iterations: u32,
    /// `g = (f - target) mod 360` above this counts as "before the target".
    pub upper_threshold_deg: f64,
    /// `g` below this counts as "just past the target".
    pub lower_threshold_deg: f64,
    /// Largest accepted angular residual at the returned instant.
    pub tolerance_deg: f64,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0 / 24.0,
            horizon_days: 2.0,
            max_iterations: 40,
            upper_threshold_deg: 300.0,
            lower_threshold_deg: 60.0,
            tolerance_deg: 1e-4,
        }
    }
}

impl CrossingConfig {
    /// Scan steps needed to cover the horizon.
    pub fn max_steps(&self) -> usize {
        (self.horizon_days / self.step_days).ceil() as usize
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if !self.horizon_days.is_finite() || self.horizon_days < self.step_days {
            return Err("horizon_days must be at least one step");
        }
        if self.horizon_days / self.step_days > 1.0e6 {
            return Err("horizon_days / step_days exceeds the scan cap");
        }
        if self.max_iterations == 0 || self.max_iterations > 200 {
            return Err("max_iterations must be within 1..=200");
        }
        if !(180.0 < self.upper_threshold_deg && self.upper_threshold_deg < 360.0) {
            return Err("upper_threshold_deg must be within (180, 360)");
        }
        if !(0.0 < self.lower_threshold_deg && self.lower_threshold_deg < 180.0) {
            return Err("lower_threshold_deg must be within (0, 180)");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        Ok(())
    }
}

/// How the purnimanta month name is derived from the amanta one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurnimantaRule {
    /// Always the month after the amanta month.
    #[default]
    NextMonth,
    /// The next month in Krishna paksha, the same month in Shukla paksha.
    FollowPaksha,
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangConfig {
    pub sidereal_mode: SiderealMode,
    pub resolver: ResolverConfig,
    pub crossing: CrossingConfig,
    /// Scan step for the new-moon search, days.
    pub new_moon_step_days: f64,
    /// Scan horizon for the new-moon search, days (longer than a lunation).
    pub new_moon_horizon_days: f64,
    pub include_moon_events: bool,
    pub include_dushta_muhurta: bool,
    pub purnimanta_rule: PurnimantaRule,
    pub riseset: RiseSetConfig,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            sidereal_mode: SiderealMode::Lahiri,
            resolver: ResolverConfig::default(),
            crossing: CrossingConfig::default(),
            new_moon_step_days: 0.25,
            new_moon_horizon_days: 32.0,
            include_moon_events: true,
            include_dushta_muhurta: true,
            purnimanta_rule: PurnimantaRule::NextMonth,
            riseset: RiseSetConfig::default(),
        }
    }
}

impl PanchangConfig {
    /// Crossing parameters for the new-moon search.
    pub fn new_moon_crossing(&self) -> CrossingConfig {
        CrossingConfig {
            step_days: self.new_moon_step_days,
            horizon_days: self.new_moon_horizon_days,
            ..self.crossing
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.resolver.validate()?;
        self.crossing.validate()?;
        self.new_moon_crossing().validate()?;
        if self.new_moon_horizon_days < 30.0 {
            return Err("new_moon_horizon_days must cover a full lunation (>= 30)");
        }
        self.riseset.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PanchangConfig::default().validate().is_ok());
    }

    #[test]
    fn default_scan_is_48_hourly_steps() {
        assert_eq!(CrossingConfig::default().max_steps(), 48);
        assert_eq!(PanchangConfig::default().new_moon_crossing().max_steps(), 128);
    }

    #[test]
    fn rejects_bad_crossing() {
        let bad = CrossingConfig {
            step_days: 0.0,
            ..CrossingConfig::default()
        };
        assert_eq!(bad.validate(), Err("step_days must be positive"));
        let bad = CrossingConfig {
            upper_threshold_deg: 90.0,
            ..CrossingConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn rejects_short_new_moon_horizon() {
        let cfg = PanchangConfig {
            new_moon_horizon_days: 10.0,
            ..PanchangConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_resolver() {
        let cfg = ResolverConfig {
            sunrise_anchor_hour: 24,
            ..ResolverConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = ResolverConfig {
            retry_offsets_hours: vec![],
            ..ResolverConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
