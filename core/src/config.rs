use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Weights and curve shapes for the person-vs-requirement fit score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FitWeights {
    pub specialty_weight: f64,
    pub salary_weight: f64,
    pub experience_weight: f64,
    /// Specialty sub-score for a person exactly at the required minimum.
    pub at_minimum_score: f64,
    /// Each level above the minimum closes this fraction of the remaining
    /// gap to 1.0 (diminishing returns).
    pub above_minimum_gain: f64,
    /// Sub-score lost per level above the requirement's maximum.
    pub overqualified_penalty_per_level: f64,
    /// Floor for overqualified specialty sub-scores.
    pub overqualified_floor: f64,
    /// Age/experience sub-score lost per year outside the bounds.
    pub bound_falloff_per_year: f64,
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            specialty_weight: 0.60,
            salary_weight: 0.25,
            experience_weight: 0.15,
            at_minimum_score: 0.75,
            above_minimum_gain: 0.5,
            overqualified_penalty_per_level: 0.10,
            overqualified_floor: 0.60,
            bound_falloff_per_year: 0.10,
        }
    }
}

/// Caps and thresholds for the five team-quality terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Skill-sum term value for a full reference team; also its ceiling.
    pub skill_sum_cap: f64,
    /// Specialty level each member of the reference team holds.
    pub reference_level: u8,
    /// Head count of the reference team (one per core position).
    pub reference_team_size: u32,
    pub composition_bonus: f64,
    pub theme_bonus_max: f64,
    pub balance_bonus_max: f64,
    /// Balance bonus lost per unit of specialty-level standard deviation.
    pub balance_stddev_weight: f64,
    pub elite_bonus_max: f64,
    /// Specialty level at which a member counts as elite.
    pub elite_level: u8,
    /// Minimum elite proportion before any elite bonus is paid.
    pub elite_ratio_threshold: f64,
    pub max_total: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            skill_sum_cap: 4.5,
            reference_level: 5,
            reference_team_size: 4,
            composition_bonus: 1.2,
            theme_bonus_max: 1.0,
            balance_bonus_max: 0.5,
            balance_stddev_weight: 0.25,
            elite_bonus_max: 0.5,
            elite_level: 4,
            elite_ratio_threshold: 0.8,
            max_total: 10.0,
        }
    }
}

impl QualityConfig {
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("quality.skill_sum_cap", self.skill_sum_cap),
            ("quality.composition_bonus", self.composition_bonus),
            ("quality.theme_bonus_max", self.theme_bonus_max),
            ("quality.balance_bonus_max", self.balance_bonus_max),
            ("quality.balance_stddev_weight", self.balance_stddev_weight),
            ("quality.elite_bonus_max", self.elite_bonus_max),
            ("quality.max_total", self.max_total),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig {
                    reason: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.elite_ratio_threshold) {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "quality.elite_ratio_threshold must lie in [0, 1], got {}",
                    self.elite_ratio_threshold
                ),
            });
        }
        if self.reference_level == 0 || self.reference_team_size == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "quality reference team must be non-empty with level >= 1".into(),
            });
        }
        Ok(())
    }
}

/// Shape of the recruitment probability curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruitmentModel {
    /// Company reputation modifier; 1.0 is neutral.
    pub reputation_modifier: f64,
    /// probability = fit ^ exponent before modifiers. Must be > 0.
    pub fit_exponent: f64,
    /// Salary / ceiling ratio at which the competitiveness penalty starts.
    pub competitiveness_start: f64,
    /// Fraction of probability lost when the salary sits exactly at the ceiling.
    pub competitiveness_penalty: f64,
}

impl Default for RecruitmentModel {
    fn default() -> Self {
        Self {
            reputation_modifier: 1.0,
            fit_exponent: 1.5,
            competitiveness_start: 0.9,
            competitiveness_penalty: 0.3,
        }
    }
}

/// What happens to people picked for a project that still misses a quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialPolicy {
    /// Return them to the pool; the project appears only in `failed_projects`.
    #[default]
    ReleasePartial,
    /// Commit them; the project appears in `assignments` and `failed_projects`.
    KeepPartial,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    pub partial_policy: PartialPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fit: FitWeights,
    pub quality: QualityConfig,
    pub recruitment: RecruitmentModel,
    pub allocator: AllocatorConfig,
}

impl EngineConfig {
    /// Load from `{data_dir}/engine_config.json`.
    /// Fields missing from the file keep their defaults.
    /// In tests, use EngineConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        Self::load_file(&format!("{data_dir}/engine_config.json"))
    }

    /// Load from an explicit JSON file path.
    pub fn load_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config in {path}: {e}"))?;
        log::info!("config: loaded {path}");
        Ok(config)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        let fit = &self.fit;
        let r = &self.recruitment;

        let non_negative = [
            ("fit.specialty_weight", fit.specialty_weight),
            ("fit.salary_weight", fit.salary_weight),
            ("fit.experience_weight", fit.experience_weight),
            ("fit.overqualified_penalty_per_level", fit.overqualified_penalty_per_level),
            ("fit.bound_falloff_per_year", fit.bound_falloff_per_year),
            ("recruitment.reputation_modifier", r.reputation_modifier),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig {
                    reason: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }

        let unit_interval = [
            ("fit.at_minimum_score", fit.at_minimum_score),
            ("fit.above_minimum_gain", fit.above_minimum_gain),
            ("fit.overqualified_floor", fit.overqualified_floor),
            ("recruitment.competitiveness_start", r.competitiveness_start),
            ("recruitment.competitiveness_penalty", r.competitiveness_penalty),
        ];
        for (name, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidConfig {
                    reason: format!("{name} must lie in [0, 1], got {value}"),
                });
            }
        }

        if fit.specialty_weight + fit.salary_weight + fit.experience_weight <= 0.0 {
            return Err(EngineError::InvalidConfig {
                reason: "fit weights must not all be zero".into(),
            });
        }
        if !(r.fit_exponent.is_finite() && r.fit_exponent > 0.0) {
            return Err(EngineError::InvalidConfig {
                reason: format!("recruitment.fit_exponent must be > 0, got {}", r.fit_exponent),
            });
        }
        self.quality.validate()
    }
}
