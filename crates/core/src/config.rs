use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable layout parameters.
///
/// Fade lengths are in slice units: a week contributes
/// `slices_per_week` slices, so the default 16-slice ramps span four
/// weeks. Construction never fails; call [`LayoutConfig::validate`]
/// once at startup: a degenerate configuration is a fatal setup error,
/// not something the layout pass defends against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Subslices per calendar week. Higher values smooth the fades at
    /// the cost of more bars.
    pub slices_per_week: u32,
    /// Length of the fade-in ramp ending at a span's finish.
    pub fade_len_in: u32,
    /// Length of the fade-out ramp starting at a span's start.
    pub fade_len_out: u32,
    /// Opacity at the bright end of a ramp.
    pub max_opacity: f32,
    /// Opacity at the dim end of a ramp.
    pub min_opacity: f32,
    /// Number of horizontal lanes available to the allocator.
    pub max_slots: u32,
    /// Minimum free slices between two tenants of the same lane.
    pub vertical_spacing: u32,
    /// Seed for the allocator's lane tie-break.
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slices_per_week: 4,
            fade_len_in: 16,
            fade_len_out: 16,
            max_opacity: 0.9,
            min_opacity: 0.0,
            max_slots: 5,
            vertical_spacing: 1,
            seed: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("fade lengths must be positive (in={in_len}, out={out_len})")]
    FadeLength { in_len: u32, out_len: u32 },
    #[error("slices_per_week must be positive")]
    Granularity,
    #[error("opacity range is inverted (min={min}, max={max})")]
    OpacityRange { min: f32, max: f32 },
    #[error("at least one lane is required")]
    NoLanes,
}

impl LayoutConfig {
    /// Reject configurations that would produce degenerate ramps or an
    /// unusable lane set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_len_in == 0 || self.fade_len_out == 0 {
            return Err(ConfigError::FadeLength {
                in_len: self.fade_len_in,
                out_len: self.fade_len_out,
            });
        }
        if self.slices_per_week == 0 {
            return Err(ConfigError::Granularity);
        }
        if self.min_opacity > self.max_opacity {
            return Err(ConfigError::OpacityRange {
                min: self.min_opacity,
                max: self.max_opacity,
            });
        }
        if self.max_slots == 0 {
            return Err(ConfigError::NoLanes);
        }
        Ok(())
    }
}
