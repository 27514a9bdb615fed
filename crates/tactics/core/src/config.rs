/// Database configuration constants and tunable parameters.
///
/// Runtime-tunable values are captured by value into every derived column when
/// the catalog is built, so changing them requires rebuilding the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DatabaseConfig {
    /// Upper clamp applied to every derived base stat.
    pub stat_cap: i32,

    /// Animation frames per second, used to turn attack intervals into DPS.
    pub frames_per_second: i32,
}

impl DatabaseConfig {
    // ===== compile-time constants =====
    /// Maximum number of subskills a unit can equip at once.
    pub const MAX_SUBSKILLS: usize = 2;
    /// Maximum number of rows per catalog table (row ids are `u32`).
    pub const MAX_ROWS: usize = u32::MAX as usize;
    /// Neutral multiplier percentage.
    pub const NEUTRAL_MULTIPLIER: i32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAT_CAP: i32 = 999_999;
    pub const DEFAULT_FRAMES_PER_SECOND: i32 = 60;

    pub fn new() -> Self {
        Self {
            stat_cap: Self::DEFAULT_STAT_CAP,
            frames_per_second: Self::DEFAULT_FRAMES_PER_SECOND,
        }
    }

    pub fn with_stat_cap(mut self, stat_cap: i32) -> Self {
        self.stat_cap = stat_cap;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new()
    }
}
