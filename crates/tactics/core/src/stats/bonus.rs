//! Stacking of stat bonuses.
//!
//! Bonuses always resolve in the order Flat, Increased, More, then Clamp,
//! regardless of the order they were pushed. A formation percentage and a
//! battle multiplier therefore combine identically for every base stat.

/// A single bonus on one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bonus {
    /// Added to the base before any percentage (potential, weapon, battle additions).
    Flat(i32),

    /// Summed with other increases and applied once; 20 = +20%.
    Increased(i32),

    /// Compounding multiplier; 50 = ×1.5, -20 = ×0.8.
    More(i32),
}

/// Bonuses for one stat.
///
/// ```
/// # use tactics_core::stats::{BonusStack, StatBounds};
/// let value = BonusStack::new()
///     .flat(5)
///     .increased(20)
///     .increased(15)
///     .more(50)
///     .apply(10, StatBounds { min: 5, max: 100 });
/// // (10 + 5) × 1.35 = 20, then × 1.5 = 30
/// assert_eq!(value, 30);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusStack {
    bonuses: Vec<Bonus>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bonus: Bonus) {
        self.bonuses.push(bonus);
    }

    pub fn extend(&mut self, bonuses: impl IntoIterator<Item = Bonus>) {
        self.bonuses.extend(bonuses);
    }

    pub fn flat(mut self, value: i32) -> Self {
        self.add(Bonus::Flat(value));
        self
    }

    pub fn increased(mut self, percent: i32) -> Self {
        self.add(Bonus::Increased(percent));
        self
    }

    pub fn more(mut self, percent: i32) -> Self {
        self.add(Bonus::More(percent));
        self
    }

    /// `clamp((base + Σflat) × (1 + Σinc/100) × Π(1 + more/100), bounds)`.
    ///
    /// Each step truncates toward zero. Math runs in saturating `i64`, so any
    /// combination of `i32` inputs ends up at one of the bounds rather than
    /// overflowing.
    pub fn apply(&self, base: i32, bounds: StatBounds) -> i32 {
        let (flat, increased) =
            self.bonuses
                .iter()
                .fold((0_i64, 0_i64), |(flat, increased), bonus| match *bonus {
                    Bonus::Flat(value) => (flat.saturating_add(i64::from(value)), increased),
                    Bonus::Increased(percent) => {
                        (flat, increased.saturating_add(i64::from(percent)))
                    }
                    Bonus::More(_) => (flat, increased),
                });

        let summed = scale(i64::from(base).saturating_add(flat), increased);
        let value = self.bonuses.iter().fold(summed, |value, bonus| match *bonus {
            Bonus::More(percent) => scale(value, i64::from(percent)),
            Bonus::Flat(_) | Bonus::Increased(_) => value,
        });

        let clamped = value.clamp(i64::from(bounds.min), i64::from(bounds.max));
        i32::try_from(clamped).unwrap_or(bounds.max)
    }
}

/// `value × (1 + percent/100)`, saturating.
fn scale(value: i64, percent: i64) -> i64 {
    value.saturating_mul(percent.saturating_add(100)) / 100
}

/// Clamp bounds for a stat calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBounds {
    pub min: i32,
    pub max: i32,
}

impl StatBounds {
    pub const UNBOUNDED: Self = Self {
        min: i32::MIN,
        max: i32::MAX,
    };

    /// Deployment cost.
    pub const COST: Self = Self { min: 0, max: 99 };

    /// HP never drops below 1 so a deployed unit always exists.
    pub const fn hp(cap: i32) -> Self {
        Self { min: 1, max: cap }
    }

    /// Attack, defense and resist.
    pub const fn base(cap: i32) -> Self {
        Self { min: 0, max: cap }
    }
}

/// Derivation of final values from a base layer plus collected bonuses.
///
/// ```text
/// UnitBaseStats + UnitBonuses (from Setting) -> UnitStats
/// ```
pub trait StatLayer {
    type Base;
    type Bonuses;
    type Final;

    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final;

    fn empty_bonuses() -> Self::Bonuses;

    /// Compute with no bonuses.
    fn from_base(base: &Self::Base) -> Self::Final {
        Self::compute(base, &Self::empty_bonuses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_then_increased_then_more() {
        // (100 + 20) × 1.10 = 132, then × 1.20 = 158
        let stack = BonusStack::new().more(20).increased(10).flat(20);
        assert_eq!(stack.apply(100, StatBounds::UNBOUNDED), 158);
    }

    #[test]
    fn multipliers_compound() {
        let stack = BonusStack::new().more(100).more(-50);
        assert_eq!(stack.apply(300, StatBounds::UNBOUNDED), 300);

        let stack = BonusStack::new().more(-20);
        assert_eq!(stack.apply(500, StatBounds::UNBOUNDED), 400);
    }

    #[test]
    fn clamps_to_bounds() {
        let bounds = StatBounds::hp(1000);
        assert_eq!(BonusStack::new().more(-100).apply(500, bounds), 1);
        assert_eq!(BonusStack::new().more(900).apply(500, bounds), 1000);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let stack = BonusStack::new().increased(500).more(400);
        assert_eq!(stack.apply(i32::MAX / 2, StatBounds::base(i32::MAX)), i32::MAX);
    }

    #[test]
    fn extreme_percentages_saturate_to_bounds() {
        let bounds = StatBounds::base(999_999);
        let huge = BonusStack::new().increased(i32::MAX).more(i32::MAX).flat(i32::MAX);
        assert_eq!(huge.apply(i32::MAX, bounds), 999_999);

        let stacked = BonusStack::new().more(i32::MAX).more(i32::MAX).more(i32::MAX);
        assert_eq!(stacked.apply(500, StatBounds::UNBOUNDED), i32::MAX);

        let negative = BonusStack::new().increased(i32::MIN).more(i32::MAX);
        assert_eq!(negative.apply(500, bounds), 0);
    }

    #[test]
    fn empty_stack_is_identity() {
        assert_eq!(BonusStack::new().apply(42, StatBounds::UNBOUNDED), 42);
    }
}
