//! Shared builders for percentage-valued columns.
//!
//! Two value conventions exist in buff data:
//!
//! - **multiplier**: percent of the original, `100` is neutral (`120` = ×1.2)
//! - **delta**: signed percentage points, `0` is neutral (`20` = +20%)
//!
//! Both render as a signed change from neutral. "Lower is better" columns
//! (damage taken, delay, redeploy time, cost) flip the color rule and the
//! default sort direction.

use super::root::StatRoot;
use super::stat_type::StatType;
use super::value::StatColor;
use crate::config::DatabaseConfig;
use crate::setting::Setting;

/// `100 -> "+0%"`, `120 -> "+20%"`, `80 -> "-20%"`.
pub fn format_multiplier(value: i32) -> String {
    format_delta(value.saturating_sub(DatabaseConfig::NEUTRAL_MULTIPLIER))
}

/// `20 -> "+20%"`, `-10 -> "-10%"`.
pub fn format_delta(value: i32) -> String {
    format!("{}%", format_signed(value))
}

/// `3 -> "+3"`, `-2 -> "-2"`, `0 -> "+0"`.
pub fn format_signed(value: i32) -> String {
    format!("{value:+}")
}

fn penalty_below(
    neutral: i32,
) -> impl Fn(&Setting, &i32) -> Option<StatColor> + Send + Sync + 'static {
    move |_, value| (*value < neutral).then_some(StatColor::Negative)
}

fn penalty_above(
    neutral: i32,
) -> impl Fn(&Setting, &i32) -> Option<StatColor> + Send + Sync + 'static {
    move |_, value| (*value > neutral).then_some(StatColor::Negative)
}

/// Higher-is-better multiplier column.
pub fn multiplier(
    stat_type: StatType,
    calculate: impl Fn(&Setting) -> Option<i32> + Send + Sync + 'static,
) -> StatRoot<i32> {
    StatRoot::new(stat_type, calculate)
        .with_text(|_, value| Some(format_multiplier(*value)))
        .with_color(penalty_below(DatabaseConfig::NEUTRAL_MULTIPLIER))
}

/// Lower-is-better multiplier column.
pub fn inverse_multiplier(
    stat_type: StatType,
    calculate: impl Fn(&Setting) -> Option<i32> + Send + Sync + 'static,
) -> StatRoot<i32> {
    StatRoot::new(stat_type, calculate)
        .with_text(|_, value| Some(format_multiplier(*value)))
        .with_color(penalty_above(DatabaseConfig::NEUTRAL_MULTIPLIER))
        .reversed()
}

/// Higher-is-better percentage-point column.
pub fn delta(
    stat_type: StatType,
    calculate: impl Fn(&Setting) -> Option<i32> + Send + Sync + 'static,
) -> StatRoot<i32> {
    StatRoot::new(stat_type, calculate)
        .with_text(|_, value| Some(format_delta(*value)))
        .with_color(penalty_below(0))
}

/// Deployment cost change. A reduction is good news and is tagged positive.
pub fn cost_delta(
    stat_type: StatType,
    calculate: impl Fn(&Setting) -> Option<i32> + Send + Sync + 'static,
) -> StatRoot<i32> {
    StatRoot::new(stat_type, calculate)
        .with_text(|_, value| Some(format_signed(*value)))
        .with_color(|_, value| match value.signum() {
            1 => Some(StatColor::Negative),
            -1 => Some(StatColor::Positive),
            _ => None,
        })
        .reversed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_text() {
        assert_eq!(format_multiplier(100), "+0%");
        assert_eq!(format_multiplier(120), "+20%");
        assert_eq!(format_multiplier(80), "-20%");
        assert_eq!(format_delta(20), "+20%");
        assert_eq!(format_delta(-10), "-10%");
        assert_eq!(format_multiplier(i32::MIN), format!("{}%", i32::MIN));
    }

    #[test]
    fn multiplier_column_colors_penalties() {
        let setting = Setting::default();
        let weak = multiplier(StatType::BuffAttack, |_| Some(80));
        assert_eq!(weak.get_display_text(&setting).as_deref(), Some("-20%"));
        assert_eq!(weak.get_color(&setting), Some(StatColor::Negative));

        let strong = multiplier(StatType::BuffAttack, |_| Some(130));
        assert_eq!(strong.get_color(&setting), None);

        let missing = multiplier(StatType::BuffAttack, |_| None);
        assert_eq!(missing.get_display_text(&setting), None);
    }

    #[test]
    fn inverse_columns_flip_color_and_direction() {
        use crate::column::Stat;

        let setting = Setting::default();
        let taken = inverse_multiplier(StatType::DamageTaken, |_| Some(120));
        assert_eq!(taken.get_color(&setting), Some(StatColor::Negative));
        assert!(taken.is_reversed());

        let reduced = inverse_multiplier(StatType::DamageTaken, |_| Some(70));
        assert_eq!(reduced.get_display_text(&setting).as_deref(), Some("-30%"));
        assert_eq!(reduced.get_color(&setting), None);
    }

    #[test]
    fn cost_reduction_is_positive() {
        let setting = Setting::default();
        let cheaper = cost_delta(StatType::BuffCost, |_| Some(-2));
        assert_eq!(cheaper.get_display_text(&setting).as_deref(), Some("-2"));
        assert_eq!(cheaper.get_color(&setting), Some(StatColor::Positive));
        let pricier = cost_delta(StatType::BuffCost, |_| Some(3));
        assert_eq!(pricier.get_color(&setting), Some(StatColor::Negative));
    }
}
