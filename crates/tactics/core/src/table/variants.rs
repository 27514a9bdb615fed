//! Category views over the in-battle buff table.
//!
//! A category view shows a fixed prefix (unit identity and buff metadata),
//! the category's own columns, and the supplement. Rows for which none of the
//! category columns is defined under the current setting are left out.

use super::row::TableRow;
use super::source::TableSource;
use crate::entity::{InBattleBuff, InBattleBuffColumn};

/// Buff categories with a dedicated view.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BuffCategory {
    BaseStat,
    Damage,
    Defense,
    Speed,
    Movement,
    Redeploy,
    Field,
    StatusImmunity,
    Weather,
}

impl BuffCategory {
    /// Columns specific to this category.
    pub const fn keys(self) -> &'static [InBattleBuffColumn] {
        use InBattleBuffColumn as C;
        match self {
            Self::BaseStat => &[C::Hp, C::Attack, C::Defense, C::Resist],
            Self::Damage => &[
                C::DamageDealt,
                C::CriticalRate,
                C::CriticalDamage,
                C::Penetration,
            ],
            Self::Defense => &[C::DamageTaken, C::Evasion],
            Self::Speed => &[C::AttackSpeed, C::Delay],
            Self::Movement => &[C::MoveSpeed],
            Self::Redeploy => &[C::Cost, C::RedeployTime],
            Self::Field => &[C::Field],
            Self::StatusImmunity => &[C::StatusImmunity],
            Self::Weather => &[C::Weather],
        }
    }
}

/// Factory for in-battle buff views over one catalog slice.
#[derive(Clone, Copy)]
pub struct InBattleBuffVariants<'a> {
    rows: &'a [InBattleBuff],
}

impl<'a> InBattleBuffVariants<'a> {
    /// Columns leading every category view.
    pub const PREFIX: [InBattleBuffColumn; 7] = [
        InBattleBuffColumn::Unit,
        InBattleBuffColumn::Rarity,
        InBattleBuffColumn::Element,
        InBattleBuffColumn::SkillType,
        InBattleBuffColumn::Target,
        InBattleBuffColumn::Duration,
        InBattleBuffColumn::Requirement,
    ];

    /// Columns trailing every category view.
    pub const SUFFIX: [InBattleBuffColumn; 1] = [InBattleBuffColumn::Supplement];

    pub fn new(rows: &'a [InBattleBuff]) -> Self {
        Self { rows }
    }

    /// View with `keys` between the prefix and suffix. Rows where no key is
    /// defined are excluded; an empty key list excludes nothing.
    pub fn get_table_data(&self, keys: &[InBattleBuffColumn]) -> TableSource<'a, InBattleBuff> {
        let keys: Vec<InBattleBuffColumn> = keys
            .iter()
            .copied()
            .filter(|key| !Self::PREFIX.contains(key) && !Self::SUFFIX.contains(key))
            .collect();
        let columns = Self::PREFIX
            .into_iter()
            .chain(keys.iter().copied())
            .chain(Self::SUFFIX);
        let source = TableSource::new(self.rows, columns);
        if keys.is_empty() {
            return source;
        }
        source.with_predicate(move |row: &InBattleBuff, setting| {
            keys.iter().any(|&key| row.stat(key).is_defined(setting))
        })
    }

    pub fn category(&self, category: BuffCategory) -> TableSource<'a, InBattleBuff> {
        self.get_table_data(category.keys())
    }

    /// Every column, no existential filter.
    pub fn full(&self) -> TableSource<'a, InBattleBuff> {
        TableSource::with_all_columns(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn categories_partition_value_columns() {
        let mut seen: Vec<InBattleBuffColumn> =
            BuffCategory::iter().flat_map(|c| c.keys().iter().copied()).collect();
        let total = seen.len();
        seen.sort_by_key(|column| *column as usize);
        seen.dedup();
        assert_eq!(seen.len(), total, "a column belongs to two categories");

        let non_value = InBattleBuffVariants::PREFIX.len() + InBattleBuffVariants::SUFFIX.len();
        assert_eq!(total + non_value, InBattleBuffColumn::iter().count());
    }

    #[test]
    fn category_headers_are_prefix_keys_suffix() {
        let variants = InBattleBuffVariants::new(&[]);
        let source = variants.category(BuffCategory::Speed);
        let columns: Vec<_> = source.columns().collect();
        assert_eq!(columns.len(), 7 + 2 + 1);
        assert_eq!(columns[7], InBattleBuffColumn::AttackSpeed);
        assert_eq!(columns[8], InBattleBuffColumn::Delay);
        assert_eq!(columns[9], InBattleBuffColumn::Supplement);
        assert_eq!(source.headers()[0].name, "Name");
    }

    #[test]
    fn parses_category_names() {
        assert_eq!("base_stat".parse::<BuffCategory>(), Ok(BuffCategory::BaseStat));
        assert_eq!(BuffCategory::StatusImmunity.to_string(), "status_immunity");
    }
}
