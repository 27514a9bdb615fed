//! [`StatRoot`]: one derivable column value for one row.

use super::stat_type::StatType;
use super::value::{DisplayItem, SortKey, StatColor, StatValue};
use crate::setting::Setting;

type Calculate<T> = Box<dyn Fn(&Setting) -> Option<T> + Send + Sync>;
type Projection<T, U> = Box<dyn Fn(&Setting, &T) -> Option<U> + Send + Sync>;

/// A lazily computed column value.
///
/// The calculator runs on every read; nothing is cached. Projections receive
/// the computed value and are only called when it is defined, so an
/// undefined value is undefined in every projection.
pub struct StatRoot<T> {
    stat_type: StatType,
    calculate: Calculate<T>,
    item: Option<Projection<T, DisplayItem>>,
    text: Option<Projection<T, String>>,
    color: Option<Projection<T, StatColor>>,
    comparer: Option<Projection<T, f64>>,
    is_reversed: bool,
}

impl<T: StatValue> StatRoot<T> {
    pub fn new(
        stat_type: StatType,
        calculate: impl Fn(&Setting) -> Option<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            stat_type,
            calculate: Box::new(calculate),
            item: None,
            text: None,
            color: None,
            comparer: None,
            is_reversed: false,
        }
    }

    /// A value that does not depend on the setting.
    pub fn constant(stat_type: StatType, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(stat_type, move |_| Some(value.clone()))
    }

    pub fn with_item(
        mut self,
        item: impl Fn(&Setting, &T) -> Option<DisplayItem> + Send + Sync + 'static,
    ) -> Self {
        self.item = Some(Box::new(item));
        self
    }

    pub fn with_text(
        mut self,
        text: impl Fn(&Setting, &T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.text = Some(Box::new(text));
        self
    }

    pub fn with_color(
        mut self,
        color: impl Fn(&Setting, &T) -> Option<StatColor> + Send + Sync + 'static,
    ) -> Self {
        self.color = Some(Box::new(color));
        self
    }

    /// Replaces the natural sort key with a numeric one.
    pub fn with_comparer(
        mut self,
        comparer: impl Fn(&Setting, &T) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.comparer = Some(Box::new(comparer));
        self
    }

    /// Flips the default sort direction (lower is better).
    pub fn reversed(mut self) -> Self {
        self.is_reversed = true;
        self
    }

    pub fn get_value(&self, setting: &Setting) -> Option<T> {
        (self.calculate)(setting)
    }

    pub fn get_display_item(&self, setting: &Setting) -> Option<DisplayItem> {
        let value = self.get_value(setting)?;
        match &self.item {
            Some(item) => item(setting, &value),
            None => value.display_item(),
        }
    }

    /// Text projection, else the item projection rendered, else the value's
    /// default text.
    pub fn get_display_text(&self, setting: &Setting) -> Option<String> {
        let value = self.get_value(setting)?;
        match (&self.text, &self.item) {
            (Some(text), _) => text(setting, &value),
            (None, Some(item)) => item(setting, &value).map(|item| item.to_string()),
            (None, None) => value.display_text(),
        }
    }

    pub fn get_color(&self, setting: &Setting) -> Option<StatColor> {
        let value = self.get_value(setting)?;
        self.color.as_ref().and_then(|color| color(setting, &value))
    }

    pub fn get_sort_order(&self, setting: &Setting) -> Option<SortKey> {
        let value = self.get_value(setting)?;
        match &self.comparer {
            Some(comparer) => comparer(setting, &value).map(SortKey::Number),
            None => value.sort_key(),
        }
    }
}

/// Type-erased view of a [`StatRoot`], so rows can expose heterogeneous
/// columns uniformly.
pub trait Stat: Send + Sync {
    fn stat_type(&self) -> StatType;

    fn is_reversed(&self) -> bool;

    fn is_defined(&self, setting: &Setting) -> bool;

    fn display_item(&self, setting: &Setting) -> Option<DisplayItem>;

    fn display_text(&self, setting: &Setting) -> Option<String>;

    fn color(&self, setting: &Setting) -> Option<StatColor>;

    fn sort_order(&self, setting: &Setting) -> Option<SortKey>;
}

impl<T: StatValue> Stat for StatRoot<T> {
    fn stat_type(&self) -> StatType {
        self.stat_type
    }

    fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    fn is_defined(&self, setting: &Setting) -> bool {
        self.get_value(setting).is_some()
    }

    fn display_item(&self, setting: &Setting) -> Option<DisplayItem> {
        self.get_display_item(setting)
    }

    fn display_text(&self, setting: &Setting) -> Option<String> {
        self.get_display_text(setting)
    }

    fn color(&self, setting: &Setting) -> Option<StatColor> {
        self.get_color(setting)
    }

    fn sort_order(&self, setting: &Setting) -> Option<SortKey> {
        self.get_sort_order(setting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack() -> StatRoot<i32> {
        StatRoot::new(StatType::Attack, |setting: &Setting| {
            setting.potential.then_some(250)
        })
    }

    #[test]
    fn undefined_value_is_undefined_everywhere() {
        let root = attack().with_color(|_, _| Some(StatColor::Positive));
        let setting = Setting::default();
        assert_eq!(root.get_value(&setting), None);
        assert_eq!(root.get_display_item(&setting), None);
        assert_eq!(root.get_display_text(&setting), None);
        assert_eq!(root.get_color(&setting), None);
        assert_eq!(root.get_sort_order(&setting), None);
        assert!(!root.is_defined(&setting));
    }

    #[test]
    fn defaults_come_from_the_value() {
        let root = attack();
        let setting = Setting::maxed();
        assert_eq!(root.get_display_item(&setting), Some(DisplayItem::Number(250.0)));
        assert_eq!(root.get_display_text(&setting).as_deref(), Some("250"));
        assert_eq!(root.get_color(&setting), None);
        assert_eq!(root.get_sort_order(&setting), Some(SortKey::Number(250.0)));
    }

    #[test]
    fn projections_override_defaults() {
        let root = attack()
            .with_text(|_, v| Some(format!("{v} pts")))
            .with_comparer(|_, v| Some(-f64::from(*v)))
            .reversed();
        let setting = Setting::maxed();
        assert_eq!(root.get_display_text(&setting).as_deref(), Some("250 pts"));
        assert_eq!(root.get_sort_order(&setting), Some(SortKey::Number(-250.0)));
        assert!(Stat::is_reversed(&root));
        assert_eq!(Stat::stat_type(&root), StatType::Attack);
    }

    #[test]
    fn item_projection_drives_text() {
        let root = StatRoot::constant(StatType::Name, "Aria".to_string())
            .with_item(|_, v| Some(DisplayItem::List(vec![v.clone(), "x".into()])));
        assert_eq!(
            root.get_display_text(&Setting::default()).as_deref(),
            Some("Aria, x")
        );
    }
}
