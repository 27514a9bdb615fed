//! Row identity and column addressing.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::column::{Stat, StatType};
use crate::setting::Setting;

/// Catalog-assigned row id, unique within one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed per-row column enumeration.
///
/// `index` is the variant's declaration position, used to address the row's
/// column storage.
pub trait Column:
    Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static + IntoEnumIterator
{
    fn stat_type(self) -> StatType;

    fn index(self) -> usize;
}

/// A row that can be filtered, sorted and rendered by a table source.
pub trait TableRow: Send + Sync {
    type Column: Column;

    fn id(&self) -> RowId;

    fn stat(&self, column: Self::Column) -> &dyn Stat;

    /// Entity filter predicate (search text and checkbox filters).
    fn matches(&self, setting: &Setting) -> bool;
}

impl<R: TableRow + ?Sized> TableRow for Arc<R> {
    type Column = R::Column;

    fn id(&self) -> RowId {
        (**self).id()
    }

    fn stat(&self, column: Self::Column) -> &dyn Stat {
        (**self).stat(column)
    }

    fn matches(&self, setting: &Setting) -> bool {
        (**self).matches(setting)
    }
}

/// Column storage for one row, one boxed stat per column variant.
pub struct StatColumns<C> {
    stats: Vec<Box<dyn Stat>>,
    _column: std::marker::PhantomData<fn() -> C>,
}

impl<C: Column> StatColumns<C> {
    /// Builds every column in declaration order.
    pub fn build(mut make: impl FnMut(C) -> Box<dyn Stat>) -> Self {
        let stats = C::iter()
            .map(|column| {
                let stat = make(column);
                debug_assert_eq!(stat.stat_type(), column.stat_type(), "{column:?}");
                stat
            })
            .collect();
        Self {
            stats,
            _column: std::marker::PhantomData,
        }
    }

    pub fn get(&self, column: C) -> &dyn Stat {
        self.stats[column.index()].as_ref()
    }
}
