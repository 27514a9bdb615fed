//! [`TableSource`]: the headers + filter + sort bundle a table view consumes.

use strum::IntoEnumIterator;

use super::row::{Column, TableRow};
use super::sort::sort_rows;
use crate::column::StatType;
use crate::setting::Setting;

/// One column header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Header<C> {
    pub id: C,
    pub stat_type: StatType,
    pub name: &'static str,
}

impl<C: Column> Header<C> {
    pub fn new(id: C) -> Self {
        let stat_type = id.stat_type();
        Self {
            id,
            stat_type,
            name: stat_type.label(),
        }
    }
}

type RowPredicate<'a, R> = Box<dyn Fn(&R, &Setting) -> bool + Send + Sync + 'a>;

/// A filterable, sortable view over a borrowed catalog slice.
///
/// Holds no state beyond the slice, its headers and an optional extra row
/// predicate; every call recomputes from the setting it is given.
pub struct TableSource<'a, R: TableRow> {
    headers: Vec<Header<R::Column>>,
    rows: &'a [R],
    predicate: Option<RowPredicate<'a, R>>,
}

impl<'a, R: TableRow> TableSource<'a, R> {
    pub fn new(rows: &'a [R], columns: impl IntoIterator<Item = R::Column>) -> Self {
        Self {
            headers: columns.into_iter().map(Header::new).collect(),
            rows,
            predicate: None,
        }
    }

    /// Every column of the row type, in declaration order.
    pub fn with_all_columns(rows: &'a [R]) -> Self {
        Self::new(rows, R::Column::iter())
    }

    /// Adds a row predicate, ANDed with any existing one and with the entity
    /// filter.
    pub fn with_predicate(
        mut self,
        predicate: impl Fn(&R, &Setting) -> bool + Send + Sync + 'a,
    ) -> Self {
        let combined: RowPredicate<'a, R> = match self.predicate.take() {
            Some(existing) => Box::new(move |row: &R, setting: &Setting| {
                existing(row, setting) && predicate(row, setting)
            }),
            None => Box::new(predicate),
        };
        self.predicate = Some(combined);
        self
    }

    pub fn headers(&self) -> &[Header<R::Column>] {
        &self.headers
    }

    pub fn columns(&self) -> impl Iterator<Item = R::Column> + '_ {
        self.headers.iter().map(|header| header.id)
    }

    /// The header column showing `stat_type`, if any.
    pub fn column(&self, stat_type: StatType) -> Option<R::Column> {
        self.headers
            .iter()
            .find(|header| header.stat_type == stat_type)
            .map(|header| header.id)
    }

    /// Rows that pass the entity filter and the source's own predicate, in
    /// catalog order.
    pub fn filter(&self, setting: &Setting) -> Vec<&'a R> {
        self.rows
            .iter()
            .filter(|row| row.matches(setting))
            .filter(|row| self.predicate.as_ref().is_none_or(|p| p(row, setting)))
            .collect()
    }

    /// Sorts `rows` by `column`. A column styled as unsortable leaves the
    /// order unchanged.
    pub fn sort(
        &self,
        setting: &Setting,
        rows: Vec<&'a R>,
        column: R::Column,
        reversed: bool,
    ) -> Vec<&'a R> {
        if !column.stat_type().style().sortable {
            return rows;
        }
        sort_rows(setting, rows, column, reversed)
    }
}

impl<R: TableRow> std::fmt::Debug for TableSource<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableSource")
            .field("headers", &self.headers)
            .field("rows", &self.rows.len())
            .field("filtered", &self.predicate.is_some())
            .finish()
    }
}
