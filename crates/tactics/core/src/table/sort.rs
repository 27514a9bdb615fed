//! The one sort every table uses.

use std::cmp::Ordering;

use super::row::TableRow;
use crate::column::SortKey;
use crate::setting::Setting;

/// Orders two optional keys. Undefined keys trail in both directions.
pub fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(a),
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of `rows` by `column` under `setting`.
///
/// The effective direction is `reversed` XOR the column's own reversal. Rows
/// with equal keys keep their input order in both directions, so sorting an
/// already sorted list is a no-op.
pub fn sort_rows<'a, R: TableRow>(
    setting: &Setting,
    rows: Vec<&'a R>,
    column: R::Column,
    reversed: bool,
) -> Vec<&'a R> {
    let Some(first) = rows.first() else {
        return rows;
    };
    let descending = reversed != first.stat(column).is_reversed();

    let mut keyed: Vec<(Option<SortKey>, &'a R)> = rows
        .into_iter()
        .map(|row| (row.stat(column).sort_order(setting), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), descending));
    keyed.into_iter().map(|(_, row)| row).collect()
}
