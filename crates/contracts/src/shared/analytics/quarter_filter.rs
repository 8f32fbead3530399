use std::borrow::Cow;

use crate::domain::a001_sales_dataset::SalesRecord;

/// Records closed in `quarter`, in their original order.
///
/// `None` or an empty label means "no quarter selected" and borrows the input
/// as is. A label that matches nothing yields an empty set.
pub fn filter_by_quarter<'a>(records: &'a [SalesRecord], quarter: Option<&str>) -> Cow<'a, [SalesRecord]> {
    match quarter.filter(|quarter| !quarter.is_empty()) {
        None => Cow::Borrowed(records),
        Some(quarter) => Cow::Owned(
            records
                .iter()
                .filter(|record| record.closed_fiscal_quarter == quarter)
                .cloned()
                .collect(),
        ),
    }
}
