use crate::query_descriptor::SortOrder;
use serde::Serialize;

/// Rows shown per table page.
pub const PER_PAGE: u32 = 50;

pub fn offset_for_page(page: u32, per_page: u32) -> u32 {
    per_page.saturating_mul(page.max(1) - 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationArgs {
    pub total_items: u64,
    pub per_page: u32,
    pub total_pages: u64,
    pub orderby: String,
    pub order: SortOrder,
}

impl PaginationArgs {
    pub fn new(total_items: u64, per_page: u32, orderby: impl Into<String>, order: SortOrder) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total_items.div_ceil(u64::from(per_page))
        };
        Self {
            total_items,
            per_page,
            total_pages,
            orderby: orderby.into(),
            order,
        }
    }
}
