//! Page information derived from either paging block a list endpoint returns.

use serde::Serialize;

use crate::action::PagingBlocks;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_number: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_elements: i64,
}

/// A page of items plus where it sits in the full result set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: PageInfo,
}

impl<T> Paged<T> {
    pub fn from_blocks(items: Vec<T>, blocks: &PagingBlocks) -> Self {
        let page = PageInfo::derive(items.len(), blocks);
        Self { items, page }
    }
}

impl PageInfo {
    /// Derives page info.
    ///
    /// The primary `pagination` block wins. Without it, the alternate
    /// `metadata` fields are used and `totalPages` is computed from
    /// `totalRecords / pageSize` when missing. With neither, the items are
    /// taken to be the only page.
    pub fn derive(item_count: usize, blocks: &PagingBlocks) -> Self {
        let count = item_count as i64;
        if let Some(p) = &blocks.pagination {
            let size = p.size.unwrap_or(count);
            let total = p.total_elements.unwrap_or(count);
            return Self {
                page_number: p.page.unwrap_or(0),
                page_size: size,
                total_pages: p.total_pages.unwrap_or_else(|| pages_for(total, size)),
                total_elements: total,
            };
        }
        if let Some(m) = &blocks.metadata {
            let size = m.page_size.unwrap_or(count);
            let total = m.total_records.unwrap_or(count);
            return Self {
                page_number: m.page_number.unwrap_or(0),
                page_size: size,
                total_pages: m.total_pages.unwrap_or_else(|| pages_for(total, size)),
                total_elements: total,
            };
        }
        Self {
            page_number: 0,
            page_size: count,
            total_pages: if count == 0 { 0 } else { 1 },
            total_elements: count,
        }
    }
}

fn pages_for(total: i64, size: i64) -> i64 {
    if size <= 0 {
        return if total > 0 { 1 } else { 0 };
    }
    (total + size - 1) / size
}

#[cfg(test)]
mod tests {
    use super::*;
    use comedica_api::types::{Metadata, Pagination};

    #[test]
    fn primary_block_wins() {
        let blocks = PagingBlocks {
            pagination: Some(Pagination {
                page: Some(2),
                size: Some(10),
                total_elements: Some(45),
                total_pages: Some(5),
            }),
            metadata: Some(Metadata {
                page_number: Some(9),
                ..Default::default()
            }),
        };
        let info = PageInfo::derive(10, &blocks);
        assert_eq!(info.page_number, 2);
        assert_eq!(info.total_pages, 5);
        assert_eq!(info.total_elements, 45);
    }

    #[test]
    fn metadata_computes_total_pages() {
        let blocks = PagingBlocks {
            pagination: None,
            metadata: Some(Metadata {
                page_number: Some(1),
                page_size: Some(10),
                total_pages: None,
                total_records: Some(35),
            }),
        };
        let info = PageInfo::derive(10, &blocks);
        assert_eq!(info.page_number, 1);
        assert_eq!(info.total_pages, 4);
        assert_eq!(info.total_elements, 35);
    }

    #[test]
    fn no_blocks_means_single_page() {
        let info = PageInfo::derive(3, &PagingBlocks::default());
        assert_eq!(
            info,
            PageInfo {
                page_number: 0,
                page_size: 3,
                total_pages: 1,
                total_elements: 3,
            }
        );
        assert_eq!(PageInfo::derive(0, &PagingBlocks::default()).total_pages, 0);
    }

    #[test]
    fn zero_page_size_does_not_divide() {
        assert_eq!(pages_for(5, 0), 1);
        assert_eq!(pages_for(0, 0), 0);
        assert_eq!(pages_for(20, 10), 2);
        assert_eq!(pages_for(21, 10), 3);
    }
}
