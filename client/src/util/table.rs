//! Client-side search and pagination for list screens.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Case-insensitive substring match of `query` against any field.
///
/// A blank query matches everything; absent fields never match.
pub fn matches_query<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// One page of a client-side paginated list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page actually shown (clamped into range).
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Window for `page` (1-based) over `len` items. An empty list has one
    /// empty page.
    pub fn new(len: usize, page: usize, page_size: usize) -> Self {
        let size = page_size.max(1);
        let total_pages = len.div_ceil(size).max(1);
        let page = page.clamp(1, total_pages);
        let start = ((page - 1) * size).min(len);
        let end = (start + size).min(len);
        Self { page, total_pages, start, end }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Items on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.start..self.end).unwrap_or(&[])
    }

    /// `Showing 11 to 20 of 42 results`.
    pub fn summary(&self, len: usize) -> String {
        if len == 0 {
            return "No results".to_owned();
        }
        format!("Showing {} to {} of {len} results", self.start + 1, self.end)
    }
}
