//! Page windowing for the account listing endpoint.

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 50;

/// 1-based page window taken from the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// Build from optional query parameters, falling back to the defaults.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// 0-based page index and capped page size, the shape SeaORM's
    /// paginator expects.
    pub fn window(self) -> (u64, u64) {
        let page = self.page.max(1);
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        (u64::from(page - 1), u64::from(per_page))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: DEFAULT_PER_PAGE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_query_falls_back_to_defaults() {
        assert_eq!(Pagination::from_query(None, None), Pagination::default());
        assert_eq!(
            Pagination::from_query(Some(3), Some(5)),
            Pagination { page: 3, per_page: 5 }
        );
    }

    #[test]
    fn window_is_zero_indexed() {
        let (idx, per) = Pagination { page: 4, per_page: 10 }.window();
        assert_eq!(idx, 3);
        assert_eq!(per, 10);
    }

    #[test]
    fn window_clamps_degenerate_input() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.window();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn window_caps_page_size() {
        let (_, per) = Pagination { page: 1, per_page: 1000 }.window();
        assert_eq!(per, u64::from(MAX_PER_PAGE));
    }
}
