use crate::errors::DomainError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A validated `(page, page_size)` pair. Both are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Result<Self, DomainError> {
        if page < 1 {
            return Err(DomainError::InvalidPagination(
                "page must be greater than or equal to 1".to_string(),
            ));
        }
        if page_size < 1 {
            return Err(DomainError::InvalidPagination(
                "page_size must be greater than or equal to 1".to_string(),
            ));
        }
        Ok(Self { page, page_size })
    }

    /// Parses raw query values. Missing or empty values fall back to the defaults.
    pub fn parse(
        page: Option<&str>,
        page_size: Option<&str>,
        default_page_size: u32,
    ) -> Result<Self, DomainError> {
        let page = parse_param("page", page, DEFAULT_PAGE)?;
        let page_size = parse_param("page_size", page_size, default_page_size)?;
        Self::new(page, page_size)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// `ceil(count / page_size)`, which is 0 for an empty collection.
    pub fn total_pages(&self, count: u64) -> u64 {
        count.div_ceil(u64::from(self.page_size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: u32) -> Result<u32, DomainError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(value) => value,
    };

    let value: i64 = raw.parse().map_err(|_| {
        DomainError::InvalidPagination(format!("{name} must be an integer, got '{raw}'"))
    })?;

    if value < 1 {
        return Err(DomainError::InvalidPagination(format!(
            "{name} must be greater than or equal to 1"
        )));
    }

    u32::try_from(value)
        .map_err(|_| DomainError::InvalidPagination(format!("{name} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let req = PageRequest::parse(None, None, DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(req, PageRequest::default());
        assert_eq!(req.skip(), 0);
        assert_eq!(req.limit(), 10);

        let req = PageRequest::parse(Some(""), Some(""), 25).unwrap();
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), 25);
    }

    #[test]
    fn test_skip_and_limit() {
        let req = PageRequest::parse(Some("3"), Some("10"), DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(req.skip(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let req = PageRequest::new(1, 10).unwrap();
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(10), 1);
        assert_eq!(req.total_pages(11), 2);
        assert_eq!(req.total_pages(25), 3);
    }

    #[test]
    fn test_rejects_malformed_values() {
        for (page, size) in [
            (Some("abc"), None),
            (None, Some("1.5")),
            (Some("0"), None),
            (None, Some("-4")),
            (Some("99999999999"), None),
        ] {
            let err = PageRequest::parse(page, size, DEFAULT_PAGE_SIZE).unwrap_err();
            assert!(matches!(err, DomainError::InvalidPagination(_)));
        }
    }
}
