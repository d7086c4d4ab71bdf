//! Collaborator response envelopes
//!
//! The persistence API wraps lists as `{ "data": [...], "total": n }` and
//! reports failures as `{ "msg": "..." }` or `{ "message": "..." }`.

use serde::{Deserialize, Serialize};

/// Default page size of paginated lists
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// List envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total row count, present on paginated endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Page count for `limit` rows per page
    pub fn page_count(&self, limit: u32) -> u32 {
        let total = self.total.unwrap_or(self.data.len() as u64);
        Pagination::new(1, limit, total).total_pages
    }
}

/// Page nested under `data` as `{ "records": [...], "total": n }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPage<T> {
    pub records: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Paged list body in either of the two shapes the API uses
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PagedBody<T> {
    Nested { data: RecordPage<T> },
    Flat(ListResponse<T>),
}

impl<T> From<PagedBody<T>> for ListResponse<T> {
    fn from(body: PagedBody<T>) -> Self {
        match body {
            PagedBody::Nested { data } => Self {
                data: data.records,
                total: data.total,
            },
            PagedBody::Flat(list) => list,
        }
    }
}

/// Single-record envelope (`GET /sales/{id}` and friends)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page as u64) as u32
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Body of a create / update / delete response
///
/// Fields are all optional since endpoints differ in what they echo back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl MutationResponse {
    /// Server message, whichever key it used
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().or(self.message.as_deref())
    }
}

/// Failure body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// First non-blank message among `msg`, `message`, `error`
    pub fn message(&self) -> Option<&str> {
        [&self.msg, &self.message, &self.error]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}
