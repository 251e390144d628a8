// src/common/pagination.rs
//! Page-number pagination: query parameters, the pagination envelope, and
//! in-memory plus SQL-backed paginators.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;
use tracing::debug;

use super::error::ApiError;

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Pagination query parameters with the conventional defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

impl PageQuery {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Page number at least 1, page size between 1 and 100.
    pub fn clamped(&self) -> (u32, u32) {
        (self.page_number.max(1), self.page_size.clamp(1, 100))
    }

    pub fn offset(&self) -> u64 {
        let (page, size) = self.clamped();
        u64::from(page - 1) * u64::from(size)
    }
}

/// Pagination metadata included alongside every page of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct PageInfo {
    pub count: u64,
    pub current_page: u32,
    pub has_more: bool,
}

/// One page of results: `{pagination: {...}, data: [...]}`.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub pagination: PageInfo,
    pub data: Vec<T>,
}

/// Pages through an in-memory collection.
pub fn paginate_slice<T: Clone>(items: &[T], query: &PageQuery) -> Paginated<T> {
    let (page, size) = query.clamped();
    let start = query.offset() as usize;
    let data: Vec<T> = items.iter().skip(start).take(size as usize).cloned().collect();

    Paginated {
        pagination: PageInfo {
            count: items.len() as u64,
            current_page: page,
            has_more: start + (size as usize) < items.len(),
        },
        data,
    }
}

/// Runs a COUNT query plus a page-sized select and wraps the rows in the
/// pagination envelope.
///
/// `select_sql` must end with `LIMIT ? OFFSET ?`; the two placeholders are
/// bound from the query parameters. `count_sql` must return a single
/// integer and share the select's WHERE clause.
pub async fn paginate_query<T>(
    pool: &SqlitePool,
    count_sql: &str,
    select_sql: &str,
    query: &PageQuery,
) -> Result<Paginated<T>, ApiError>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    let (page, size) = query.clamped();

    let count: i64 = sqlx::query_scalar::<_, i64>(count_sql).fetch_one(pool).await?;

    let data = sqlx::query_as::<_, T>(select_sql)
        .bind(i64::from(size))
        .bind(query.offset() as i64)
        .fetch_all(pool)
        .await?;

    debug!(
        count = count,
        page = page,
        page_size = size,
        rows = data.len(),
        "paginated query"
    );

    Ok(Paginated {
        pagination: PageInfo {
            count: count.max(0) as u64,
            current_page: page,
            has_more: u64::from(page) * u64::from(size) < count.max(0) as u64,
        },
        data,
    })
}
