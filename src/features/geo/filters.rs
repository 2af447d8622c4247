use sqlx::{Postgres, QueryBuilder};

/// Column every resource is searched on
pub const SEARCH_COLUMN: &str = "name_ascii";

/// Columns that list endpoints may filter on exactly
pub const COUNTRY_ID: &str = "country_id";
pub const REGION_ID: &str = "region_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactFilter {
    pub column: &'static str,
    pub value: i32,
}

/// Filter shared by all list endpoints: an optional case-insensitive search
/// on [`SEARCH_COLUMN`] AND-ed with any number of exact column matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: Option<String>,
    pub exact: Vec<ExactFilter>,
}

impl ListFilter {
    /// Start a filter from the raw `q` parameter. The term is matched as
    /// given; an empty term means no search.
    pub fn search(term: Option<&str>) -> Self {
        Self {
            search: term.filter(|t| !t.is_empty()).map(str::to_string),
            exact: Vec::new(),
        }
    }

    /// Add `column = value` when the parameter was given
    pub fn exact(mut self, column: &'static str, value: Option<i32>) -> Self {
        if let Some(value) = value {
            self.exact.push(ExactFilter { column, value });
        }
        self
    }

    /// Append the WHERE clause (if any) to a query
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        let mut separator = " WHERE ";

        if let Some(term) = &self.search {
            builder
                .push(separator)
                .push(SEARCH_COLUMN)
                .push(" ILIKE ")
                .push_bind(like_pattern(term))
                .push(" ESCAPE '\\'");
            separator = " AND ";
        }

        for filter in &self.exact {
            builder
                .push(separator)
                .push(filter.column)
                .push(" = ")
                .push_bind(filter.value);
            separator = " AND ";
        }
    }
}

/// `%term%` with LIKE metacharacters escaped so they match literally
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
