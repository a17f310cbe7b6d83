//! PostgREST Query Builder
//!
//! Renders the backend's read shape: column selection (with nested
//! relations and `(count)` aggregates), equality filters, ascending order.

/// A read against one backend table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<&'static str>,
    limit: Option<u32>,
}

impl TableQuery {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Column list, e.g. `id,name,topics(count)`
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.split_whitespace().collect();
        self
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Ascending order on `column`
    pub fn order_asc(mut self, column: &'static str) -> Self {
        self.order = Some(column);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Path below the backend base URL
    pub fn path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }

    /// Query-string pairs, unencoded
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.select.clone())];
        params.extend(self.filters.iter().cloned());
        if let Some(column) = self.order {
            params.push(("order".to_string(), format!("{}.asc", column)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}
