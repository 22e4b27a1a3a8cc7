//! PostgREST-style query construction.
//!
//! A [`Query`] collects the filter, ordering and limit parts of a table
//! request and renders them as URL query parameters, e.g.
//! `orphanage_id=eq.orph-1&order=created_at.desc&limit=1`.

use std::fmt::Display;

/// Sort direction for an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// One `order` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: SortDirection,
}

/// Filter/order/limit parameters for a table request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Vec<Order>,
    limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the returned columns (default `*`).
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "eq", value)
    }

    pub fn neq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "neq", value)
    }

    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "gte", value)
    }

    pub fn lte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "lte", value)
    }

    /// Case-insensitive pattern match; `*` is the wildcard.
    pub fn ilike(self, column: &str, pattern: impl Display) -> Self {
        self.filter(column, "ilike", pattern)
    }

    /// Membership test, rendered as `in.(a,b,c)`.
    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let rendered: Vec<String> = values.into_iter().map(|v| quote_list_value(&v.to_string())).collect();
        self.filters
            .push((column.to_string(), format!("in.({})", rendered.join(","))));
        self
    }

    pub fn is_null(mut self, column: &str) -> Self {
        self.filters.push((column.to_string(), "is.null".to_string()));
        self
    }

    /// Adds an `eq` filter only when a value is given.
    pub fn eq_opt(self, column: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.eq(column, v),
            None => self,
        }
    }

    /// Adds a `gte` filter only when a value is given.
    pub fn gte_opt(self, column: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.gte(column, v),
            None => self,
        }
    }

    /// Adds a `lte` filter only when a value is given.
    pub fn lte_opt(self, column: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.lte(column, v),
            None => self,
        }
    }

    pub fn order(mut self, column: &str, direction: SortDirection) -> Self {
        self.order.push(Order {
            column: column.to_string(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn orders(&self) -> &[Order] {
        &self.order
    }

    /// True when the query narrows rows by at least one filter.
    ///
    /// Update and delete refuse unfiltered queries so a missing id can never
    /// turn into a whole-table write.
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Parameters for a read request (`select`, filters, `order`, `limit`).
    pub fn to_read_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(
            "select".to_string(),
            self.select.clone().unwrap_or_else(|| "*".to_string()),
        )];
        params.extend(self.filters.iter().cloned());
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|o| format!("{}.{}", o.column, o.direction.as_str()))
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".to_string(), order));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }

    /// Parameters for a write request (filters only).
    pub fn to_write_params(&self) -> Vec<(String, String)> {
        self.filters.clone()
    }

    fn filter(mut self, column: &str, op: &str, value: impl Display) -> Self {
        self.filters
            .push((column.to_string(), format!("{}.{}", op, value)));
        self
    }
}

fn quote_list_value(value: &str) -> String {
    if value.contains([',', '(', ')', '"', ' ']) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
