use serde_json::Value;

/// One typed predicate: column, operator, value.
///
/// Column names are `&'static str` chosen by collection code, never derived
/// from request input; user input only ever travels through bind values.
/// That keeps injection safety mechanical rather than manual.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Case-insensitive equality: `LOWER(column) = LOWER(?)`
    EqFold { column: &'static str, value: String },
    /// Exact equality against a bound value
    Eq { column: &'static str, value: Value },
    /// Case-insensitive substring: `column LIKE %value%`
    Contains { column: &'static str, value: String },
    /// Substring fan-out across several columns, ORed together, then ANDed
    /// with every other predicate
    ContainsAny {
        columns: &'static [&'static str],
        value: String,
    },
    /// `column >= ?`
    Gte { column: &'static str, value: Value },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: SortDirection,
}

/// A rendered query: one parameterized SQL string plus its bind values.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<Value>,
}
