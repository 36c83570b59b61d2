use std::{collections::BTreeMap, fmt, str::FromStr};

use itertools::Itertools;
use serde::Serialize;

use crate::Status;

/// Largest page size the service accepts.
pub const MAX_LIMIT: i64 = 50;

/// A single optional query parameter.
///
/// Options are plain values. They are interpreted by `QueryConfig::apply` in
/// the order given and never fail on construction; range checks happen when
/// the request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QueryOption {
    Fields(Vec<String>),
    Filter {
        field: String,
        op: Operator,
        value: String,
    },
    Limit(i64),
    Offset(i64),
    Order {
        field: String,
        direction: Direction,
    },
    /// Set only by `RequestMode::Search`; `build_url` rejects it in caller
    /// options.
    Search(String),
}

impl QueryOption {
    /// Selects the fields to return. `"*"` selects all of them.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryOption::Fields(names.into_iter().map(Into::into).collect())
    }

    pub fn filter(field: impl Into<String>, op: Operator, value: impl Into<String>) -> Self {
        QueryOption::Filter {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn limit(n: i64) -> Self {
        QueryOption::Limit(n)
    }

    pub fn offset(n: i64) -> Self {
        QueryOption::Offset(n)
    }

    pub fn order(field: impl Into<String>, direction: Direction) -> Self {
        QueryOption::Order {
            field: field.into(),
            direction,
        }
    }

    pub(crate) fn search(text: impl Into<String>) -> Self {
        QueryOption::Search(text.into())
    }
}

/// Filter comparison operators understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    /// Matches when the field contains at least one of the given values.
    Any,
    Prefix,
    In,
    NotIn,
    Exists,
    NotExists,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "eq",
            Operator::NotEquals => "not_eq",
            Operator::GreaterThan => "gt",
            Operator::GreaterOrEqual => "gte",
            Operator::LessThan => "lt",
            Operator::LessOrEqual => "lte",
            Operator::Any => "any",
            Operator::Prefix => "prefix",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::Exists => "exists",
            Operator::NotExists => "not_exists",
        }
    }
}

impl FromStr for Operator {
    type Err = Status;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Operator::Equals),
            "not_eq" => Ok(Operator::NotEquals),
            "gt" => Ok(Operator::GreaterThan),
            "gte" => Ok(Operator::GreaterOrEqual),
            "lt" => Ok(Operator::LessThan),
            "lte" => Ok(Operator::LessOrEqual),
            "any" => Ok(Operator::Any),
            "prefix" => Ok(Operator::Prefix),
            "in" => Ok(Operator::In),
            "not_in" => Ok(Operator::NotIn),
            "exists" => Ok(Operator::Exists),
            "not_exists" => Ok(Operator::NotExists),
            op => Err(Status::invalid_argument(format!(
                "'{op}' is not a supported filter operator"
            ))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// Accumulated query parameters of a single request.
///
/// Scalar parameters are last-write-wins. Filters are keyed by field and
/// operator, so filters on different keys compose while a repeated key
/// overwrites. Unset parameters are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pub search: Option<String>,
    pub fields: Option<Vec<String>>,
    pub filters: BTreeMap<(String, Operator), String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order: Option<(String, Direction)>,
}

impl QueryConfig {
    pub fn apply<'a>(opts: impl IntoIterator<Item = &'a QueryOption>) -> Self {
        let mut config = QueryConfig::default();
        for opt in opts {
            config.set(opt.clone());
        }
        config
    }

    fn set(&mut self, opt: QueryOption) {
        match opt {
            QueryOption::Fields(names) => self.fields = Some(names),
            QueryOption::Filter { field, op, value } => {
                self.filters.insert((field, op), value);
            }
            QueryOption::Limit(n) => self.limit = Some(n),
            QueryOption::Offset(n) => self.offset = Some(n),
            QueryOption::Order { field, direction } => self.order = Some((field, direction)),
            QueryOption::Search(text) => self.search = Some(text),
        }
    }

    /// Checks search text and pagination bounds.
    pub fn validate(&self) -> Result<(), Status> {
        if let Some(search) = &self.search {
            if search.trim().is_empty() {
                return Err(Status::invalid_argument("empty search text"));
            }
        }
        if let Some(limit) = self.limit {
            if limit <= 0 || limit > MAX_LIMIT {
                return Err(Status::out_of_range(format!(
                    "limit={limit} must be in range (0, {MAX_LIMIT}]"
                )));
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(Status::out_of_range(format!(
                    "offset={offset} must not be negative"
                )));
            }
        }
        Ok(())
    }

    /// Unencoded key/value pairs in their stable serialization order:
    /// search, fields, filters (sorted by field then operator), limit, offset,
    /// order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![];
        if let Some(search) = &self.search {
            pairs.push(("search".to_owned(), search.clone()));
        }
        if let Some(fields) = &self.fields {
            pairs.push(("fields".to_owned(), fields.iter().join(",")));
        }
        for ((field, op), value) in &self.filters {
            pairs.push((format!("filter[{field}][{op}]"), value.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_owned(), offset.to_string()));
        }
        if let Some((field, direction)) = &self.order {
            pairs.push(("order".to_owned(), format!("{field}:{}", direction.as_str())));
        }
        pairs
    }
}
