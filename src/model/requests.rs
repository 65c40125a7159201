/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{CREATED_AT_FIELD, DEFAULT_LIMIT};
use crate::error::AppError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of documents requested from the query endpoint
///
/// The leading integer of the flag value is used, including zero and negative
/// values: `12abc` and `3.5` give `12` and `3`. Text with no leading digit is
/// kept so it can be reported, and goes out as a JSON `null` limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    /// A parsed integer limit
    Count(i64),
    /// The raw text of a limit that is not an integer
    Unparsed(String),
}

impl Default for Limit {
    fn default() -> Self {
        Limit::Count(DEFAULT_LIMIT)
    }
}

impl Limit {
    /// Parses the value of `--limit`
    ///
    /// Leading whitespace and one optional sign are skipped, then digits are
    /// read up to the first non-digit. A value that overflows `i64` is
    /// `Unparsed`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.trim_start_matches(['+', '-']);
        let sign_len = trimmed.len() - unsigned.len();
        if sign_len > 1 {
            return Limit::Unparsed(raw.to_string());
        }

        let digits_len = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        if digits_len == 0 {
            return Limit::Unparsed(raw.to_string());
        }

        match trimmed[..sign_len + digits_len].parse::<i64>() {
            Ok(n) => Limit::Count(n),
            Err(_) => Limit::Unparsed(raw.to_string()),
        }
    }

    /// Returns true when the limit is a positive integer
    #[must_use]
    pub fn is_positive(&self) -> bool {
        matches!(self, Limit::Count(n) if *n > 0)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{n}"),
            Limit::Unparsed(raw) => write!(f, "{raw:?}"),
        }
    }
}

impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Limit::Count(n) => serializer.serialize_i64(*n),
            Limit::Unparsed(_) => serializer.serialize_none(),
        }
    }
}

/// What to fetch: one collection, one page, optionally newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    collection: String,
    limit: Limit,
    recent: bool,
}

impl QueryRequest {
    /// Creates a query request
    ///
    /// # Errors
    /// `AppError::InvalidInput` when the collection name is empty
    pub fn new(collection: impl Into<String>, limit: Limit, recent: bool) -> Result<Self, AppError> {
        let collection = collection.into();
        if collection.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "collection name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            collection,
            limit,
            recent,
        })
    }

    /// Collection being queried
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Requested limit
    pub fn limit(&self) -> &Limit {
        &self.limit
    }

    /// Whether documents are ordered by creation time, newest first
    pub fn recent(&self) -> bool {
        self.recent
    }

    /// Builds the body sent to the `runQuery` endpoint
    pub fn to_body(&self) -> RunQueryBody<'_> {
        RunQueryBody {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: &self.collection,
                    all_descendants: false,
                }],
                limit: &self.limit,
                order_by: self.recent.then(|| {
                    vec![Order {
                        field: FieldReference {
                            field_path: CREATED_AT_FIELD,
                        },
                        direction: Direction::Descending,
                    }]
                }),
            },
        }
    }
}

/// Top-level `runQuery` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryBody<'a> {
    /// The query itself
    pub structured_query: StructuredQuery<'a>,
}

/// Declarative description of the documents to return
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery<'a> {
    /// Collections to read from
    pub from: Vec<CollectionSelector<'a>>,
    /// Maximum number of documents
    pub limit: &'a Limit,
    /// Ordering, omitted entirely when not requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Vec<Order<'a>>>,
}

/// Collection the query reads from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSelector<'a> {
    /// Collection identifier
    pub collection_id: &'a str,
    /// Also read nested collections with the same id
    pub all_descendants: bool,
}

/// One ordering clause
#[derive(Debug, Serialize)]
pub struct Order<'a> {
    /// Field to order by
    pub field: FieldReference<'a>,
    /// Sort direction
    pub direction: Direction,
}

/// Reference to a document field
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference<'a> {
    /// Dotted path of the field
    pub field_path: &'a str,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Largest first
    Descending,
}
