//! Filter Query Construction
//!
//! Turns a [`ParameterSet`] into a parameterized conjunctive predicate.
//! Parameter binding is positional: the parameter list order matches the
//! fixed field order (level, equipment, muscle) exactly.

use crate::core::extract::ParameterSet;

/// A parameterized query: SQL text plus its ordered bind values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub sql: String,
    pub params: Vec<String>,
}

/// Build the exercise filter query for one request.
///
/// Each set field contributes a case-insensitive contains condition and a
/// wildcard-wrapped bind value. With no fields set the predicate matches
/// all rows. Only configuration supplies the table name; user-derived
/// values are always bound, never interpolated.
pub fn build_filter_query(table: &str, params: &ParameterSet) -> FilterQuery {
    let fields = [
        ("level", &params.level),
        ("equipment", &params.equipment),
        ("primary_muscles", &params.muscle),
    ];

    let mut conditions = Vec::new();
    let mut bound: Vec<String> = Vec::new();

    for (column, value) in fields {
        if let Some(value) = value {
            conditions.push(format!("{} ILIKE ${}", column, bound.len() + 1));
            bound.push(format!("%{value}%"));
        }
    }

    let where_clause = if conditions.is_empty() {
        "1=1".to_string()
    } else {
        conditions.join(" AND ")
    };

    FilterQuery {
        sql: format!("SELECT * FROM {table} WHERE {where_clause}"),
        params: bound,
    }
}
