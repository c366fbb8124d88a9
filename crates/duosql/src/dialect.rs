//! SQL dialect strategies.
//!
//! Everything that differs between the two supported dialects lives behind
//! [`Dialect`]: identifier quoting, index-hint placement, pagination syntax,
//! and date/time literal formatting. Adding a dialect means adding one impl;
//! there are no dialect conditionals anywhere else in the crate.

/// Column names that collide with a reserved word and must be quoted.
///
/// Matching is exact and case-sensitive: `DATE` is quoted, `date` is not.
pub const RESERVED_KEYWORDS: &[&str] = &["DATE", "USER", "ORDER", "GROUP", "INDEX"];

/// A SQL syntax variant.
///
/// Implementations are zero-sized strategies; the builder is generic over
/// one of them, so the dialect is fixed at construction and every
/// dialect-sensitive rendering decision dispatches statically.
pub trait Dialect {
    /// Short dialect name, used in log fields.
    fn name(&self) -> &'static str;

    /// Wrap an identifier in the dialect's quoting characters.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quote `field` iff it is a reserved keyword, else pass it through.
    fn escape_field(&self, field: &str) -> String {
        if RESERVED_KEYWORDS.contains(&field) {
            self.quote_identifier(field)
        } else {
            field.to_string()
        }
    }

    /// Render a date/time string as a dialect literal.
    ///
    /// The input is not validated; the caller supplies a string already in
    /// `YYYY-MM-DD HH:MM:SS` form.
    fn datetime_literal(&self, value: &str) -> String;

    /// Write the index hint that belongs directly after `SELECT `, if the
    /// dialect has one.
    fn write_select_hint(&self, sql: &mut String, table: &str, index: &str);

    /// Write the index hint that belongs directly after the table name, if
    /// the dialect has one.
    fn write_table_hint(&self, sql: &mut String, index: &str);

    /// Write the pagination clause(s) for `limit`/`offset`.
    fn write_pagination(&self, sql: &mut String, limit: Option<u64>, offset: Option<u64>);
}

/// MySQL-family dialect: backtick quoting, `FORCE INDEX`, `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{ident}`")
    }

    fn datetime_literal(&self, value: &str) -> String {
        format!("'{value}'")
    }

    fn write_select_hint(&self, _sql: &mut String, _table: &str, _index: &str) {}

    fn write_table_hint(&self, sql: &mut String, index: &str) {
        sql.push_str(" FORCE INDEX(");
        sql.push_str(index);
        sql.push(')');
    }

    fn write_pagination(&self, sql: &mut String, limit: Option<u64>, offset: Option<u64>) {
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
            // OFFSET is only meaningful alongside LIMIT, and 0 is the default.
            if let Some(offset) = offset {
                if offset > 0 {
                    sql.push_str(&format!(" OFFSET {offset}"));
                }
            }
        }
    }
}

/// Oracle-family dialect: double-quote quoting, optimizer hint comments,
/// `FETCH FIRST n ROWS ONLY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Oracle;

impl Dialect for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("\"{ident}\"")
    }

    fn datetime_literal(&self, value: &str) -> String {
        format!("TO_TIMESTAMP('{value}', 'YYYY-MM-DD HH24:MI:SS')")
    }

    fn write_select_hint(&self, sql: &mut String, table: &str, index: &str) {
        sql.push_str("/*+ INDEX(");
        sql.push_str(table);
        sql.push_str(", ");
        sql.push_str(index);
        sql.push_str(") */ ");
    }

    fn write_table_hint(&self, _sql: &mut String, _index: &str) {}

    fn write_pagination(&self, sql: &mut String, limit: Option<u64>, _offset: Option<u64>) {
        // OFFSET has no rendering in this dialect; only the row cap is emitted.
        if let Some(limit) = limit {
            sql.push_str(&format!(" FETCH FIRST {limit} ROWS ONLY"));
        }
    }
}
