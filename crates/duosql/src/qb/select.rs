//! SELECT statement builder.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};

/// Fluent builder for one dialect-specific SELECT statement.
///
/// The builder accumulates clause fragments in call order and renders them
/// on [`build`](Self::build). Mutators consume and return `self` for
/// chaining; none of them validate. `build` borrows the builder, so a
/// finished chain can be rendered repeatedly and yields the same string for
/// unchanged state.
///
/// One builder describes one query for one logical caller. There is no
/// internal synchronization; build a fresh one per query instead of sharing.
#[derive(Clone, Debug)]
pub struct SelectBuilder<D: Dialect> {
    dialect: D,
    /// SELECT columns, post keyword-escaping; empty renders `*`
    select_cols: Vec<String>,
    /// FROM table, rendered verbatim; last write wins
    table: Option<String>,
    distinct: bool,
    /// Rendered `field = value` fragments, joined with AND
    where_conditions: Vec<String>,
    /// Rendered JOIN clauses, append-only
    join_clauses: Vec<String>,
    /// Single `field ASC|DESC` fragment; last call wins
    order_by: Option<String>,
    index_hint: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    /// Placeholder token -> literal substitution
    bindings: BTreeMap<String, String>,
}

impl<D: Dialect + Default> SelectBuilder<D> {
    /// Create an empty builder for the dialect `D`.
    pub fn new() -> Self {
        Self::with_dialect(D::default())
    }
}

impl<D: Dialect + Default> Default for SelectBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialect> SelectBuilder<D> {
    /// Create an empty builder around an explicit dialect value.
    pub fn with_dialect(dialect: D) -> Self {
        Self {
            dialect,
            select_cols: Vec::new(),
            table: None,
            distinct: false,
            where_conditions: Vec::new(),
            join_clauses: Vec::new(),
            order_by: None,
            index_hint: None,
            limit: None,
            offset: None,
            bindings: BTreeMap::new(),
        }
    }

    /// Append SELECT columns, quoting any reserved keywords.
    ///
    /// Insertion order across calls defines the output column order. An
    /// empty field list selects all columns (`*`).
    pub fn select(mut self, fields: &[&str]) -> Self {
        for field in fields {
            self.select_cols.push(self.dialect.escape_field(field));
        }
        self
    }

    /// Set the FROM table. Rendered verbatim; a later call overwrites.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Emit `DISTINCT` before the column list. Idempotent.
    ///
    /// Ignored when no columns were selected (`*` is never DISTINCT-ed).
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Append `field = value` conditions, AND-combined at render time.
    ///
    /// Field names are keyword-escaped; values are inserted verbatim, so the
    /// caller is responsible for quoting and injection safety.
    pub fn where_eq(mut self, conditions: &[(&str, &str)]) -> Self {
        for (field, value) in conditions {
            let field = self.dialect.escape_field(field);
            self.where_conditions.push(format!("{field} = {value}"));
        }
        self
    }

    /// Like [`where_eq`](Self::where_eq), but each value is wrapped as a
    /// dialect date/time literal. The value string itself is not validated.
    pub fn where_datetime(mut self, conditions: &[(&str, &str)]) -> Self {
        for (field, value) in conditions {
            let field = self.dialect.escape_field(field);
            let value = self.dialect.datetime_literal(value);
            self.where_conditions.push(format!("{field} = {value}"));
        }
        self
    }

    /// Append `field = token` conditions where `token` is a placeholder
    /// (e.g. `?joindate`) to be bound later via [`set_value`](Self::set_value).
    ///
    /// A token that never gets a binding is emitted as literal text.
    pub fn where_placeholder(mut self, conditions: &[(&str, &str)]) -> Self {
        for (field, token) in conditions {
            let field = self.dialect.escape_field(field);
            self.where_conditions.push(format!("{field} = {token}"));
        }
        self
    }

    /// Bind a placeholder token to a literal value.
    ///
    /// The value is stringified via `Display`. Rebinding the same token
    /// overwrites. At render time each binding replaces only the FIRST
    /// textual occurrence of its token in the WHERE clause; a repeated
    /// token, or one that is a prefix of another, is substituted once.
    pub fn set_value<T: Display>(mut self, placeholder: &str, value: T) -> Self {
        self.bindings.insert(placeholder.to_string(), value.to_string());
        self
    }

    /// Append `INNER JOIN <table> ON <on>`. Neither argument is escaped.
    pub fn inner_join(mut self, table: &str, on: &str) -> Self {
        self.join_clauses.push(format!("INNER JOIN {table} ON {on}"));
        self
    }

    /// Order by `field ASC`. Single-column; a later ordering call overwrites.
    pub fn order_by_asc(mut self, field: &str) -> Self {
        self.order_by = Some(format!("{} ASC", self.dialect.escape_field(field)));
        self
    }

    /// Order by `field DESC`. Single-column; a later ordering call overwrites.
    pub fn order_by_desc(mut self, field: &str) -> Self {
        self.order_by = Some(format!("{} DESC", self.dialect.escape_field(field)));
        self
    }

    /// Record an index hint, rendered where the dialect puts it:
    /// `FORCE INDEX(..)` after the table (MySQL) or a `/*+ INDEX(..) */`
    /// optimizer comment after SELECT (Oracle).
    pub fn index(mut self, index_name: &str) -> Self {
        self.index_hint = Some(index_name.to_string());
        self
    }

    /// Cap the row count. Renders as `LIMIT n` or `FETCH FIRST n ROWS ONLY`.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skip the first `n` rows. Only rendered under the MySQL dialect, and
    /// only when a limit is also set and `n > 0`; the Oracle path has no
    /// offset rendering.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Render the accumulated state to a SQL string.
    ///
    /// Fails only when no (non-empty) table was set. The output is raw SQL
    /// text, not a prepared-statement template.
    pub fn build(&self) -> BuildResult<String> {
        let table = match self.table.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => return Err(BuildError::MissingTable),
        };

        let mut sql = String::from("SELECT ");
        if let Some(index) = &self.index_hint {
            self.dialect.write_select_hint(&mut sql, table, index);
        }

        if self.select_cols.is_empty() {
            sql.push('*');
        } else {
            if self.distinct {
                sql.push_str("DISTINCT ");
            }
            sql.push_str(&self.select_cols.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(table);
        if let Some(index) = &self.index_hint {
            self.dialect.write_table_hint(&mut sql, index);
        }

        for join in &self.join_clauses {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.where_conditions.is_empty() {
            let mut clause = self.where_conditions.join(" AND ");
            for (token, value) in &self.bindings {
                // First occurrence only; tokens absent from the clause are a no-op.
                clause = clause.replacen(token.as_str(), value, 1);
            }
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }

        if let Some(order) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        self.dialect.write_pagination(&mut sql, self.limit, self.offset);

        tracing::debug!(dialect = self.dialect.name(), sql = %sql, "built SELECT statement");
        Ok(sql)
    }
}
