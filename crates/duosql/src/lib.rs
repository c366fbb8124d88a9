//! # duosql
//!
//! A fluent SELECT builder for two SQL dialects.
//!
//! ## Features
//!
//! - **Two dialects, one API**: MySQL-family and Oracle-family rendering
//!   behind the same chained calls
//! - **Dialect strategies**: quoting, index hints, pagination, and date
//!   literals live in one [`Dialect`] impl per dialect, not in conditionals
//! - **Late rendering**: mutators never fail; [`SelectBuilder::build`]
//!   renders the accumulated state and may be called repeatedly
//! - **Identifier escaping only**: reserved column names are quoted; values
//!   are emitted verbatim, so the output is raw SQL text, not a prepared
//!   statement — sanitizing untrusted values is the caller's job
//!
//! ## Query Builder (qb)
//!
//! ```
//! use duosql::qb;
//!
//! let sql = qb::mysql()
//!     .select(&["id", "name", "DATE"])
//!     .distinct()
//!     .from("users")
//!     .index("idx_users_name")
//!     .where_placeholder(&[("join_date", "?joindate")])
//!     .set_value("?joindate", "SYSDATE")
//!     .inner_join("orders", "users.id = orders.user_id")
//!     .order_by_asc("name")
//!     .limit(10)
//!     .offset(5)
//!     .build()?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT DISTINCT id, name, `DATE` FROM users FORCE INDEX(idx_users_name) \
//!      INNER JOIN orders ON users.id = orders.user_id \
//!      WHERE join_date = SYSDATE ORDER BY name ASC LIMIT 10 OFFSET 5"
//! );
//! # Ok::<(), duosql::BuildError>(())
//! ```

pub mod dialect;
pub mod error;
pub mod qb;

pub use dialect::{Dialect, MySql, Oracle, RESERVED_KEYWORDS};
pub use error::{BuildError, BuildResult};

// Re-export qb module for easy access
pub use qb::{SelectBuilder, mysql, oracle};
