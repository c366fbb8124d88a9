//! Query builder (QB) entry points.
//!
//! One builder type, [`SelectBuilder`], generic over the target
//! [`Dialect`](crate::dialect::Dialect). The free functions here pick the
//! dialect; everything after that is the same chained API.
//!
//! # Usage
//!
//! ```
//! use duosql::qb;
//!
//! let sql = qb::mysql()
//!     .select(&["id", "name"])
//!     .from("users")
//!     .where_eq(&[("status", "'active'")])
//!     .order_by_asc("name")
//!     .limit(20)
//!     .build()?;
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE status = 'active' ORDER BY name ASC LIMIT 20"
//! );
//! # Ok::<(), duosql::BuildError>(())
//! ```

mod select;

pub use select::SelectBuilder;

use crate::dialect::{MySql, Oracle};

/// Create a SELECT builder targeting the MySQL-family dialect.
///
/// # Example
/// ```
/// let qb = duosql::qb::mysql().from("users").limit(10);
/// assert_eq!(qb.build().unwrap(), "SELECT * FROM users LIMIT 10");
/// ```
pub fn mysql() -> SelectBuilder<MySql> {
    SelectBuilder::new()
}

/// Create a SELECT builder targeting the Oracle-family dialect.
///
/// # Example
/// ```
/// let qb = duosql::qb::oracle().from("users").limit(10);
/// assert_eq!(qb.build().unwrap(), "SELECT * FROM users FETCH FIRST 10 ROWS ONLY");
/// ```
pub fn oracle() -> SelectBuilder<Oracle> {
    SelectBuilder::new()
}
