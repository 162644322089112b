/// Upper bound on rows returned by any list endpoint.
///
/// A safety limit against unbounded result sets, not a pagination contract.
pub const MAX_LIST_ROWS: i64 = 1000;
