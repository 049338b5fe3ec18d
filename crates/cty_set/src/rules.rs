//! Membership rules for `Set`.

/// Decides how a set hashes its members and which members are the same.
///
/// Implementations must keep the two consistent: whenever
/// `equivalent(a, b)` holds, `hash(a) == hash(b)` must hold too.
pub trait Rules<T> {
    /// Hash a value into its bucket key.
    fn hash(&self, val: &T) -> u64;

    /// Check whether two values denote the same set member.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}
