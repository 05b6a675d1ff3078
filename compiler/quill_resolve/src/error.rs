//! Failures surfaced by super-call resolution.

/// No supertype could be chosen for a `super.member` access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SuperCallError {
    /// None of the supertypes offers the member unambiguously.
    #[error("`super.{callee}` is ambiguous among {candidates} supertypes")]
    Ambiguous { callee: String, candidates: usize },
    /// The accessed member is not a named reference.
    #[error("super access without a resolvable callee name")]
    UnresolvedCallee,
}
