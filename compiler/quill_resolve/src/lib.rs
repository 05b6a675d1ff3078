//! Call resolution helpers for Quill.
//!
//! Currently this covers unqualified `super` accesses: given the declared
//! supertypes of a class and a `super.member` site,
//! [`resolve_supertypes_for_call`] picks the supertypes the access can
//! dispatch to. Lookups go through [`ResolutionContext`]; [`PoolContext`]
//! implements it over a [`quill_types::TypePool`].

mod context;
mod error;
mod pool_context;
mod super_calls;

#[cfg(test)]
mod test_fixtures;

pub use context::{CallableMember, ResolutionContext};
pub use error::SuperCallError;
pub use pool_context::PoolContext;
pub use super_calls::{resolve_or_error, resolve_supertypes_for_call, CallShape, SuperCallSite};
