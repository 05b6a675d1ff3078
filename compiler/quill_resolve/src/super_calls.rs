//! Choosing the supertype an unqualified `super.member` refers to.
//!
//! With several supertypes, `super.f()` is only meaningful for the
//! supertypes that actually provide `f`. A supertype providing a concrete
//! implementation wins over one that only inherits an abstract or
//! interface-default declaration, unless the latter is more specific.
//!
//! The identity methods of `Any` (`equals/1`, `hashCode/0`, `toString/0`)
//! are special: every interface inherits them implicitly, so those implicit
//! copies never count as concrete, and when nothing else provides them the
//! call goes to `Any` itself.

use quill_ir::element::{ClassKind, Modality};
use quill_ir::{Name, TypeId};
use smallvec::SmallVec;

use crate::context::{CallableMember, ResolutionContext};
use crate::error::SuperCallError;

/// Arity of each identity method of `Any`.
const IDENTITY_METHODS: [(&str, usize); 3] = [("hashCode", 0), ("equals", 1), ("toString", 0)];

/// Syntactic form of the access through `super`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `super.f(args)`
    FunctionCall { argument_count: usize },
    /// `super.p`
    PropertyAccess,
}

/// A member access whose receiver is an unqualified `super`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuperCallSite {
    /// Name of the accessed member; `None` when the callee is not a named
    /// reference.
    pub callee: Option<Name>,
    pub shape: CallShape,
}

impl SuperCallSite {
    pub fn function_call(callee: Name, argument_count: usize) -> Self {
        SuperCallSite {
            callee: Some(callee),
            shape: CallShape::FunctionCall { argument_count },
        }
    }

    pub fn property_access(callee: Name) -> Self {
        SuperCallSite {
            callee: Some(callee),
            shape: CallShape::PropertyAccess,
        }
    }
}

/// Whether the site calls one of `Any`'s identity methods with its exact
/// arity.
fn is_identity_method_call(context: &impl ResolutionContext, call: &SuperCallSite) -> bool {
    let (Some(callee), CallShape::FunctionCall { argument_count }) = (call.callee, call.shape)
    else {
        return false;
    };
    let name = context.name_text(callee);
    IDENTITY_METHODS
        .iter()
        .any(|&(method, arity)| method == name && arity == argument_count)
}

/// Supertypes among `supertypes` that `call` can dispatch to.
///
/// A single supertype is returned as is, unless the call is an identity
/// method. An empty result means the access is ambiguous or unresolved.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(supertypes = supertypes.len(), callee = ?call.callee, shape = ?call.shape)
)]
pub fn resolve_supertypes_for_call(
    context: &impl ResolutionContext,
    supertypes: &[TypeId],
    call: &SuperCallSite,
) -> Vec<TypeId> {
    let identity_method = is_identity_method_call(context, call);
    if supertypes.len() <= 1 && !identity_method {
        return supertypes.to_vec();
    }

    let Some(callee) = call.callee else {
        tracing::debug!("callee is not a named reference");
        return Vec::new();
    };

    let resolved = match call.shape {
        CallShape::FunctionCall { .. } if identity_method => {
            let resolved = resolve_by_members(context, supertypes, false, |ty| {
                context.function_members(ty, callee)
            });
            if resolved.is_empty() {
                vec![context.any_type()]
            } else {
                resolved
            }
        }
        CallShape::FunctionCall { .. } => resolve_by_members(context, supertypes, true, |ty| {
            let mut members = context.function_members(ty, callee);
            members.extend(context.property_members(ty, callee));
            members
        }),
        CallShape::PropertyAccess => resolve_by_members(context, supertypes, true, |ty| {
            context.property_members(ty, callee)
        }),
    };

    if resolved.is_empty() {
        tracing::debug!("no supertype provides the callee");
    }
    resolved
}

/// [`resolve_supertypes_for_call`], with an empty result reported as an
/// error.
pub fn resolve_or_error(
    context: &impl ResolutionContext,
    supertypes: &[TypeId],
    call: &SuperCallSite,
) -> Result<Vec<TypeId>, SuperCallError> {
    let resolved = resolve_supertypes_for_call(context, supertypes, call);
    if !resolved.is_empty() {
        return Ok(resolved);
    }
    match call.callee {
        Some(callee) => Err(SuperCallError::Ambiguous {
            callee: context.name_text(callee).to_owned(),
            candidates: supertypes.len(),
        }),
        None => Err(SuperCallError::UnresolvedCallee),
    }
}

/// Partition supertypes by whether the members they offer are concrete.
///
/// `allow_weak` accepts supertypes whose members are all abstract or
/// implicit; without it only weak supertypes that are regular classes
/// survive.
fn resolve_by_members<C, F>(
    context: &C,
    supertypes: &[TypeId],
    allow_weak: bool,
    members_of: F,
) -> Vec<TypeId>
where
    C: ResolutionContext,
    F: Fn(TypeId) -> Vec<CallableMember>,
{
    let mut concrete: SmallVec<[TypeId; 2]> = SmallVec::new();
    let mut weak: SmallVec<[TypeId; 2]> = SmallVec::new();

    for &supertype in supertypes {
        let members = members_of(supertype);
        if members.is_empty() {
            continue;
        }
        if members
            .iter()
            .any(|member| is_concrete_member(context, supertype, member))
        {
            concrete.push(supertype);
        } else if members.iter().any(|member| {
            member
                .dispatch_receiver_type
                .is_some_and(|receiver| !context.is_any(receiver))
        }) {
            weak.push(supertype);
        }
    }

    concrete.retain(|&mut concrete_type| {
        !weak
            .iter()
            .any(|&weak_type| context.is_subtype_of(weak_type, concrete_type))
    });

    if !concrete.is_empty() {
        concrete.into_vec()
    } else if allow_weak {
        weak.into_vec()
    } else {
        weak.into_iter()
            .filter(|&ty| context.class_kind(ty) == Some(ClassKind::Class))
            .collect()
    }
}

/// Non-abstract, and not an interface's implicit copy of a member of `Any`.
fn is_concrete_member(
    context: &impl ResolutionContext,
    supertype: TypeId,
    member: &CallableMember,
) -> bool {
    if member.modality == Modality::Abstract {
        return false;
    }
    match context.class_kind(supertype) {
        Some(ClassKind::Interface) => {
            context.declaring_class(member.original) != Some(context.any_class())
        }
        _ => true,
    }
}
