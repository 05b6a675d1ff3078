//! Class hierarchies shared by the unit tests.

use quill_ir::element::{ClassKind, Modality};
use quill_ir::{ClassId, Name, StringInterner, TypeId};
use quill_types::{ClassDescriptor, ClassifierId, MemberDescriptor, MemberId, TypePool};

use crate::PoolContext;

pub(crate) struct World {
    pub interner: StringInterner,
    pub pool: TypePool,
}

impl World {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let pool = TypePool::new(&interner);
        World { interner, pool }
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Declare `p.<name>` and return it with its type.
    pub fn declare(
        &mut self,
        name: &str,
        kind: ClassKind,
        modality: Modality,
        supertypes: &[TypeId],
    ) -> (ClassifierId, TypeId) {
        let mut class = ClassDescriptor::new(
            ClassId::parse(&format!("p/{name}"), &self.interner),
            kind,
        );
        class.modality = modality;
        class.super_types.extend_from_slice(supertypes);
        let class = self.pool.add_class(class);
        (class, self.pool.class_type(class, []))
    }

    pub fn interface(&mut self, name: &str, supertypes: &[TypeId]) -> (ClassifierId, TypeId) {
        self.declare(name, ClassKind::Interface, Modality::Abstract, supertypes)
    }

    pub fn open_class(&mut self, name: &str, supertypes: &[TypeId]) -> (ClassifierId, TypeId) {
        self.declare(name, ClassKind::Class, Modality::Open, supertypes)
    }

    pub fn function(
        &mut self,
        owner: ClassifierId,
        name: &str,
        arity: u32,
        modality: Modality,
    ) -> MemberId {
        let mut member = MemberDescriptor::function(self.name(name), owner, arity);
        member.modality = modality;
        self.pool.add_member(member)
    }

    pub fn property(&mut self, owner: ClassifierId, name: &str, modality: Modality) -> MemberId {
        let mut member = MemberDescriptor::property(self.name(name), owner);
        member.modality = modality;
        self.pool.add_member(member)
    }

    pub fn context(&self) -> PoolContext<'_> {
        PoolContext::new(&self.pool, &self.interner)
    }
}
