//! Qualified names for packages, classifiers and callables.
//!
//! - [`FqName`]: dot-separated path (`kotlin.collections`)
//! - [`ClassId`]: package + relative class path (`kotlin/collections/Map.Entry`)
//! - [`CallableId`]: package + optional class + callable name

use crate::{Name, StringInterner};
use smallvec::SmallVec;

/// Fully qualified dot-separated name. The empty path is the root package.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqName {
    segments: SmallVec<[Name; 4]>,
}

impl FqName {
    /// The root package.
    pub fn root() -> Self {
        FqName::default()
    }

    pub fn new(segments: impl IntoIterator<Item = Name>) -> Self {
        FqName {
            segments: segments.into_iter().collect(),
        }
    }

    /// Intern every segment of a dotted path. `""` yields the root.
    pub fn parse(path: &str, interner: &StringInterner) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        FqName::new(path.split('.').map(|segment| interner.intern(segment)))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    /// Last segment, `None` for the root.
    pub fn short_name(&self) -> Option<Name> {
        self.segments.last().copied()
    }

    /// Path without its last segment.
    #[must_use]
    pub fn parent(&self) -> FqName {
        let mut segments = self.segments.clone();
        segments.pop();
        FqName { segments }
    }

    #[must_use]
    pub fn child(&self, name: Name) -> FqName {
        let mut segments = self.segments.clone();
        segments.push(name);
        FqName { segments }
    }

    /// Append the path to `buf` joined by `separator`.
    pub fn write_joined(&self, interner: &StringInterner, separator: char, buf: &mut String) {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                buf.push(separator);
            }
            buf.push_str(interner.lookup(*segment));
        }
    }

    pub fn as_string(&self, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.write_joined(interner, '.', &mut buf);
        buf
    }
}

/// Identity of a classifier: its package plus the class path inside it.
///
/// Nested classes share their outer class' package; `relative` holds the
/// whole chain (`Map.Entry`). Local classes carry `is_local` and are still
/// rendered by their path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassId {
    pub package: FqName,
    pub relative: FqName,
    pub is_local: bool,
}

impl ClassId {
    pub fn new(package: FqName, relative: FqName) -> Self {
        ClassId {
            package,
            relative,
            is_local: false,
        }
    }

    pub fn top_level(package: FqName, name: Name) -> Self {
        ClassId::new(package, FqName::new([name]))
    }

    /// Parse `"kotlin.collections/Map.Entry"`-style input: package before the
    /// slash (with dots), class path after it.
    pub fn parse(text: &str, interner: &StringInterner) -> Self {
        match text.rsplit_once('/') {
            Some((package, relative)) => ClassId::new(
                FqName::parse(&package.replace('/', "."), interner),
                FqName::parse(relative, interner),
            ),
            None => ClassId::new(FqName::root(), FqName::parse(text, interner)),
        }
    }

    #[must_use]
    pub fn nested(&self, name: Name) -> ClassId {
        ClassId {
            package: self.package.clone(),
            relative: self.relative.child(name),
            is_local: self.is_local,
        }
    }

    /// Outer class id, `None` for top-level classes.
    pub fn outer(&self) -> Option<ClassId> {
        if self.relative.segments().len() < 2 {
            return None;
        }
        Some(ClassId {
            package: self.package.clone(),
            relative: self.relative.parent(),
            is_local: self.is_local,
        })
    }

    pub fn short_name(&self) -> Name {
        self.relative.short_name().unwrap_or(Name::EMPTY)
    }

    /// `pkg/path/Outer.Inner`; the bare relative path in the root package.
    pub fn as_string(&self, interner: &StringInterner) -> String {
        let mut buf = String::new();
        if !self.package.is_root() {
            self.package.write_joined(interner, '/', &mut buf);
            buf.push('/');
        }
        self.relative.write_joined(interner, '.', &mut buf);
        buf
    }

    /// Dotted fully-qualified name (`pkg.path.Outer.Inner`).
    pub fn as_fq_name(&self) -> FqName {
        FqName::new(
            self.package
                .segments()
                .iter()
                .chain(self.relative.segments())
                .copied(),
        )
    }
}

/// Identity of a callable: package, optional owning class, name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallableId {
    pub package: FqName,
    pub class_name: Option<FqName>,
    pub callable_name: Name,
}

impl CallableId {
    pub fn member(class_id: &ClassId, callable_name: Name) -> Self {
        CallableId {
            package: class_id.package.clone(),
            class_name: Some(class_id.relative.clone()),
            callable_name,
        }
    }

    /// `pkg/path/Class.name`, with the leading `/` kept for the root package.
    pub fn as_string(&self, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.package.write_joined(interner, '/', &mut buf);
        buf.push('/');
        if let Some(class_name) = &self.class_name {
            class_name.write_joined(interner, '.', &mut buf);
            buf.push('.');
        }
        buf.push_str(interner.lookup(self.callable_name));
        buf
    }
}

#[cfg(test)]
mod tests;
