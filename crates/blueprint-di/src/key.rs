use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a contract type a provider is registered under.
///
/// Two keys are equal when they name the same type; the type name is only
/// carried along for diagnostics.
#[derive(Clone, Copy)]
pub struct Key {
    id: TypeId,
    name: &'static str,
}

impl Key {
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Key {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by `std::any::type_name`.
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Type name with every module path removed, e.g. `Arc<dyn Repo>`.
    pub fn short_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut segment_start = 0;
        let mut chars = self.name.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ':' && chars.peek() == Some(&':') {
                chars.next();
                out.truncate(segment_start);
                continue;
            }
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
        out
    }
}

impl PartialEq for Key {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name).finish()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}
