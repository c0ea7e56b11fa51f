//! Entity identifier

use slotmap::Key;
use std::fmt;

slotmap::new_key_type! {
    /// Generational handle to a host entity.
    ///
    /// A handle to a deleted entity never resolves to a newer one.
    pub struct EntityId;
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:016x}}}", self.data().as_ffi())
    }
}
