//! Entity identity capability

/// Anything with a stable identity
///
/// Two entities are the same entity when their identifiers match, whatever
/// the state of their other attributes.
pub trait Entity {
    type Id: PartialEq;

    /// The entity's identifier
    fn id(&self) -> &Self::Id;
}

/// Compare two entities by identity only
pub fn id_equals<E: Entity>(a: &E, b: &E) -> bool {
    a.id() == b.id()
}
