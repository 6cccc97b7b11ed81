//! [`EntityRef`]: a reference to a server-side entity by id.
//!
//! Outputs return related entities as `{"id": "..."}` only. Fetching the full
//! entity is a separate query, so the reference is typed by the entity it
//! points at to keep e.g. a payment id from being used as an invoice id.

use std::{fmt, marker::PhantomData};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wire::{Shape, WireShape};

/// A kind of server entity that can be referenced by id.
pub trait Entity: 'static {
    /// The GraphQL typename of the entity.
    const TYPENAME: &'static str;
}

macro_rules! entity_markers {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
            pub enum $name {}

            impl Entity for $name {
                const TYPENAME: &'static str = stringify!($name);
            }
        )*
    };
}

entity_markers! {
    /// An outgoing Lightning payment.
    OutgoingPayment,
    /// An incoming Lightning payment.
    IncomingPayment,
    /// A Lightning invoice created by one of our nodes.
    Invoice,
    /// A BOLT 12 offer.
    Offer,
    /// An UMA invitation.
    UmaInvitation,
    /// An on-chain withdrawal.
    WithdrawalRequest,
    /// A Lightning channel.
    Channel,
    /// A Lightning node.
    LightsparkNode,
    /// A payload the node asked the remote signer to sign.
    SignablePayload,
}

/// A reference to an entity of kind `E`. Equality is by id.
pub struct EntityRef<E: Entity> {
    id: String,
    entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityRef<E> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity: PhantomData,
        }
    }

    /// The opaque server-assigned id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn into_id(self) -> String {
        self.id
    }

    /// The GraphQL typename of the referenced entity.
    #[inline]
    pub fn typename(&self) -> &'static str {
        E::TYPENAME
    }

    /// Re-tag this reference as pointing at a different kind of entity, e.g.
    /// once the caller has resolved a polymorphic id.
    pub fn cast<F: Entity>(self) -> EntityRef<F> {
        EntityRef::new(self.id)
    }
}

// Manual impls so that `E` doesn't need to implement these.

impl<E: Entity> Clone for EntityRef<E> {
    fn clone(&self) -> Self {
        Self::new(self.id.clone())
    }
}

impl<E: Entity> PartialEq for EntityRef<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E: Entity> Eq for EntityRef<E> {}

impl<E: Entity> std::hash::Hash for EntityRef<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl<E: Entity> fmt::Debug for EntityRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityRef<{}>({:?})", E::TYPENAME, self.id)
    }
}

impl<E: Entity> fmt::Display for EntityRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<E: Entity> WireShape for EntityRef<E> {
    const SHAPE: Shape = Shape::Entity;
}

#[derive(Serialize, Deserialize)]
struct IdOnly<'a> {
    #[serde(borrow)]
    id: std::borrow::Cow<'a, str>,
}

impl<E: Entity> Serialize for EntityRef<E> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        IdOnly {
            id: self.id.as_str().into(),
        }
        .serialize(serializer)
    }
}

impl<'de, E: Entity> Deserialize<'de> for EntityRef<E> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        // Other keys (e.g. a `__typename` the server adds) are ignored.
        let IdOnly { id } = IdOnly::deserialize(deserializer)?;
        Ok(Self::new(id.into_owned()))
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<E: Entity> proptest::arbitrary::Arbitrary for EntityRef<E> {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;

        common::test_utils::arbitrary::any_simple_string()
            .prop_map(Self::new)
            .boxed()
    }
}
