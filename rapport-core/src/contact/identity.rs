//! Alias and identicon derivation for identities.
//!
//! Aliases and identicons are normally produced by the naming collaborator
//! of the host application. [`HashedIdentityDecorator`] is the built-in
//! fallback: it hashes the identity with SHA-256 and derives both values
//! from the digest, so the same identity always decorates the same way.

use sha2::{Digest, Sha256};

/// Derives the generated decorations of an identity.
///
/// Implementations must be deterministic: the same identity must always
/// produce the same alias and identicon.
pub trait IdentityDecorator: Send + Sync {
    /// Returns the system-generated pseudonym for `identity`.
    fn alias(&self, identity: &str) -> String;

    /// Returns the identicon descriptor for `identity`.
    fn identicon(&self, identity: &str) -> String;
}

const ADJECTIVES: &[&str] = &[
    "Agile", "Bold", "Brave", "Bright", "Calm", "Clever", "Cosmic", "Daring", "Eager", "Fancy",
    "Fluffy", "Gentle", "Golden", "Happy", "Hidden", "Jolly", "Kind", "Lively", "Lucky", "Mellow",
    "Misty", "Noble", "Quiet", "Rapid", "Rustic", "Silent", "Sunny", "Swift", "Tender", "Vivid",
    "Wild", "Witty",
];

const ANIMALS: &[&str] = &[
    "Albatross", "Badger", "Beaver", "Bison", "Crane", "Dolphin", "Falcon", "Ferret", "Gazelle",
    "Heron", "Ibis", "Jaguar", "Koala", "Lemur", "Lynx", "Marten", "Narwhal", "Ocelot", "Otter",
    "Panda", "Puffin", "Quail", "Raven", "Salmon", "Stork", "Tapir", "Toucan", "Turtle", "Vole",
    "Walrus", "Wombat", "Yak",
];

/// Number of digest bytes encoded into an identicon descriptor.
const IDENTICON_BYTES: usize = 8;

/// Decorates identities from their SHA-256 digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedIdentityDecorator;

impl IdentityDecorator for HashedIdentityDecorator {
    fn alias(&self, identity: &str) -> String {
        let digest = Sha256::digest(identity.as_bytes());
        let first = ADJECTIVES[usize::from(digest[0]) % ADJECTIVES.len()];
        let second = ADJECTIVES[usize::from(digest[1]) % ADJECTIVES.len()];
        let animal = ANIMALS[usize::from(digest[2]) % ANIMALS.len()];
        format!("{first} {second} {animal}")
    }

    fn identicon(&self, identity: &str) -> String {
        let digest = Sha256::digest(identity.as_bytes());
        format!("identicon:{}", hex::encode(&digest[..IDENTICON_BYTES]))
    }
}
