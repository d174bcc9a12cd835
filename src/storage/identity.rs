//! Deterministic identifiers for stored resources.
//!
//! Ids are name-based (version 5) UUIDs of a natural key, so loading the same
//! entry twice always lands on the same id. Each resource kind has its own
//! namespace to keep, say, an article guid and a feed address apart.

use uuid::Uuid;

pub const ARTICLE_NAMESPACE: Uuid = Uuid::from_u128(0xcabe9f84_ab7e_494c_bf53_7499adeb30ac);
pub const FEED_NAMESPACE: Uuid = Uuid::from_u128(0x2cd1bdc1_91fa_41f8_b113_c871bcd0835e);

pub fn generate(namespace: &Uuid, key: &str) -> String {
    Uuid::new_v5(namespace, key.as_bytes()).to_string()
}
