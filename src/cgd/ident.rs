use flexstr::{SharedStr as FlexStr, shared_fmt as flex_fmt};
use sha2::{Digest, Sha256};

use crate::types::NodeId;

// length of the hex digest part of a generated identifier
const HASH_LENGTH: usize = 19;

/// Makes stable node identifiers from a tag and the natural key of an
/// entity.  The same (tag, components) always gives the same identifier.
/// Uniqueness isn't checked: two different keys that hash to the same value
/// are silently merged into one node.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: FlexStr,
}

impl IdGenerator {
    pub fn new(prefix: &str) -> IdGenerator {
        IdGenerator {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_ref()
    }

    pub fn make_id(&self, tag: &str, components: &[&str]) -> NodeId {
        let mut key = String::from(tag);
        for component in components {
            key.push_str(component);
        }
        self.make_id_from_key(&key)
    }

    // hash an already concatenated natural key
    pub fn make_id_from_key(&self, key: &str) -> NodeId {
        let hex = format!("{:x}", Sha256::digest(key.as_bytes()));

        flex_fmt!("{}:b{}", self.prefix, &hex[..HASH_LENGTH])
    }
}
