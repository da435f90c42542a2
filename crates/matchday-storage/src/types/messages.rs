//! Direct-message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MessageId, PrincipalId};

/// A direct message between two principals. Append-only; never mutated or
/// deleted once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub from: PrincipalId,
    pub to: PrincipalId,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Whether this message belongs to the thread between `a` and `b`,
    /// in either direction.
    pub fn in_thread(&self, a: &PrincipalId, b: &PrincipalId) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }
}

/// Parameters for appending a message. The store assigns id and timestamp.
#[derive(Clone, Debug)]
pub struct NewMessage {
    pub from: PrincipalId,
    pub to: PrincipalId,
    pub text: String,
}
