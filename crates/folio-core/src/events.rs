//! # Lending Events
//!
//! Every catalog operation narrates its outcome. Instead of printing, the
//! catalog appends a [`LendingEvent`] to its history and emits the same
//! outcome as a `tracing` event.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::request_borrow("U002", "X1")                                  │
//! │       │                                                                 │
//! │       ├──► history.push(EventRecord { AlreadyBorrowed { .. } })         │
//! │       │                                                                 │
//! │       └──► warn!("Li Si could not borrow ...")                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a catalog operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LendingEvent {
    /// A new item joined the catalog.
    ItemAdded { item_id: String, title: String },
    /// An item with the same id was already present; nothing changed.
    DuplicateItem { item_id: String, title: String },
    /// Rejected, the item arrived already checked out with no holder.
    ItemCheckedOut { item_id: String, title: String },
    /// A new member was registered.
    MemberRegistered { card_id: String, name: String },
    /// Registration rejected, the card id is taken.
    DuplicateCardId { card_id: String, name: String },
    /// Registration rejected, the member arrived holding items.
    MemberHoldsItems {
        card_id: String,
        name: String,
        held: usize,
    },
    /// Lookup by item id found nothing.
    ItemNotFound { item_id: String },
    /// Lookup by card id found nothing.
    MemberNotFound { card_id: String },
    /// The member now holds the item.
    Borrowed {
        card_id: String,
        item_id: String,
        title: String,
    },
    /// Borrow rejected, the item is already checked out.
    AlreadyBorrowed {
        card_id: String,
        item_id: String,
        title: String,
    },
    /// The member gave the item back.
    Returned {
        card_id: String,
        item_id: String,
        title: String,
    },
    /// Return rejected, the member does not hold the item.
    NotBorrowed {
        card_id: String,
        item_id: String,
        title: String,
    },
}

impl LendingEvent {
    /// Whether the event records a rejected or failed operation.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            LendingEvent::ItemAdded { .. }
                | LendingEvent::MemberRegistered { .. }
                | LendingEvent::Borrowed { .. }
                | LendingEvent::Returned { .. }
        )
    }
}

impl fmt::Display for LendingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LendingEvent::ItemAdded { title, .. } => write!(f, "\"{title}\" added to the catalog"),
            LendingEvent::DuplicateItem { title, .. } => {
                write!(f, "\"{title}\" is already in the catalog")
            }
            LendingEvent::ItemCheckedOut { title, .. } => {
                write!(f, "\"{title}\" cannot be added while checked out")
            }
            LendingEvent::MemberRegistered { card_id, name } => {
                write!(f, "{name} registered with card {card_id}")
            }
            LendingEvent::DuplicateCardId { card_id, .. } => {
                write!(f, "registration failed: card {card_id} is already in use")
            }
            LendingEvent::MemberHoldsItems { card_id, held, .. } => {
                write!(f, "registration failed: card {card_id} already holds {held} item(s)")
            }
            LendingEvent::ItemNotFound { item_id } => write!(f, "no item with ISBN {item_id}"),
            LendingEvent::MemberNotFound { card_id } => write!(f, "no member with card {card_id}"),
            LendingEvent::Borrowed { card_id, title, .. } => {
                write!(f, "{card_id} borrowed \"{title}\"")
            }
            LendingEvent::AlreadyBorrowed { card_id, title, .. } => {
                write!(f, "{card_id} could not borrow \"{title}\": already checked out")
            }
            LendingEvent::Returned { card_id, title, .. } => {
                write!(f, "{card_id} returned \"{title}\"")
            }
            LendingEvent::NotBorrowed { card_id, title, .. } => {
                write!(f, "{card_id} could not return \"{title}\": not borrowed by this member")
            }
        }
    }
}

/// A [`LendingEvent`] stamped with an id and the time it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    pub event: LendingEvent,
}

impl EventRecord {
    /// Stamps `event` with a fresh v4 id and the current time.
    pub fn new(event: LendingEvent) -> Self {
        EventRecord {
            id: Uuid::new_v4(),
            at: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections() {
        let ok = LendingEvent::Borrowed {
            card_id: "C1".to_string(),
            item_id: "X1".to_string(),
            title: "A".to_string(),
        };
        let rejected = LendingEvent::ItemNotFound {
            item_id: "X9".to_string(),
        };
        assert!(!ok.is_rejection());
        assert!(rejected.is_rejection());
    }

    #[test]
    fn test_event_display() {
        let event = LendingEvent::DuplicateCardId {
            card_id: "U001".to_string(),
            name: "Wang Wu".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "registration failed: card U001 is already in use"
        );
    }

    #[test]
    fn test_event_serializes_with_kind_tag() {
        let event = LendingEvent::MemberNotFound {
            card_id: "C9".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "member_not_found");
        assert_eq!(json["card_id"], "C9");
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = EventRecord::new(LendingEvent::ItemNotFound {
            item_id: "X1".to_string(),
        });
        let b = EventRecord::new(a.event.clone());
        assert_ne!(a.id, b.id);
        assert!(b.at >= a.at);
    }
}
