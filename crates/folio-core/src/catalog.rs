//! # Catalog
//!
//! The registry that owns every [`Item`] and [`Member`] and mediates all
//! lending by identifier.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Borrow Request Flow                                  │
//! │                                                                         │
//! │  request_borrow(card_id, item_id)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve card_id ──► members (linear scan)   miss → MemberNotFound      │
//! │  resolve item_id ──► items   (linear scan)   miss → ItemNotFound        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Member::borrow(&mut Item)                                              │
//! │       │                                                                 │
//! │       ├── Item::checkout() == true  → Borrowed                          │
//! │       └── Item::checkout() == false → AlreadyBorrowed (no mutation)     │
//! │                                                                         │
//! │  Every outcome is appended to `history`.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two items share an id
//! - No two members share a card id
//! - An item is checked out iff exactly one member's held list contains it
//!
//! Mutation goes through `&mut self`, so a borrow or return updates the
//! member and the item as one step.

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::events::{EventRecord, LendingEvent};
use crate::types::{Item, Member};

/// A named lending catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Library name, used in narration.
    pub name: String,
    items: Vec<Item>,
    members: Vec<Member>,
    history: Vec<EventRecord>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Catalog {
            name: name.into(),
            items: Vec::new(),
            members: Vec::new(),
            history: Vec::new(),
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Adds `item` unless an item with the same id is already present.
    ///
    /// A duplicate is reported and ignored, not treated as an error. An item
    /// that is already checked out is rejected, since no registered member
    /// could hold it. Returns whether the item was inserted.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.item_index(&item.id).is_some() {
            warn!(item_id = %item.id, "\"{}\" is already in {}", item.title, self.name);
            self.record(LendingEvent::DuplicateItem {
                item_id: item.id,
                title: item.title,
            });
            return false;
        }

        if !item.is_available() {
            warn!(item_id = %item.id, "\"{}\" cannot be added to {}: checked out", item.title, self.name);
            self.record(LendingEvent::ItemCheckedOut {
                item_id: item.id,
                title: item.title,
            });
            return false;
        }

        info!(item_id = %item.id, "\"{}\" added to {}", item.title, self.name);
        self.record(LendingEvent::ItemAdded {
            item_id: item.id.clone(),
            title: item.title.clone(),
        });
        self.items.push(item);
        true
    }

    /// Registers `member` unless its card id is taken.
    ///
    /// This is the only gate keeping card ids unique. Returns `false` and
    /// inserts nothing on collision, or when the member already holds items
    /// borrowed outside this catalog.
    pub fn register_member(&mut self, member: Member) -> bool {
        if self.member_index(&member.card_id).is_some() {
            warn!(card_id = %member.card_id, "registration of {} failed: card id already in use", member.name);
            self.record(LendingEvent::DuplicateCardId {
                card_id: member.card_id,
                name: member.name,
            });
            return false;
        }

        if member.held_count() != 0 {
            warn!(card_id = %member.card_id, held = member.held_count(), "registration of {} failed: already holds items", member.name);
            self.record(LendingEvent::MemberHoldsItems {
                held: member.held_count(),
                card_id: member.card_id,
                name: member.name,
            });
            return false;
        }

        info!(card_id = %member.card_id, "{} registered with {}", member.name, self.name);
        self.record(LendingEvent::MemberRegistered {
            card_id: member.card_id.clone(),
            name: member.name.clone(),
        });
        self.members.push(member);
        true
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Finds an item by id. A miss is reported and returned as `None`.
    pub fn find_item_by_id(&self, id: &str) -> Option<&Item> {
        let found = self.items.iter().find(|item| item.id == id);
        if found.is_none() {
            warn!(item_id = %id, "no item with ISBN {} in {}", id, self.name);
        }
        found
    }

    /// Finds a member by card id. A miss is reported and returned as `None`.
    pub fn find_member_by_card_id(&self, card_id: &str) -> Option<&Member> {
        let found = self.members.iter().find(|member| member.card_id == card_id);
        if found.is_none() {
            warn!(card_id = %card_id, "no member with card {} in {}", card_id, self.name);
        }
        found
    }

    /// The member currently holding `item_id`, if any.
    pub fn holder_of(&self, item_id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.holds(item_id))
    }

    fn item_index(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn member_index(&self, card_id: &str) -> Option<usize> {
        self.members.iter().position(|member| member.card_id == card_id)
    }

    /// Resolves both identifiers, recording a miss for each one that fails.
    fn resolve(&mut self, card_id: &str, item_id: &str) -> CoreResult<(usize, usize)> {
        let member = self.member_index(card_id);
        let item = self.item_index(item_id);

        if member.is_none() {
            warn!(card_id = %card_id, "no member with card {} in {}", card_id, self.name);
            self.record(LendingEvent::MemberNotFound {
                card_id: card_id.to_string(),
            });
        }
        if item.is_none() {
            warn!(item_id = %item_id, "no item with ISBN {} in {}", item_id, self.name);
            self.record(LendingEvent::ItemNotFound {
                item_id: item_id.to_string(),
            });
        }

        match (member, item) {
            (Some(m), Some(i)) => Ok((m, i)),
            (None, _) => Err(CoreError::MemberNotFound(card_id.to_string())),
            (Some(_), None) => Err(CoreError::ItemNotFound(item_id.to_string())),
        }
    }

    // =========================================================================
    // Lending
    // =========================================================================

    /// Lends `item_id` to the member with `card_id`.
    ///
    /// ## Errors
    /// - [`CoreError::MemberNotFound`] / [`CoreError::ItemNotFound`] when an
    ///   identifier does not resolve
    /// - [`CoreError::AlreadyBorrowed`] when the item is checked out
    ///
    /// The catalog is unchanged on every error (apart from its history).
    pub fn try_borrow(&mut self, card_id: &str, item_id: &str) -> CoreResult<()> {
        let (m, i) = self.resolve(card_id, item_id)?;

        let member = &mut self.members[m];
        let item = &mut self.items[i];
        let borrowed = member.borrow(item);
        let title = item.title.clone();

        if borrowed {
            self.record(LendingEvent::Borrowed {
                card_id: card_id.to_string(),
                item_id: item_id.to_string(),
                title,
            });
            Ok(())
        } else {
            self.record(LendingEvent::AlreadyBorrowed {
                card_id: card_id.to_string(),
                item_id: item_id.to_string(),
                title,
            });
            Err(CoreError::AlreadyBorrowed {
                item_id: item_id.to_string(),
                card_id: card_id.to_string(),
            })
        }
    }

    /// Takes `item_id` back from the member with `card_id`.
    ///
    /// ## Errors
    /// - [`CoreError::MemberNotFound`] / [`CoreError::ItemNotFound`] when an
    ///   identifier does not resolve
    /// - [`CoreError::NotBorrowed`] when this member does not hold the item
    pub fn try_return(&mut self, card_id: &str, item_id: &str) -> CoreResult<()> {
        let (m, i) = self.resolve(card_id, item_id)?;

        let member = &mut self.members[m];
        let item = &mut self.items[i];
        let returned = member.return_item(item);
        let title = item.title.clone();

        if returned {
            self.record(LendingEvent::Returned {
                card_id: card_id.to_string(),
                item_id: item_id.to_string(),
                title,
            });
            Ok(())
        } else {
            self.record(LendingEvent::NotBorrowed {
                card_id: card_id.to_string(),
                item_id: item_id.to_string(),
                title,
            });
            Err(CoreError::NotBorrowed {
                item_id: item_id.to_string(),
                card_id: card_id.to_string(),
            })
        }
    }

    /// Borrow request by identifiers. Returns whether the member now holds
    /// the item; any failure leaves the catalog unchanged.
    pub fn request_borrow(&mut self, card_id: &str, item_id: &str) -> bool {
        self.try_borrow(card_id, item_id).is_ok()
    }

    /// Return request by identifiers. Returns whether the item went back on
    /// the shelf; any failure leaves the catalog unchanged.
    pub fn request_return(&mut self, card_id: &str, item_id: &str) -> bool {
        self.try_return(card_id, item_id).is_ok()
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// All items in insertion order.
    pub fn list_all_items(&self) -> &[Item] {
        &self.items
    }

    /// All members in registration order.
    pub fn list_all_members(&self) -> &[Member] {
        &self.members
    }

    /// The items held by `card_id`, oldest borrow first.
    ///
    /// `None` when no such member is registered.
    pub fn held_items(&self, card_id: &str) -> Option<Vec<&Item>> {
        let member = self.find_member_by_card_id(card_id)?;
        Some(
            member
                .held_items()
                .iter()
                .filter_map(|id| self.items.iter().find(|item| item.id == *id))
                .collect(),
        )
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Every recorded outcome, oldest first.
    pub fn history(&self) -> &[EventRecord] {
        &self.history
    }

    fn record(&mut self, event: LendingEvent) {
        debug!(catalog = %self.name, event = %event, "lending event recorded");
        self.history.push(EventRecord::new(event));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
