//! # Domain Types
//!
//! The two lending entities: [`Item`] and [`Member`].
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │      Item       │        │     Member      │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  id (ISBN)      │◄───────│  held_items     │ (ids, in borrow order) │
//! │  │  title          │        │  card_id        │                        │
//! │  │  author         │        │  name           │                        │
//! │  │  available      │        └─────────────────┘                        │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   ItemStatus    │  Available ──checkout()──► CheckedOut              │
//! │  │  ─────────────  │  CheckedOut ──checkin()──► Available               │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The [`Catalog`](crate::Catalog) owns every item. A member only records the
//! ids of the items it holds, so there is a single owner per item and the
//! catalog resolves ids back to items when it needs them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CoreResult;
use crate::validation::{
    validate_author, validate_card_id, validate_item_id, validate_member_name, validate_title,
};

// =============================================================================
// Item Status
// =============================================================================

/// Lending state of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// On the shelf, may be borrowed.
    #[default]
    Available,
    /// Held by exactly one member.
    CheckedOut,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Available => f.write_str("available"),
            ItemStatus::CheckedOut => f.write_str("checked out"),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A loanable catalog entry (one physical book).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Book title.
    pub title: String,

    /// Author as printed on the cover.
    pub author: String,

    /// ISBN - the catalog-wide unique id.
    pub id: String,

    /// False exactly while one member holds the item.
    available: bool,
}

impl Item {
    /// Creates an available item without validating its fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: impl Into<String>) -> Self {
        Item {
            title: title.into(),
            author: author.into(),
            id: id.into(),
            available: true,
        }
    }

    /// Creates an available item after validating title, author and id.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::Item;
    ///
    /// assert!(Item::try_new("Introduction to Algorithms", "Thomas Cormen", "9787111407010").is_ok());
    /// assert!(Item::try_new("", "Thomas Cormen", "9787111407010").is_err());
    /// ```
    pub fn try_new(
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
    ) -> CoreResult<Self> {
        let item = Item::new(title, author, id);
        validate_title(&item.title)?;
        validate_author(&item.author)?;
        validate_item_id(&item.id)?;
        Ok(item)
    }

    /// Whether the item can be borrowed right now.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// The availability flag as a state.
    #[inline]
    pub fn status(&self) -> ItemStatus {
        if self.available {
            ItemStatus::Available
        } else {
            ItemStatus::CheckedOut
        }
    }

    /// Moves the item to `CheckedOut`.
    ///
    /// Returns `false` and leaves the item untouched when it is already out.
    pub fn checkout(&mut self) -> bool {
        if !self.available {
            return false;
        }
        self.available = false;
        true
    }

    /// Puts the item back on the shelf. Idempotent.
    pub fn checkin(&mut self) {
        self.available = true;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} (ISBN {}) - {}",
            self.title,
            self.author,
            self.id,
            self.status()
        )
    }
}

// =============================================================================
// Member
// =============================================================================

/// A card holder allowed to borrow items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Display name.
    pub name: String,

    /// Library card id - the catalog-wide unique id.
    pub card_id: String,

    /// Ids of the items this member holds, oldest borrow first.
    held_items: Vec<String>,
}

impl Member {
    /// Creates a member holding nothing, without validating its fields.
    pub fn new(name: impl Into<String>, card_id: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            card_id: card_id.into(),
            held_items: Vec::new(),
        }
    }

    /// Creates a member after validating the name and card id.
    pub fn try_new(name: impl Into<String>, card_id: impl Into<String>) -> CoreResult<Self> {
        let member = Member::new(name, card_id);
        validate_member_name(&member.name)?;
        validate_card_id(&member.card_id)?;
        Ok(member)
    }

    /// Borrows `item` for this member.
    ///
    /// On success the item is checked out and its id appended to the held
    /// list. On failure (item already out) nothing changes.
    pub fn borrow(&mut self, item: &mut Item) -> bool {
        if item.checkout() {
            self.held_items.push(item.id.clone());
            info!(card_id = %self.card_id, item_id = %item.id, "{} borrowed \"{}\"", self.name, item.title);
            true
        } else {
            warn!(card_id = %self.card_id, item_id = %item.id, "{} could not borrow \"{}\": already checked out", self.name, item.title);
            false
        }
    }

    /// Returns `item` on behalf of this member.
    ///
    /// Fails with no state change when this member does not hold the item.
    pub fn return_item(&mut self, item: &mut Item) -> bool {
        let Some(pos) = self.held_items.iter().position(|id| *id == item.id) else {
            warn!(card_id = %self.card_id, item_id = %item.id, "{} could not return \"{}\": not borrowed by this member", self.name, item.title);
            return false;
        };

        item.checkin();
        self.held_items.remove(pos);
        info!(card_id = %self.card_id, item_id = %item.id, "{} returned \"{}\"", self.name, item.title);
        true
    }

    /// Whether this member currently holds the item with `item_id`.
    pub fn holds(&self, item_id: &str) -> bool {
        self.held_items.iter().any(|id| id == item_id)
    }

    /// Snapshot of held item ids, oldest borrow first.
    pub fn list_held_items(&self) -> Vec<String> {
        self.held_items.clone()
    }

    /// Borrowed view of held item ids.
    pub fn held_items(&self) -> &[String] {
        &self.held_items
    }

    /// Number of items currently held.
    pub fn held_count(&self) -> usize {
        self.held_items.len()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (card {}), {} item(s) held",
            self.name,
            self.card_id,
            self.held_count()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(id: &str) -> Item {
        Item::new(format!("Book {}", id), "Some Author", id)
    }

    #[test]
    fn test_item_starts_available() {
        let item = test_item("X1");
        assert!(item.is_available());
        assert_eq!(item.status(), ItemStatus::Available);
        assert_eq!(ItemStatus::default(), ItemStatus::Available);
    }

    #[test]
    fn test_checkout_flips_only_once() {
        let mut item = test_item("X1");

        assert!(item.checkout());
        assert!(!item.is_available());

        // Second checkout fails and leaves the state alone
        assert!(!item.checkout());
        assert_eq!(item.status(), ItemStatus::CheckedOut);
    }

    #[test]
    fn test_checkin_is_idempotent() {
        let mut item = test_item("X1");
        item.checkout();

        item.checkin();
        assert!(item.is_available());
        item.checkin();
        assert!(item.is_available());
    }

    #[test]
    fn test_item_display() {
        let mut item = Item::new("Introduction to Algorithms", "Thomas Cormen", "9787111407010");
        assert_eq!(
            item.to_string(),
            "\"Introduction to Algorithms\" by Thomas Cormen (ISBN 9787111407010) - available"
        );

        item.checkout();
        assert!(item.to_string().ends_with("- checked out"));
    }

    #[test]
    fn test_item_try_new_rejects_bad_fields() {
        assert!(Item::try_new("Title", "Author", "X1").is_ok());
        assert!(Item::try_new("Title", "", "X1").is_err());
        assert!(Item::try_new("Title", "Author", "").is_err());
    }

    #[test]
    fn test_member_borrow_and_return() {
        let mut member = Member::new("Zhang San", "U001");
        let mut item = test_item("X1");

        assert!(member.borrow(&mut item));
        assert!(member.holds("X1"));
        assert!(!item.is_available());

        assert!(member.return_item(&mut item));
        assert!(!member.holds("X1"));
        assert_eq!(member.held_count(), 0);
        assert!(item.is_available());
    }

    #[test]
    fn test_member_borrow_of_checked_out_item_fails() {
        let mut first = Member::new("Zhang San", "U001");
        let mut second = Member::new("Li Si", "U002");
        let mut item = test_item("X1");

        assert!(first.borrow(&mut item));
        assert!(!second.borrow(&mut item));

        assert!(second.list_held_items().is_empty());
        assert_eq!(first.list_held_items(), vec!["X1".to_string()]);
    }

    #[test]
    fn test_member_cannot_return_what_it_does_not_hold() {
        let mut holder = Member::new("Zhang San", "U001");
        let mut other = Member::new("Li Si", "U002");
        let mut item = test_item("X1");
        holder.borrow(&mut item);

        assert!(!other.return_item(&mut item));
        assert!(!item.is_available());
        assert!(holder.holds("X1"));
    }

    #[test]
    fn test_held_items_keep_borrow_order() {
        let mut member = Member::new("Zhang San", "U001");
        let mut a = test_item("A");
        let mut b = test_item("B");
        let mut c = test_item("C");
        member.borrow(&mut a);
        member.borrow(&mut b);
        member.borrow(&mut c);

        member.return_item(&mut b);
        assert_eq!(member.held_items(), ["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_member_display() {
        let mut member = Member::new("Zhang San", "U001");
        assert_eq!(member.to_string(), "Zhang San (card U001), 0 item(s) held");

        member.borrow(&mut test_item("X1"));
        assert_eq!(member.to_string(), "Zhang San (card U001), 1 item(s) held");
    }

    #[test]
    fn test_member_serializes_held_ids() {
        let mut member = Member::new("Zhang San", "U001");
        member.borrow(&mut test_item("X1"));

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["card_id"], "U001");
        assert_eq!(json["held_items"], serde_json::json!(["X1"]));
    }

    #[test]
    fn test_item_status_serializes_snake_case() {
        let json = serde_json::to_string(&ItemStatus::CheckedOut).unwrap();
        assert_eq!(json, "\"checked_out\"");
    }
}
