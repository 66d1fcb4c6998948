//! # Demonstration Script
//!
//! The scripted lending run: three books, three registrations (one card id
//! collision), three borrows (one on a checked-out book), two returns (one by
//! a member who never held the book).
//!
//! Listings go to the supplied writer; per-operation narration goes through
//! `tracing` from inside folio-core.

use std::io::{self, Write};

use folio_core::validation::validate_isbn13;
use folio_core::{Catalog, CoreError, Item, Member, ValidationError};
use tracing::info;

/// (title, author, ISBN-13)
pub const BOOKS: &[(&str, &str, &str)] = &[
    ("Python Crash Course", "Eric Matthes", "9787115428028"),
    ("Introduction to Algorithms", "Thomas H. Cormen", "9787111407010"),
    (
        "Data Structures and Algorithm Analysis",
        "Mark Allen Weiss",
        "9787111641230",
    ),
];

/// (name, card id). The third entry reuses the first card id.
pub const MEMBERS: &[(&str, &str)] = &[
    ("Zhang San", "U001"),
    ("Li Si", "U002"),
    ("Wang Wu", "U001"),
];

/// (card id, ISBN). The second request targets a book already out.
pub const BORROWS: &[(&str, &str)] = &[
    ("U001", "9787115428028"),
    ("U002", "9787115428028"),
    ("U002", "9787111407010"),
];

/// (card id, ISBN). The second request is by a member who never held it.
pub const RETURNS: &[(&str, &str)] = &[("U001", "9787115428028"), ("U002", "9787115428028")];

/// Errors that stop the script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to write listing: {0}")]
    Io(#[from] io::Error),

    #[error("bad seed data: {0}")]
    Seed(#[from] CoreError),
}

impl From<ValidationError> for ScriptError {
    fn from(err: ValidationError) -> Self {
        ScriptError::Seed(err.into())
    }
}

/// Per-step outcomes of a run, in script order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    pub added: Vec<bool>,
    pub registered: Vec<bool>,
    pub borrowed: Vec<bool>,
    pub returned: Vec<bool>,
}

/// Runs the whole script against `catalog`, writing listings to `out`.
pub fn run<W: Write>(catalog: &mut Catalog, out: &mut W) -> Result<ScriptReport, ScriptError> {
    let mut report = ScriptReport::default();

    for (title, author, isbn) in BOOKS {
        validate_isbn13(isbn)?;
        let item = Item::try_new(*title, *author, *isbn)?;
        report.added.push(catalog.add_item(item));
    }

    for (name, card_id) in MEMBERS {
        let member = Member::try_new(*name, *card_id)?;
        report.registered.push(catalog.register_member(member));
    }

    write_items(catalog, out)?;
    write_members(catalog, out)?;

    for (card_id, isbn) in BORROWS {
        report.borrowed.push(catalog.request_borrow(card_id, isbn));
    }

    // Holdings of the first two registrations (the third was rejected)
    for (_, card_id) in MEMBERS.iter().take(2) {
        write_held_items(catalog, card_id, out)?;
    }

    for (card_id, isbn) in RETURNS {
        report.returned.push(catalog.request_return(card_id, isbn));
    }

    write_items(catalog, out)?;

    info!(
        items = catalog.item_count(),
        members = catalog.member_count(),
        events = catalog.history().len(),
        "script finished"
    );
    Ok(report)
}

/// Writes every item with its status.
pub fn write_items<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    let items = catalog.list_all_items();
    if items.is_empty() {
        return writeln!(out, "\n{} has no items", catalog.name);
    }

    writeln!(out, "\n{} items:", catalog.name)?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

/// Writes every registered member.
pub fn write_members<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    let members = catalog.list_all_members();
    if members.is_empty() {
        return writeln!(out, "\n{} has no registered members", catalog.name);
    }

    writeln!(out, "\n{} members:", catalog.name)?;
    for member in members {
        writeln!(out, "- {member}")?;
    }
    Ok(())
}

/// Writes the items held by `card_id`. Unknown members are skipped.
pub fn write_held_items<W: Write>(catalog: &Catalog, card_id: &str, out: &mut W) -> io::Result<()> {
    let (Some(member), Some(items)) = (
        catalog.find_member_by_card_id(card_id),
        catalog.held_items(card_id),
    ) else {
        return Ok(());
    };

    if items.is_empty() {
        return writeln!(out, "\n{} holds no items", member.name);
    }

    writeln!(out, "\n{} holds:", member.name)?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ItemStatus;

    fn run_to_string() -> (Catalog, ScriptReport, String) {
        let mut catalog = Catalog::new("City Library");
        let mut out = Vec::new();
        let report = run(&mut catalog, &mut out).unwrap();
        (catalog, report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_outcomes() {
        let (_, report, _) = run_to_string();
        assert_eq!(report.added, vec![true, true, true]);
        assert_eq!(report.registered, vec![true, true, false]);
        assert_eq!(report.borrowed, vec![true, false, true]);
        assert_eq!(report.returned, vec![true, false]);
    }

    #[test]
    fn test_final_catalog_state() {
        let (catalog, _, _) = run_to_string();

        assert_eq!(catalog.member_count(), 2);
        let statuses: Vec<ItemStatus> = catalog
            .list_all_items()
            .iter()
            .map(|item| item.status())
            .collect();
        assert_eq!(
            statuses,
            vec![
                ItemStatus::Available,
                ItemStatus::CheckedOut,
                ItemStatus::Available
            ]
        );
        assert_eq!(catalog.holder_of("9787111407010").unwrap().name, "Li Si");
    }

    #[test]
    fn test_listing_text() {
        let (_, _, text) = run_to_string();

        assert!(text.contains("City Library members:\n- Zhang San (card U001), 0 item(s) held\n- Li Si (card U002), 0 item(s) held\n"));
        assert!(text.contains("Zhang San holds:\n- \"Python Crash Course\" by Eric Matthes (ISBN 9787115428028) - checked out\n"));
        assert!(text.contains("Li Si holds:\n- \"Introduction to Algorithms\""));
        assert!(!text.contains("Wang Wu"));
    }

    #[test]
    fn test_empty_listings() {
        let catalog = Catalog::new("Empty Branch");
        let mut out = Vec::new();
        write_items(&catalog, &mut out).unwrap();
        write_members(&catalog, &mut out).unwrap();
        write_held_items(&catalog, "U001", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\nEmpty Branch has no items\n\nEmpty Branch has no registered members\n"
        );
    }
}
