//! Name → phone numbers, with substring lookup on names.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

#[derive(Clone, Debug, Default)]
pub struct ContactBook {
    contacts: BTreeMap<String, Vec<String>>,
}

/// Result of [`ContactBook::lookup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Exact name hit: that contact's numbers, in insertion order.
    Phones(&'a [String]),
    /// No exact hit: every name containing the query.
    Names(Vec<&'a str>),
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty contact unless `name` already exists.
    pub fn add_contact(&mut self, name: &str) {
        self.contacts.entry(name.to_string()).or_default();
    }

    pub fn add_contact_with_phone(&mut self, name: &str, phone: &str) {
        self.add_contact(name);
        self.add_phone(name, phone);
    }

    /// Appends `phone` to an existing contact. Unknown names and duplicate
    /// numbers are ignored.
    pub fn add_phone(&mut self, name: &str, phone: &str) {
        if let Some(phones) = self.contacts.get_mut(name) {
            if !phones.iter().any(|p| p == phone) {
                phones.push(phone.to_string());
            }
        }
    }

    pub fn lookup(&self, query: &str) -> Option<Lookup<'_>> {
        if let Some(phones) = self.contacts.get(query) {
            return Some(Lookup::Phones(phones));
        }
        let names: Vec<&str> = self
            .contacts
            .keys()
            .filter(|name| name.contains(query))
            .map(String::as_str)
            .collect();
        if names.is_empty() {
            None
        } else {
            Some(Lookup::Names(names))
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl fmt::Display for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("contacts: {")?;
        for (i, (name, phones)) in self.contacts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}=[{}]", phones.join(", "))?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Phones(phones) => write!(f, "[{}]", phones.join(", ")),
            Lookup::Names(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

/// Scripted walk through the contact book, printing expectation and result.
pub fn run_demo<W: Write>(mut out: W) -> io::Result<()> {
    let mut book = ContactBook::new();
    writeln!(out, "|======\n| Contact book\n|======")?;

    book.add_contact("Vladimir");
    writeln!(out, "--> expecting empty contact Vladimir\n{book}")?;
    book.add_contact("Vladimir");
    writeln!(out, "--> adding Vladimir again changes nothing\n{book}")?;

    book.add_contact_with_phone("Vladimir", "89123334455");
    book.add_phone("Vladimir", "89123334455");
    writeln!(out, "--> expecting Vladimir with 89123334455 once\n{book}")?;

    book.add_phone("Vladimir", "+79119998877");
    book.add_contact_with_phone("Valeriya", "89115556677");
    writeln!(out, "--> expecting Valeriya and Vladimir with two numbers\n{book}")?;

    book.add_contact_with_phone("Vladislav", "88005553535");
    for query in ["Valeriya", "Vladimir", "V", "Vlad", "Egor"] {
        let found = book
            .lookup(query)
            .map_or_else(|| "nothing".to_string(), |l| l.to_string());
        writeln!(out, "--> lookup {query:?}: {found}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> ContactBook {
        let mut book = ContactBook::new();
        book.add_contact_with_phone("Vladimir", "89123334455");
        book.add_phone("Vladimir", "+79119998877");
        book.add_contact_with_phone("Valeriya", "89115556677");
        book.add_contact_with_phone("Vladislav", "88005553535");
        book
    }

    #[test]
    fn duplicate_contacts_and_numbers_are_ignored() {
        let mut book = ContactBook::new();
        book.add_contact("Vladimir");
        book.add_contact("Vladimir");
        book.add_contact_with_phone("Vladimir", "89123334455");
        book.add_phone("Vladimir", "89123334455");
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.lookup("Vladimir"),
            Some(Lookup::Phones(&["89123334455".to_string()]))
        );
    }

    #[test]
    fn phone_for_unknown_name_is_dropped() {
        let mut book = ContactBook::new();
        book.add_phone("Egor", "123");
        assert!(book.is_empty());
    }

    #[test]
    fn exact_hit_returns_numbers_in_order() {
        let book = sample_book();
        let Some(Lookup::Phones(phones)) = book.lookup("Vladimir") else {
            panic!("expected phones");
        };
        assert_eq!(phones, ["89123334455", "+79119998877"]);
    }

    #[test]
    fn partial_hit_returns_matching_names() {
        let book = sample_book();
        assert_eq!(
            book.lookup("V"),
            Some(Lookup::Names(vec!["Valeriya", "Vladimir", "Vladislav"]))
        );
        assert_eq!(
            book.lookup("Vlad"),
            Some(Lookup::Names(vec!["Vladimir", "Vladislav"]))
        );
        assert_eq!(book.lookup("mir"), Some(Lookup::Names(vec!["Vladimir"])));
        assert_eq!(book.lookup("Egor"), None);
    }

    #[test]
    fn display() {
        let book = sample_book();
        assert_eq!(
            book.to_string(),
            "contacts: {Valeriya=[89115556677], Vladimir=[89123334455, +79119998877], Vladislav=[88005553535]}"
        );
    }

    #[test]
    fn demo_runs() {
        let mut buf = Vec::new();
        run_demo(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("--> lookup \"Egor\": nothing"));
        assert!(text.contains("--> lookup \"Vlad\": [Vladimir, Vladislav]"));
    }
}
