//! Person records used by the demo binary.
//!
//! [`ByAge`] is the reusable-ordering-type flavour of sorting; the inline flavour is just
//! [`crate::sort_slice_by`] with a closure over [`Person::age`].

use crate::core::Sortable;
use std::fmt;

/// A named person with an age in years.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Creates a person from a name and an age.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.age)
    }
}

/// Orders people by ascending age.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByAge(pub Vec<Person>);

impl Sortable for ByAge {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].age < self.0[j].age
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.as_mut_slice().swap(i, j);
    }
}

/// Displays a list of people as `[Name: age Name: age ...]`.
pub struct Roster<'a>(pub &'a [Person]);

impl fmt::Display for Roster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, person) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{person}")?;
        }
        f.write_str("]")
    }
}

/// The four people the demo binary starts from, in their original order.
pub fn sample() -> Vec<Person> {
    vec![
        Person::new("Bob", 31),
        Person::new("John", 42),
        Person::new("Michael", 17),
        Person::new("Jenny", 26),
    ]
}
