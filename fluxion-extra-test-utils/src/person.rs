// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

#[must_use]
pub fn person_bob() -> Person {
    Person::new("bob", 18)
}

#[must_use]
pub fn person_grandpa() -> Person {
    Person::new("grandpa", 80)
}

#[must_use]
pub fn person_baby() -> Person {
    Person::new("baby", 1)
}

/// bob (18), grandpa (80) and baby (1), in that order.
#[must_use]
pub fn people() -> Vec<Person> {
    vec![person_bob(), person_grandpa(), person_baby()]
}
