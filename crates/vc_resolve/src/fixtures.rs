//! Values shared by the unit tests.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use vc_reflect::derive::Reflect;

pub(crate) const FIRST: &str = "first person name";
pub(crate) const SECOND: &str = "second person name";

#[derive(Reflect, Clone, Default)]
pub(crate) struct Person {
    pub name: Option<String>,
    pub parent: Option<Box<Person>>,
    pub parents: Vec<Box<Person>>,
}

fn named(name: &str) -> Person {
    Person {
        name: Some(name.into()),
        ..Person::default()
    }
}

fn with_parent(name: &str, parent: &str) -> Person {
    Person {
        parent: Some(Box::new(named(parent))),
        ..named(name)
    }
}

/// Three generations, every `parents` list has one entry.
pub(crate) fn family() -> Person {
    let mut elder = with_parent(SECOND, FIRST);
    elder.parents = vec![Box::new(with_parent(SECOND, FIRST))];

    Person {
        parents: vec![Box::new(elder)],
        ..with_parent(FIRST, SECOND)
    }
}
