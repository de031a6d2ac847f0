use std::{cmp::Ordering, str::FromStr};

use crate::record::Record;

/// The record field a sequence is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Id,
    Name,
    BirthDate,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::BirthDate => "birth_date",
        }
    }
}

/// Unknown keys fall back to `Id`.
impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        match key {
            "name" => SortKey::Name,
            "birth_date" | "birthDate" => SortKey::BirthDate,
            _ => SortKey::Id,
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(key))
    }
}

pub type Comparator<R> = fn(&R, &R) -> Ordering;

pub fn comparator<R: Record>(key: SortKey) -> Comparator<R> {
    match key {
        SortKey::Id => by_id::<R>,
        SortKey::Name => by_name::<R>,
        SortKey::BirthDate => by_birth_date::<R>,
    }
}

// Ordinal, so "0100" sorts before "100".
fn by_id<R: Record>(a: &R, b: &R) -> Ordering {
    a.id().cmp(b.id())
}

fn by_name<R: Record>(a: &R, b: &R) -> Ordering {
    let a = a.name().chars().flat_map(char::to_lowercase);
    let b = b.name().chars().flat_map(char::to_lowercase);
    a.cmp(b)
}

fn by_birth_date<R: Record>(a: &R, b: &R) -> Ordering {
    a.birth_date().cmp(&b.birth_date())
}
