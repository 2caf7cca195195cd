//! Field projection of member profiles

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;

use crate::github::User;

/// Selected fields of one member, in requested order
///
/// A field requested twice appears twice; positional formats repeat the
/// column, keyed formats keep the first occurrence only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    values: Vec<(String, String)>,
}

impl MemberRecord {
    pub fn new(values: Vec<(String, String)>) -> Self {
        Self { values }
    }

    /// Values in requested order, duplicates included
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
impl MemberRecord {
    /// Value of the first occurrence of a field
    fn get(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

impl Serialize for MemberRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seen = HashSet::new();
        let unique: Vec<_> = self
            .values
            .iter()
            .filter(|(name, _)| seen.insert(name.as_str()))
            .collect();

        let mut map = serializer.serialize_map(Some(unique.len()))?;
        for (name, value) in unique {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Project the requested fields of a profile
///
/// Unknown field names and null values both become empty strings; this
/// never fails.
pub fn project(user: &User, field_names: &[String]) -> MemberRecord {
    let values = field_names
        .iter()
        .map(|field| (field.clone(), user.field(field).unwrap_or_default()))
        .collect();
    MemberRecord::new(values)
}
