//! The static rule table.
//!
//! One module per field family. Within a field, table order is priority
//! order: the most specific rule comes first and the first rule that yields
//! evidence wins. Rules match against the normalized corpus, which is already
//! lowercase, so patterns and phrases are written in lowercase.

use crate::Rule;

pub mod bucket;
pub mod cutouts;
pub mod door_type;
pub mod handle;
pub mod height;
pub mod helpers;
pub mod thickness;

#[cfg(test)]
mod tests;

/// The full rule table, grouped by field.
pub fn get() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(door_type::get());
    rules.extend(height::get());
    rules.extend(bucket::get());
    rules.extend(handle::get());
    rules.extend(cutouts::get());
    rules.extend(thickness::get());
    rules
}
