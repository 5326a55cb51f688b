//! Service layer for the contact book.
//! - `db::contact_store` owns every query against the `contact` table.
//! - `contact` wraps the store behind a repository trait and applies query policies.

pub mod errors;
pub mod pagination;
pub mod db;
pub mod contact;
#[cfg(test)]
pub mod test_support;
