//! Catalog boundary.
//!
//! Product listings are supplied by an external catalog; this module only
//! turns them into cart line items.

mod listing;

pub use listing::ProductListing;
