//! Checkout hook.
//!
//! Checkout is not implemented; requesting it yields an explicit
//! placeholder outcome rather than an error.

mod outcome;

pub use outcome::CheckoutOutcome;
