//! Implementation of the `#[derive(Queryable)]` macro.

mod attrs;
mod derive;

pub use derive::queryable_derive_impl;
