//! Boxed-double access for the OCaml runtime's heap values.
//!
//! The host inlines `Double_val`, `Store_double_val`, `Double_field` and
//! `Store_double_field` as macros. This library gives each one a linkable
//! symbol (see [`symbols`]) so native code can call them as plain functions,
//! and offers checked views for Rust callers that want tag and bounds
//! validation.
//!
//! Every layout assumption lives in [`layout`].

#[macro_use]
pub mod aux;
pub mod alloc;
pub mod error;
#[macro_use]
pub mod layout;
pub mod panic;
pub mod symbols;
pub mod types;

pub use alloc::OwnedBlock;
pub use error::Error;
pub use error::Result;
pub use layout::Value;
pub use types::*;
