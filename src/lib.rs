//! A library for reading and writing files in the **Cast** binary container
//! format: a hierarchical, typed, property-bearing node tree used to
//! describe 3D models, skeletons, animations, materials and related assets.
//!
//! The two entry points most callers need are [`load`]/[`save`] (and their
//! byte-buffer counterparts [`load_bytes`]/[`save_bytes`]), plus the typed
//! façades under [`face`] for walking a loaded [`Document`] without hand
//! -rolling property-key lookups.

pub mod error;
pub mod face;
pub mod hash;
pub mod identifier;
pub mod node;
pub mod property;
pub mod skeleton_transform;

mod codec;
mod document;
mod traits;

pub use document::{load, load_bytes, save, save_bytes, Document};
pub use error::{Error, Result};
pub use hash::{fnv1a, hash_name};
pub use identifier::NodeIdentifier;
pub use node::Node;
pub use property::{Property, PropertyKind, PropertyValue};

/// Brings up an `env_logger` subscriber once per test binary, the same way
/// the teacher crate's `#[ctor::ctor]`-gated `init_test_logger!` does at the
/// top of its own test modules. `try_init` makes repeated calls harmless, so
/// this runs regardless of which test happens to execute first.
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
