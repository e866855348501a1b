//! Typed façades: thin, strongly-typed views over a generic [`crate::Node`].
//!
//! A façade introduces no storage of its own — every getter reads a
//! well-known property key off the underlying node via `get_first_or` /
//! `get_string_or` / `try_get_*`; every setter writes through `add_value` /
//! `add_string`. The decoder never enforces these keys; only the façades do,
//! the same way the teacher crate's `class/*.rs` modules interpret a generic
//! `ClassInfo` without owning any of its bytes.

use crate::identifier::NodeIdentifier;
use crate::node::Node;

mod animation;
mod blend_shape;
mod bone;
mod color;
mod constraint;
mod curve;
mod curve_mode_override;
mod file_reference;
mod hair;
mod ik_handle;
mod instance;
mod material;
pub(crate) mod mesh;
mod model;
mod notification_track;
mod skeleton;

pub use animation::Animation;
pub use blend_shape::BlendShape;
pub use bone::Bone;
pub use color::{Color, ColorSpace};
pub use constraint::Constraint;
pub use curve::Curve;
pub use curve_mode_override::CurveModeOverride;
pub use file_reference::FileReference;
pub use hair::Hair;
pub use ik_handle::IkHandle;
pub use instance::Instance;
pub use material::Material;
pub use mesh::Mesh;
pub use model::Model;
pub use notification_track::NotificationTrack;
pub use skeleton::Skeleton;

/// Implemented by every typed view over a generic node. `F::IDENTIFIER` is
/// the node identifier a node must carry for `F` to be a legal view onto it.
pub trait Face: Sized {
    const IDENTIFIER: NodeIdentifier;

    /// Builds a fresh, detached node with the right identifier.
    fn new() -> Self;

    /// Wraps an existing node as this façade, without checking its
    /// identifier. Callers that need the check should compare
    /// `node.identifier()` against `Self::IDENTIFIER.as_u32()` first, or go
    /// through [`crate::Node::first_child_of_kind`] and friends, which do.
    fn from_node(node: Node) -> Self;

    fn node(&self) -> &Node;

    fn into_node(self) -> Node;
}

impl<F: Face> From<F> for Node {
    fn from(face: F) -> Node {
        face.into_node()
    }
}

/// Generates the newtype, `Face` impl, `Deref<Target = Node>` and
/// `From<Node>` boilerplate shared by every façade.
macro_rules! define_face {
    ($(#[$meta:meta])* $name:ident, $identifier:expr) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Node);

        impl crate::face::Face for $name {
            const IDENTIFIER: NodeIdentifier = $identifier;

            fn new() -> Self {
                $name(Node::new(Self::IDENTIFIER.as_u32()))
            }

            fn from_node(node: Node) -> Self {
                $name(node)
            }

            fn node(&self) -> &Node {
                &self.0
            }

            fn into_node(self) -> Node {
                self.0
            }
        }

        impl From<Node> for $name {
            fn from(node: Node) -> Self {
                <Self as crate::face::Face>::from_node(node)
            }
        }

        impl std::ops::Deref for $name {
            type Target = Node;

            fn deref(&self) -> &Node {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as crate::face::Face>::new()
            }
        }
    };
}

pub(crate) use define_face;
