//! The generic tree node every typed façade is a view over.
//!
//! A node is shared-owned (`Rc<RefCell<..>>`, following the same pattern the
//! teacher crate uses for its own top-level `Asset`) rather than arena-indexed,
//! so that `child.parent()`, `node.add_child(other)` and friends read as plain
//! method calls instead of threading an arena handle through every façade
//! call site. See `DESIGN.md` for the tradeoffs against the alternative
//! (stable-index arena) design sketched in the source notes.

use crate::error::Error;
use crate::face::Face;
use crate::property::{Property, PropertyKind, PropertyValue};

use linked_hash_map::LinkedHashMap;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct NodeData {
    identifier: u32,
    hash: u64,
    properties: LinkedHashMap<String, Property>,
    children: Vec<Node>,
    parent: Weak<RefCell<NodeData>>,
}

/// A generic, hashable, property-bearing tree node. Cloning a `Node` clones
/// the handle, not the data — two clones refer to the same underlying node,
/// the same way two `Rc` clones do.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    /// Builds a detached node with no properties and no children.
    pub fn new(identifier: u32) -> Self {
        Self::with_hash(identifier, 0)
    }

    pub fn with_hash(identifier: u32, hash: u64) -> Self {
        Node(Rc::new(RefCell::new(NodeData {
            identifier,
            hash,
            properties: LinkedHashMap::new(),
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    /// Builds a detached node seeded with properties (in the given order)
    /// and children (reparented onto this node, in the given order).
    pub fn with_content(
        identifier: u32,
        hash: u64,
        properties: LinkedHashMap<String, Property>,
        children: Vec<Node>,
    ) -> Self {
        let node = Self::with_hash(identifier, hash);
        node.0.borrow_mut().properties = properties;
        for child in children {
            node.add_child(child);
        }
        node
    }

    /// Shallow-clones `source`: the copy gets its own deep-cloned property
    /// map (this implementation does not share mutable property storage
    /// between the two nodes — see `DESIGN.md`'s resolution of the
    /// constructor's open question) and `source`'s children are *moved*
    /// onto the copy, leaving `source` with no children, matching the
    /// literal "re-parents the source's children under the copy" behavior
    /// called out in the source design notes.
    pub fn clone_shallow(source: &Node) -> Node {
        let (identifier, hash, properties) = {
            let data = source.0.borrow();
            (data.identifier, data.hash, data.properties.clone())
        };
        let copy = Node::with_hash(identifier, hash);
        copy.0.borrow_mut().properties = properties;

        for child in source.children() {
            copy.add_child(child);
        }

        copy
    }

    pub fn identifier(&self) -> u32 {
        self.0.borrow().identifier
    }

    pub fn set_identifier(&self, identifier: u32) {
        self.0.borrow_mut().identifier = identifier;
    }

    pub fn hash(&self) -> u64 {
        self.0.borrow().hash
    }

    pub fn set_hash(&self, hash: u64) {
        self.0.borrow_mut().hash = hash;
    }

    // ---- tree navigation -------------------------------------------------

    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn child_count_with_identifier(&self, identifier: u32) -> usize {
        self.0
            .borrow()
            .children
            .iter()
            .filter(|c| c.identifier() == identifier)
            .count()
    }

    pub fn child_count_of_kind<F: Face>(&self) -> usize {
        self.child_count_with_identifier(F::IDENTIFIER.as_u32())
    }

    /// Appends `child`, reparenting it (detaching it from its previous
    /// parent, if any) atomically.
    pub fn add_child<T: Into<Node>>(&self, child: T) -> Node {
        let child = child.into();
        child.reparent(Some(self.clone()));
        child
    }

    /// Builds a fresh façade of kind `F` and appends its underlying node.
    pub fn add_new<F: Face>(&self) -> F {
        let face = F::new();
        self.add_child(face.node().clone());
        face
    }

    fn reparent(&self, new_parent: Option<Node>) {
        if let Some(old_parent) = self.parent() {
            old_parent
                .0
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }

        match new_parent {
            Some(parent) => {
                self.0.borrow_mut().parent = Rc::downgrade(&parent.0);
                parent.0.borrow_mut().children.push(self.clone());
            }
            None => {
                self.0.borrow_mut().parent = Weak::new();
            }
        }
    }

    pub fn first_child(&self) -> Result<Node, Error> {
        self.try_first_child()
            .ok_or(Error::IndexOutOfRange { index: 0, len: 0 })
    }

    pub fn try_first_child(&self) -> Option<Node> {
        self.0.borrow().children.first().cloned()
    }

    pub fn first_child_with_identifier(&self, identifier: u32) -> Result<Node, Error> {
        self.try_first_child_with_identifier(identifier)
            .ok_or(Error::IndexOutOfRange { index: 0, len: 0 })
    }

    pub fn try_first_child_with_identifier(&self, identifier: u32) -> Option<Node> {
        self.0
            .borrow()
            .children
            .iter()
            .find(|c| c.identifier() == identifier)
            .cloned()
    }

    pub fn first_child_of_kind<F: Face>(&self) -> Result<F, Error> {
        self.first_child_with_identifier(F::IDENTIFIER.as_u32())
            .map(F::from_node)
    }

    pub fn try_first_child_of_kind<F: Face>(&self) -> Option<F> {
        self.try_first_child_with_identifier(F::IDENTIFIER.as_u32())
            .map(F::from_node)
    }

    pub fn child_at(&self, index: usize) -> Result<Node, Error> {
        let children = self.0.borrow();
        children
            .children
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: children.children.len(),
            })
    }

    pub fn child_at_with_identifier(&self, identifier: u32, index: usize) -> Result<Node, Error> {
        let child = self.child_at(index)?;
        if child.identifier() != identifier {
            return Err(Error::TypeMismatch {
                expected: identifier,
                actual: child.identifier(),
            });
        }
        Ok(child)
    }

    pub fn child_of_kind_at<F: Face>(&self, index: usize) -> Result<F, Error> {
        self.child_at_with_identifier(F::IDENTIFIER.as_u32(), index)
            .map(F::from_node)
    }

    /// Linear scan for a child with the given hash. Hash `0` always misses.
    pub fn try_child_by_hash(&self, hash: u64) -> Option<Node> {
        if hash == 0 {
            return None;
        }
        self.0
            .borrow()
            .children
            .iter()
            .find(|c| c.hash() == hash)
            .cloned()
    }

    pub fn try_child_by_hash_of_kind<F: Face>(&self, hash: u64) -> Option<F> {
        if hash == 0 {
            return None;
        }
        self.0
            .borrow()
            .children
            .iter()
            .find(|c| c.hash() == hash && c.identifier() == F::IDENTIFIER.as_u32())
            .cloned()
            .map(F::from_node)
    }

    pub fn children_of_kind<F: Face>(&self) -> Vec<F> {
        self.iterate_children_of_kind::<F>().collect()
    }

    pub fn iterate_children_of_kind<F: Face>(&self) -> impl Iterator<Item = F> {
        let identifier = F::IDENTIFIER.as_u32();
        self.children()
            .into_iter()
            .filter(move |c| c.identifier() == identifier)
            .map(F::from_node)
    }

    // ---- property access ---------------------------------------------------

    pub fn get_string(&self, key: &str) -> Result<String, Error> {
        match self.get_property(key)? {
            Property::String(s) => Ok(s),
            other => Err(Error::PropertyKindMismatch {
                key: key.to_string(),
                expected: PropertyKind::String.name(),
                actual: other.kind().name(),
            }),
        }
    }

    pub fn get_string_or(&self, key: &str, default: impl Into<String>) -> String {
        self.get_string(key).unwrap_or_else(|_| default.into())
    }

    pub fn get_first<T: PropertyValue>(&self, key: &str) -> Result<T, Error> {
        let property = self.get_property(key)?;
        let values = T::unwrap(&property).ok_or_else(|| Error::PropertyKindMismatch {
            key: key.to_string(),
            expected: T::KIND.name(),
            actual: property.kind().name(),
        })?;
        values
            .first()
            .cloned()
            .ok_or_else(|| Error::EmptyArray(key.to_string()))
    }

    pub fn get_first_or<T: PropertyValue>(&self, key: &str, default: T) -> T {
        self.get_first(key).unwrap_or(default)
    }

    /// Reads a `u8`/`u16`/`u32`/`u64` array property, widening its first
    /// element to `u64`, as long as its element width (in bits) does not
    /// exceed `max_bits`. Falls back to `default` on any failure, including
    /// a property whose element width exceeds `max_bits`.
    pub fn get_first_integer_or(&self, key: &str, default: u64, max_bits: u32) -> u64 {
        let Some(property) = self.try_get_property(key) else {
            return default;
        };
        let Some(bits) = property.kind().integer_bits() else {
            return default;
        };
        if bits > max_bits {
            return default;
        }

        match property {
            Property::Byte(v) => v.first().map(|&v| u64::from(v)),
            Property::Short(v) => v.first().map(|&v| u64::from(v)),
            Property::Integer32(v) => v.first().map(|&v| u64::from(v)),
            Property::Integer64(v) => v.first().copied(),
            _ => None,
        }
        .unwrap_or(default)
    }

    pub fn get_array<T: PropertyValue>(&self, key: &str) -> Result<Vec<T>, Error> {
        let property = self.get_property(key)?;
        T::unwrap(&property)
            .map(<[T]>::to_vec)
            .ok_or_else(|| Error::PropertyKindMismatch {
                key: key.to_string(),
                expected: T::KIND.name(),
                actual: property.kind().name(),
            })
    }

    pub fn try_get_array<T: PropertyValue>(&self, key: &str) -> Option<Vec<T>> {
        self.get_array(key).ok()
    }

    pub fn get_property(&self, key: &str) -> Result<Property, Error> {
        self.try_get_property(key)
            .ok_or_else(|| Error::PropertyMissing(key.to_string()))
    }

    pub fn try_get_property(&self, key: &str) -> Option<Property> {
        self.0.borrow().properties.get(key).cloned()
    }

    /// Number of properties on this node (not recursive).
    pub fn property_count(&self) -> usize {
        self.0.borrow().properties.len()
    }

    /// Properties in insertion order, the order that must round-trip to the
    /// wire unchanged.
    pub fn properties(&self) -> Vec<(String, Property)> {
        self.0
            .borrow()
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Installs (overwriting any existing value under `key`) and returns the
    /// property that was just set.
    pub fn add_string(&self, key: impl Into<String>, value: impl Into<String>) -> Property {
        self.add_property(key, Property::from_string(value))
    }

    pub fn add_value<T: PropertyValue>(&self, key: impl Into<String>, value: T) -> Property {
        self.add_property(key, Property::from_value(value))
    }

    pub fn add_array<T: PropertyValue>(&self, key: impl Into<String>, values: Vec<T>) -> Property {
        self.add_property(key, Property::from_values(values))
    }

    /// Type-erased install: overwrites whatever property (if any) currently
    /// lives under `key` and returns it.
    pub fn set_property(&self, key: impl Into<String>, property: Property) -> Property {
        self.add_property(key, property)
    }

    fn add_property(&self, key: impl Into<String>, property: Property) -> Property {
        let key = key.into();
        self.0
            .borrow_mut()
            .properties
            .insert(key, property.clone());
        property
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("Node")
            .field("identifier", &data.identifier)
            .field("hash", &data.hash)
            .field("properties", &data.properties.len())
            .field("children", &data.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::NodeIdentifier;

    #[test]
    fn reparent_detaches_from_old_parent() {
        let a = Node::new(NodeIdentifier::Skeleton.as_u32());
        let b = Node::new(NodeIdentifier::Skeleton.as_u32());
        let x = Node::new(NodeIdentifier::Bone.as_u32());

        a.add_child(x.clone());
        assert_eq!(a.child_count(), 1);

        b.add_child(x.clone());
        assert_eq!(a.child_count(), 0);
        assert_eq!(b.child_count(), 1);
        assert_eq!(x.parent(), Some(b.clone()));
        assert_eq!(b.children()[0], x);
    }

    #[test]
    fn hash_zero_never_matches() {
        let parent = Node::new(NodeIdentifier::Skeleton.as_u32());
        let child = Node::with_hash(NodeIdentifier::Bone.as_u32(), 0);
        parent.add_child(child);

        assert!(parent.try_child_by_hash(0).is_none());
    }

    #[test]
    fn properties_preserve_insertion_order() {
        let node = Node::new(NodeIdentifier::Bone.as_u32());
        node.add_string("n", "root");
        node.add_value::<u32>("p", u32::MAX);
        node.add_value::<glam::Vec3>("lp", glam::Vec3::ZERO);

        let keys: Vec<_> = node.properties().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["n", "p", "lp"]);
    }

    #[test]
    fn get_first_or_never_fails() {
        let node = Node::new(NodeIdentifier::Bone.as_u32());
        assert_eq!(node.get_first_or::<u32>("missing", 7), 7);

        node.add_string("n", "root");
        assert_eq!(node.get_first_or::<u32>("n", 7), 7); // kind mismatch
    }

    #[test]
    fn integer_widening_respects_max_bits() {
        let node = Node::new(NodeIdentifier::Mesh.as_u32());
        node.add_array::<u8>("f", vec![1, 2, 3]);
        assert_eq!(node.get_first_integer_or("f", 0, 32), 1);

        node.add_array::<u64>("f", vec![1]);
        assert_eq!(node.get_first_integer_or("f", 0, 32), 0);
    }

    #[test]
    fn clone_shallow_moves_children_and_deep_clones_properties() {
        let source = Node::new(NodeIdentifier::Skeleton.as_u32());
        source.add_string("n", "root");
        let child = Node::new(NodeIdentifier::Bone.as_u32());
        source.add_child(child.clone());

        let copy = Node::clone_shallow(&source);

        assert_eq!(source.child_count(), 0);
        assert_eq!(copy.child_count(), 1);
        assert_eq!(copy.children()[0], child);
        assert_eq!(copy.get_string("n").unwrap(), "root");

        copy.add_string("n", "changed");
        assert_eq!(source.get_string("n").unwrap(), "root");
    }
}
