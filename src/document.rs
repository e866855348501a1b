//! The top-level container: an ordered list of root nodes, and the
//! `load`/`save` entry points over a file path, an arbitrary byte stream, or
//! a lower-level `Read`/`Write` handle.

use crate::codec;
use crate::error::Result;
use crate::node::Node;

use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

/// An ordered sequence of root [`Node`]s with no properties and no parent of
/// their own — the thing a `.cast` file actually holds.
#[derive(Debug, Clone, Default)]
pub struct Document {
    roots: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn add_root(&mut self, root: Node) -> &mut Self {
        self.roots.push(root);
        self
    }

    /// Reads a document from an arbitrary `Read + Seek` stream. Aborts on
    /// the first failure; no partial document is ever returned.
    pub fn decode<R: Read + Seek>(reader: &mut R) -> Result<Document> {
        let root_count = codec::read_file_header(reader)?;
        let mut roots = Vec::with_capacity(root_count.max(0) as usize);
        for _ in 0..root_count.max(0) {
            roots.push(codec::read_node(reader)?);
        }
        Ok(Document { roots })
    }

    /// Writes this document to an arbitrary `Write` stream.
    ///
    /// Property order within a node, child order within a node, and root
    /// order within the document are all preserved verbatim — there is no
    /// implicit sorting anywhere in the encoder.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        codec::write_file_header(writer, i32::try_from(self.roots.len())?)?;
        for root in &self.roots {
            codec::write_node(writer, root)?;
        }
        Ok(())
    }
}

impl From<Node> for Document {
    /// Wraps a single node into a synthetic one-root document, the same
    /// shortcut [`save`] and [`Document::save`] take when handed a bare
    /// `Node` instead of a `Document`.
    fn from(root: Node) -> Self {
        Document { roots: vec![root] }
    }
}

/// Loads a document from an in-memory byte buffer.
pub fn load_bytes(bytes: &[u8]) -> Result<Document> {
    let mut cursor = Cursor::new(bytes);
    Document::decode(&mut cursor)
}

/// Loads a document from a file path: reads the whole file into memory and
/// hands it to [`Document::decode`] through a [`Cursor`], the same way the
/// teacher's `Asset::read` takes a `Cursor<Vec<u8>>` rather than seeking
/// directly on the open file handle.
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    let mut file = File::open(path).map_err(crate::error::Error::from_read)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(crate::error::Error::from_read)?;
    load_bytes(&bytes)
}

/// Encodes `document` (or a bare [`Node`], via [`Document::from`]) into a
/// fresh `Vec<u8>`.
pub fn save_bytes(document: impl Into<Document>) -> Result<Vec<u8>> {
    let document = document.into();
    let mut bytes = Vec::new();
    document.encode(&mut bytes)?;
    Ok(bytes)
}

/// Encodes `document` (or a bare [`Node`]) to a file path, truncating any
/// existing file at that path.
pub fn save(path: impl AsRef<Path>, document: impl Into<Document>) -> Result<()> {
    let document = document.into();
    let file = File::create(path).map_err(crate::error::Error::from_read)?;
    let mut writer = BufWriter::new(file);
    document.encode(&mut writer)?;
    writer.flush().map_err(crate::error::Error::from_read)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::NodeIdentifier;

    #[test]
    fn empty_document_round_trips_to_the_bare_header() {
        let document = Document::new();
        let bytes = save_bytes(document).unwrap();
        assert_eq!(
            bytes,
            vec![0x63, 0x61, 0x73, 0x74, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );

        let loaded = load_bytes(&bytes).unwrap();
        assert_eq!(loaded.root_count(), 0);
    }

    #[test]
    fn single_root_node_round_trips() {
        let root = Node::new(NodeIdentifier::Root.as_u32());
        let model = root.add_child(Node::new(NodeIdentifier::Model.as_u32()));
        model.add_string("n", "scene");

        let bytes = save_bytes(root).unwrap();
        let loaded = load_bytes(&bytes).unwrap();

        assert_eq!(loaded.root_count(), 1);
        let loaded_root = &loaded.roots()[0];
        assert_eq!(loaded_root.identifier(), NodeIdentifier::Root.as_u32());
        assert_eq!(loaded_root.child_count(), 1);
        assert_eq!(loaded_root.children()[0].get_string("n").unwrap(), "scene");
    }

    #[test]
    fn re_encoding_an_unmodified_document_is_byte_identical() {
        let root = Node::new(NodeIdentifier::Skeleton.as_u32());
        for i in 0..16u32 {
            let bone = root.add_new::<crate::face::Bone>();
            bone.set_name(format!("bone_{i}"));
            bone.set_parent_index(if i == 0 { u32::MAX } else { i - 1 });
        }

        let first = save_bytes(root.clone()).unwrap();
        let second = save_bytes(root).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_node_identifiers_are_preserved() {
        let root = Node::new(0x4545_4545);
        root.add_value::<u32>("x", 7);

        let bytes = save_bytes(root).unwrap();
        let loaded = load_bytes(&bytes).unwrap();
        assert_eq!(loaded.roots()[0].identifier(), 0x4545_4545);
        assert_eq!(loaded.roots()[0].get_first_or::<u32>("x", 0), 7);
    }

    #[test]
    fn size_validation_rejects_tampering() {
        let root = Node::new(NodeIdentifier::Bone.as_u32());
        root.add_string("n", "bone");

        let mut bytes = save_bytes(root).unwrap();
        // Truncate the node's payload without adjusting its declared size.
        let len = bytes.len();
        bytes.truncate(len - 1);

        let err = load_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::UnexpectedEof | crate::error::Error::SizeMismatch { .. }
        ));
    }
}
