//! The wire-level decode/encode algorithm: file header, then nodes
//! recursively. [`crate::Document`] is the public entry point; this module
//! holds the recursive node walk it drives.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::property::{Property, PropertyKind};
use crate::traits::{ReadPrimitiveExt, ReadString, WritePrimitiveExt, WriteString};

use byteorder::{ReadBytesExt, WriteBytesExt};
use glam::{Vec2, Vec3, Vec4};

use std::io::{Read, Seek, Write};

pub(crate) const MAGIC: u32 = 0x7473_6163;
pub(crate) const VERSION: u32 = 1;
const NODE_HEADER_SIZE: u32 = 24;
const PROPERTY_HEADER_SIZE: u32 = 8;

/// `24 + Σ (8 + keylen + payload_size) + Σ child sizes`, computed bottom-up.
pub(crate) fn node_size(node: &Node) -> u32 {
    let mut size = NODE_HEADER_SIZE;
    for (key, property) in node.properties() {
        size += PROPERTY_HEADER_SIZE + key.len() as u32 + property.data_size();
    }
    for child in node.children() {
        size += node_size(&child);
    }
    size
}

pub(crate) fn write_file_header<W: Write>(writer: &mut W, root_count: i32) -> Result<()> {
    writer.write_u32_le(MAGIC)?;
    writer.write_u32_le(VERSION)?;
    writer.write_i32_le(root_count)?;
    writer.write_u32_le(0)?;
    Ok(())
}

pub(crate) fn read_file_header<R: Read>(reader: &mut R) -> Result<i32> {
    let magic = reader.read_u32_le().map_err(Error::from_read)?;
    if magic != MAGIC {
        return Err(Error::BadMagic {
            expected: MAGIC,
            got: magic,
        });
    }

    let version = reader.read_u32_le().map_err(Error::from_read)?;
    if version > VERSION {
        return Err(Error::UnsupportedVersion { version });
    }

    let root_count = reader.read_i32_le().map_err(Error::from_read)?;
    reader.read_u32_le().map_err(Error::from_read)?; // reserved

    log::debug!("cast header: version={version} root_count={root_count}");
    Ok(root_count)
}

pub(crate) fn write_node<W: Write>(writer: &mut W, node: &Node) -> Result<()> {
    let size = node_size(node);
    log::trace!(
        "writing node {:#010x} (hash={:#018x}, size={size})",
        node.identifier(),
        node.hash()
    );

    writer.write_u32_le(node.identifier())?;
    writer.write_u32_le(size)?;
    writer.write_u64_le(node.hash())?;
    writer.write_i32_le(i32::try_from(node.property_count())?)?;
    writer.write_i32_le(i32::try_from(node.child_count())?)?;

    for (key, property) in node.properties() {
        write_property(writer, &key, &property)?;
    }

    for child in node.children() {
        write_node(writer, &child)?;
    }

    Ok(())
}

pub(crate) fn read_node<R: Read + Seek>(reader: &mut R) -> Result<Node> {
    let start = reader.stream_position().map_err(Error::from_read)?;

    log::trace!("reading node header at offset {start}");
    let identifier = reader.read_u32_le().map_err(Error::from_read)?;
    let declared_size = reader.read_u32_le().map_err(Error::from_read)?;
    let hash = reader.read_u64_le().map_err(Error::from_read)?;
    let property_count = reader.read_i32_le().map_err(Error::from_read)?;
    let child_count = reader.read_i32_le().map_err(Error::from_read)?;
    log::debug!(
        "node {identifier:#010x}: size={declared_size} hash={hash:#018x} properties={property_count} children={child_count}"
    );

    let node = Node::with_hash(identifier, hash);

    for _ in 0..property_count.max(0) {
        let (key, property) = read_property(reader)?;
        node.set_property(key, property);
    }

    for _ in 0..child_count.max(0) {
        let child = read_node(reader)?;
        node.add_child(child);
    }

    let consumed = reader.stream_position().map_err(Error::from_read)? - start;
    if consumed != u64::from(declared_size) {
        log::error!(
            "node {identifier:#010x} at offset {start}: declared {declared_size} byte(s), consumed {consumed}"
        );
        return Err(Error::SizeMismatch {
            declared: declared_size,
            consumed,
        });
    }

    Ok(node)
}

fn write_property<W: Write>(writer: &mut W, key: &str, property: &Property) -> Result<()> {
    writer.write_u16_le(property.kind().identifier())?;
    writer.write_u16_le(u16::try_from(key.len())?)?;
    writer.write_i32_le(i32::try_from(property.value_count())?)?;
    writer.write_all(key.as_bytes())?;

    match property {
        Property::String(value) => writer.write_cstring(value)?,
        Property::Byte(values) => {
            for &v in values {
                writer.write_u8(v)?;
            }
        }
        Property::Short(values) => {
            for &v in values {
                writer.write_u16_le(v)?;
            }
        }
        Property::Integer32(values) => {
            for &v in values {
                writer.write_u32_le(v)?;
            }
        }
        Property::Integer64(values) => {
            for &v in values {
                writer.write_u64_le(v)?;
            }
        }
        Property::Float(values) => {
            for &v in values {
                writer.write_f32_le(v)?;
            }
        }
        Property::Double(values) => {
            for &v in values {
                writer.write_f64_le(v)?;
            }
        }
        Property::Vector2(values) => {
            for v in values {
                writer.write_f32_le(v.x)?;
                writer.write_f32_le(v.y)?;
            }
        }
        Property::Vector3(values) => {
            for v in values {
                writer.write_f32_le(v.x)?;
                writer.write_f32_le(v.y)?;
                writer.write_f32_le(v.z)?;
            }
        }
        Property::Vector4(values) => {
            for v in values {
                writer.write_f32_le(v.x)?;
                writer.write_f32_le(v.y)?;
                writer.write_f32_le(v.z)?;
                writer.write_f32_le(v.w)?;
            }
        }
    }

    Ok(())
}

fn read_property<R: Read>(reader: &mut R) -> Result<(String, Property)> {
    let kind_id = reader.read_u16_le().map_err(Error::from_read)?;
    let kind = PropertyKind::from_identifier(kind_id).ok_or(Error::UnknownPropertyKind(kind_id))?;
    let key_len = reader.read_u16_le().map_err(Error::from_read)?;
    let value_count = reader.read_i32_le().map_err(Error::from_read)?;

    let mut key_bytes = vec![0u8; key_len as usize];
    reader.read_exact(&mut key_bytes).map_err(Error::from_read)?;
    let key = String::from_utf8(key_bytes)?;

    let count = value_count.max(0) as usize;
    let property = match kind {
        PropertyKind::String => Property::String(reader.read_cstring()?),
        PropertyKind::Byte => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(reader.read_u8().map_err(Error::from_read)?);
            }
            Property::Byte(values)
        }
        PropertyKind::Short => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(reader.read_u16_le().map_err(Error::from_read)?);
            }
            Property::Short(values)
        }
        PropertyKind::Integer32 => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(reader.read_u32_le().map_err(Error::from_read)?);
            }
            Property::Integer32(values)
        }
        PropertyKind::Integer64 => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(reader.read_u64_le().map_err(Error::from_read)?);
            }
            Property::Integer64(values)
        }
        PropertyKind::Float => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(reader.read_f32_le().map_err(Error::from_read)?);
            }
            Property::Float(values)
        }
        PropertyKind::Double => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(reader.read_f64_le().map_err(Error::from_read)?);
            }
            Property::Double(values)
        }
        PropertyKind::Vector2 => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                let x = reader.read_f32_le().map_err(Error::from_read)?;
                let y = reader.read_f32_le().map_err(Error::from_read)?;
                values.push(Vec2::new(x, y));
            }
            Property::Vector2(values)
        }
        PropertyKind::Vector3 => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                let x = reader.read_f32_le().map_err(Error::from_read)?;
                let y = reader.read_f32_le().map_err(Error::from_read)?;
                let z = reader.read_f32_le().map_err(Error::from_read)?;
                values.push(Vec3::new(x, y, z));
            }
            Property::Vector3(values)
        }
        PropertyKind::Vector4 => {
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                let x = reader.read_f32_le().map_err(Error::from_read)?;
                let y = reader.read_f32_le().map_err(Error::from_read)?;
                let z = reader.read_f32_le().map_err(Error::from_read)?;
                let w = reader.read_f32_le().map_err(Error::from_read)?;
                values.push(Vec4::new(x, y, z, w));
            }
            Property::Vector4(values)
        }
    };

    Ok((key, property))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::NodeIdentifier;

    use std::io::Cursor;

    #[test]
    fn empty_node_round_trips() {
        let node = Node::new(NodeIdentifier::Root.as_u32());
        let mut bytes = Vec::new();
        write_node(&mut bytes, &node).unwrap();
        assert_eq!(bytes.len(), NODE_HEADER_SIZE as usize);

        let mut cursor = Cursor::new(bytes);
        let read_back = read_node(&mut cursor).unwrap();
        assert_eq!(read_back.identifier(), node.identifier());
    }

    #[test]
    fn node_with_properties_and_children_round_trips() {
        let node = Node::with_hash(NodeIdentifier::Bone.as_u32(), 0x1234);
        node.add_string("n", "root");
        node.add_value::<u32>("p", u32::MAX);
        let child = Node::new(NodeIdentifier::Bone.as_u32());
        child.add_string("n", "child");
        node.add_child(child);

        let mut bytes = Vec::new();
        write_node(&mut bytes, &node).unwrap();
        assert_eq!(bytes.len(), node_size(&node) as usize);

        let mut cursor = Cursor::new(bytes);
        let read_back = read_node(&mut cursor).unwrap();
        assert_eq!(read_back.hash(), 0x1234);
        assert_eq!(read_back.get_string("n").unwrap(), "root");
        assert_eq!(read_back.get_first_or::<u32>("p", 0), u32::MAX);
        assert_eq!(read_back.child_count(), 1);
        assert_eq!(read_back.children()[0].get_string("n").unwrap(), "child");
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let node = Node::with_hash(NodeIdentifier::Bone.as_u32(), 0);
        node.add_string("n", "root");

        let mut bytes = Vec::new();
        write_node(&mut bytes, &node).unwrap();
        bytes.truncate(bytes.len() - 2); // drop the nul terminator and a byte

        let mut cursor = Cursor::new(bytes);
        let err = read_node(&mut cursor).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof | Error::SizeMismatch { .. }));
    }

    #[test]
    fn unknown_property_identifier_is_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0xFFFFu16.to_le_bytes()); // bogus property id
        bytes.extend_from_slice(&0u16.to_le_bytes()); // key length
        bytes.extend_from_slice(&0i32.to_le_bytes()); // value count

        let mut cursor = Cursor::new(bytes);
        let err = read_property(&mut cursor).unwrap_err();
        assert!(matches!(err, Error::UnknownPropertyKind(0xFFFF)));
    }
}
