//! The heterogeneous, typed payload attached to a [`crate::Node`] under a
//! short string key. A `Property` knows nothing about its own key; the node
//! owns that.

use glam::{Vec2, Vec3, Vec4};

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// The on-wire property identifiers from the Cast format (`u16`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum PropertyKind {
    Byte = 0x62,
    Short = 0x68,
    Integer32 = 0x69,
    Integer64 = 0x6C,
    Float = 0x66,
    Double = 0x64,
    String = 0x73,
    Vector2 = 0x7632,
    Vector3 = 0x7633,
    Vector4 = 0x7634,
}

impl PropertyKind {
    pub fn identifier(self) -> u16 {
        ToPrimitive::to_u16(&self).expect("every PropertyKind discriminant fits in a u16")
    }

    pub fn from_identifier(id: u16) -> Option<Self> {
        FromPrimitive::from_u16(id)
    }

    /// Name used in [`crate::Error::PropertyKindMismatch`] messages.
    pub const fn name(self) -> &'static str {
        match self {
            PropertyKind::Byte => "Byte",
            PropertyKind::Short => "Short",
            PropertyKind::Integer32 => "Integer32",
            PropertyKind::Integer64 => "Integer64",
            PropertyKind::Float => "Float",
            PropertyKind::Double => "Double",
            PropertyKind::String => "String",
            PropertyKind::Vector2 => "Vector2",
            PropertyKind::Vector3 => "Vector3",
            PropertyKind::Vector4 => "Vector4",
        }
    }

    /// Width in bits of a single on-wire element, used by
    /// [`crate::Node::get_first_integer_or`] to decide whether a narrower
    /// integer storage (e.g. `u8` index buffers) can widen into the caller's
    /// requested ceiling.
    pub const fn integer_bits(self) -> Option<u32> {
        match self {
            PropertyKind::Byte => Some(8),
            PropertyKind::Short => Some(16),
            PropertyKind::Integer32 => Some(32),
            PropertyKind::Integer64 => Some(64),
            _ => None,
        }
    }
}

/// A typed, heterogeneous payload. Every variant except [`Property::String`]
/// is an ordered, possibly empty array.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    String(String),
    Byte(Vec<u8>),
    Short(Vec<u16>),
    Integer32(Vec<u32>),
    Integer64(Vec<u64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Vector2(Vec<Vec2>),
    Vector3(Vec<Vec3>),
    Vector4(Vec<Vec4>),
}

impl Property {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Property::String(_) => PropertyKind::String,
            Property::Byte(_) => PropertyKind::Byte,
            Property::Short(_) => PropertyKind::Short,
            Property::Integer32(_) => PropertyKind::Integer32,
            Property::Integer64(_) => PropertyKind::Integer64,
            Property::Float(_) => PropertyKind::Float,
            Property::Double(_) => PropertyKind::Double,
            Property::Vector2(_) => PropertyKind::Vector2,
            Property::Vector3(_) => PropertyKind::Vector3,
            Property::Vector4(_) => PropertyKind::Vector4,
        }
    }

    /// Number of on-wire elements. A string is always 1 element, regardless
    /// of its byte length.
    pub fn value_count(&self) -> usize {
        match self {
            Property::String(_) => 1,
            Property::Byte(v) => v.len(),
            Property::Short(v) => v.len(),
            Property::Integer32(v) => v.len(),
            Property::Integer64(v) => v.len(),
            Property::Float(v) => v.len(),
            Property::Double(v) => v.len(),
            Property::Vector2(v) => v.len(),
            Property::Vector3(v) => v.len(),
            Property::Vector4(v) => v.len(),
        }
    }

    /// Bytes consumed by the payload alone: excludes the 8-byte property
    /// header and the key bytes.
    pub fn data_size(&self) -> u32 {
        match self {
            Property::String(s) => s.len() as u32 + 1,
            Property::Byte(v) => v.len() as u32,
            Property::Short(v) => v.len() as u32 * 2,
            Property::Integer32(v) => v.len() as u32 * 4,
            Property::Integer64(v) => v.len() as u32 * 8,
            Property::Float(v) => v.len() as u32 * 4,
            Property::Double(v) => v.len() as u32 * 8,
            Property::Vector2(v) => v.len() as u32 * 8,
            Property::Vector3(v) => v.len() as u32 * 12,
            Property::Vector4(v) => v.len() as u32 * 16,
        }
    }

    pub fn is_empty(&self) -> bool {
        !matches!(self, Property::String(_)) && self.value_count() == 0
    }

    /// Widens a `Byte`/`Short`/`Integer32` array to `Vec<u32>`, tolerating
    /// whichever of the three integer widths an index buffer happens to be
    /// stored in. `None` for any other property kind.
    pub fn widen_to_u32_array(&self) -> Option<Vec<u32>> {
        match self {
            Property::Byte(v) => Some(v.iter().map(|&x| u32::from(x)).collect()),
            Property::Short(v) => Some(v.iter().map(|&x| u32::from(x)).collect()),
            Property::Integer32(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Builds an integer-array property using the narrowest of
    /// `u8`/`u16`/`u32` that can hold every value in `values`.
    pub fn narrowest_integer_array(values: &[u32]) -> Property {
        let max = values.iter().copied().max().unwrap_or(0);
        if max <= u32::from(u8::MAX) {
            Property::Byte(values.iter().map(|&v| v as u8).collect())
        } else if max <= u32::from(u16::MAX) {
            Property::Short(values.iter().map(|&v| v as u16).collect())
        } else {
            Property::Integer32(values.to_vec())
        }
    }
}

/// Implemented for every on-wire element type an `Array<T>` property can
/// hold. Lets [`crate::Node::get_first`], [`crate::Node::get_array`] and
/// friends be generic over element type instead of one method per variant.
pub trait PropertyValue: Sized + Clone {
    const KIND: PropertyKind;

    fn wrap(values: Vec<Self>) -> Property;
    fn unwrap(property: &Property) -> Option<&[Self]>;
    /// Appends `self` to `property` in place if `property` holds this
    /// element type; returns `false` (leaving `property` untouched)
    /// otherwise.
    fn push_into(property: &mut Property, value: Self) -> bool;
}

macro_rules! impl_property_value {
    ($ty:ty, $kind:ident, $variant:ident) => {
        impl PropertyValue for $ty {
            const KIND: PropertyKind = PropertyKind::$kind;

            fn wrap(values: Vec<Self>) -> Property {
                Property::$variant(values)
            }

            fn unwrap(property: &Property) -> Option<&[Self]> {
                match property {
                    Property::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn push_into(property: &mut Property, value: Self) -> bool {
                match property {
                    Property::$variant(v) => {
                        v.push(value);
                        true
                    }
                    _ => false,
                }
            }
        }
    };
}

impl_property_value!(u8, Byte, Byte);
impl_property_value!(u16, Short, Short);
impl_property_value!(u32, Integer32, Integer32);
impl_property_value!(u64, Integer64, Integer64);
impl_property_value!(f32, Float, Float);
impl_property_value!(f64, Double, Double);
impl_property_value!(Vec2, Vector2, Vector2);
impl_property_value!(Vec3, Vector3, Vector3);
impl_property_value!(Vec4, Vector4, Vector4);

impl Property {
    pub fn from_string(value: impl Into<String>) -> Self {
        Property::String(value.into())
    }

    pub fn from_value<T: PropertyValue>(value: T) -> Self {
        T::wrap(vec![value])
    }

    pub fn from_values<T: PropertyValue>(values: Vec<T>) -> Self {
        T::wrap(values)
    }

    pub fn with_capacity<T: PropertyValue>(capacity: usize) -> Self {
        T::wrap(Vec::with_capacity(capacity))
    }

    /// Appends a value to an array property in place.
    ///
    /// Returns `false` (and leaves `self` untouched) if `self` is a
    /// [`Property::String`] or holds a different element type than `T`.
    pub fn push<T: PropertyValue>(&mut self, value: T) -> bool {
        T::push_into(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_value_count_is_always_one() {
        let prop = Property::from_string("root");
        assert_eq!(prop.value_count(), 1);
        assert_eq!(prop.data_size(), 5); // "root" + nul
    }

    #[test]
    fn array_data_sizes_match_on_wire_widths() {
        assert_eq!(Property::from_values::<u8>(vec![1, 2, 3]).data_size(), 3);
        assert_eq!(Property::from_values::<u16>(vec![1, 2, 3]).data_size(), 6);
        assert_eq!(Property::from_values::<u32>(vec![1]).data_size(), 4);
        assert_eq!(Property::from_values::<u64>(vec![1]).data_size(), 8);
        assert_eq!(Property::from_values::<f32>(vec![1.0]).data_size(), 4);
        assert_eq!(Property::from_values::<f64>(vec![1.0]).data_size(), 8);
        assert_eq!(
            Property::from_values::<Vec3>(vec![Vec3::ZERO]).data_size(),
            12
        );
    }

    #[test]
    fn push_rejects_wrong_element_type() {
        let mut prop = Property::from_values::<u32>(vec![1]);
        assert!(!prop.push::<u8>(2));
        assert!(prop.push::<u32>(2));
        assert_eq!(u32::unwrap(&prop), Some(&[1u32, 2u32][..]));
    }

    #[test]
    fn empty_array_is_empty_string_is_not() {
        assert!(Property::with_capacity::<u32>(4).is_empty());
        assert!(!Property::from_string("").is_empty());
    }
}
