use crate::face::define_face;
use crate::identifier::NodeIdentifier;
use crate::node::Node;

use glam::{Quat, Vec3, Vec4};

define_face!(
    /// A single bone inside a [`super::Skeleton`].
    Bone,
    NodeIdentifier::Bone
);

/// Sentinel stored in `p` meaning "no parent bone".
pub const NO_PARENT: u32 = u32::MAX;

impl Bone {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    /// Index of the parent bone within the containing skeleton's bone list,
    /// or [`NO_PARENT`] for a root bone.
    pub fn parent_index(&self) -> u32 {
        self.get_first_or::<u32>("p", NO_PARENT)
    }

    pub fn set_parent_index(&self, index: u32) {
        self.add_value("p", index);
    }

    pub fn is_root(&self) -> bool {
        self.parent_index() == NO_PARENT
    }

    pub fn local_position(&self) -> Vec3 {
        self.get_first_or::<Vec3>("lp", Vec3::ZERO)
    }

    pub fn set_local_position(&self, position: Vec3) {
        self.add_value("lp", position);
    }

    pub fn world_position(&self) -> Vec3 {
        self.get_first_or::<Vec3>("wp", Vec3::ZERO)
    }

    pub fn set_world_position(&self, position: Vec3) {
        self.add_value("wp", position);
    }

    pub fn local_rotation(&self) -> Quat {
        read_rotation(self, "lr")
    }

    pub fn set_local_rotation(&self, rotation: Quat) {
        write_rotation(self, "lr", rotation);
    }

    pub fn world_rotation(&self) -> Quat {
        read_rotation(self, "wr")
    }

    pub fn set_world_rotation(&self, rotation: Quat) {
        write_rotation(self, "wr", rotation);
    }

    pub fn scale(&self) -> Vec3 {
        self.get_first_or::<Vec3>("s", Vec3::ONE)
    }

    pub fn set_scale(&self, scale: Vec3) {
        self.add_value("s", scale);
    }

    /// "segment scale compensate": whether this bone's scale ignores its
    /// parent's scale when evaluated.
    pub fn scale_segment_compensate(&self) -> bool {
        self.get_first_or::<u8>("ssc", 0) != 0
    }

    pub fn set_scale_segment_compensate(&self, value: bool) {
        self.add_value::<u8>("ssc", u8::from(value));
    }
}

fn read_rotation(node: &Node, key: &str) -> Quat {
    let v = node.get_first_or::<Vec4>(key, Vec4::new(0.0, 0.0, 0.0, 1.0));
    Quat::from_xyzw(v.x, v.y, v.z, v.w)
}

fn write_rotation(node: &Node, key: &str, rotation: Quat) {
    node.add_value(key, Vec4::new(rotation.x, rotation.y, rotation.z, rotation.w));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Face;

    #[test]
    fn defaults_match_identity_transform() {
        let bone = Bone::new();
        assert_eq!(bone.parent_index(), NO_PARENT);
        assert!(bone.is_root());
        assert_eq!(bone.local_position(), Vec3::ZERO);
        assert_eq!(bone.local_rotation(), Quat::IDENTITY);
        assert_eq!(bone.scale(), Vec3::ONE);
    }

    #[test]
    fn round_trips_rotation_through_vec4_xyzw() {
        let bone = Bone::new();
        let q = Quat::from_axis_angle(Vec3::Y, std::f32::consts::FRAC_PI_2);
        bone.set_local_rotation(q);
        assert_eq!(bone.local_rotation(), q);
    }
}
