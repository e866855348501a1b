use crate::face::define_face;
use crate::identifier::NodeIdentifier;

use glam::{Quat, Vec3, Vec4};

define_face!(
    /// A placed reference to another file: a model instanced at a position,
    /// rotation and scale.
    Instance,
    NodeIdentifier::Instance
);

impl Instance {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    pub fn reference_file_hash(&self) -> u64 {
        self.get_first_or::<u64>("rf", 0)
    }

    pub fn set_reference_file_hash(&self, hash: u64) {
        self.add_value("rf", hash);
    }

    pub fn position(&self) -> Vec3 {
        self.get_first_or::<Vec3>("p", Vec3::ZERO)
    }

    pub fn set_position(&self, position: Vec3) {
        self.add_value("p", position);
    }

    pub fn rotation(&self) -> Quat {
        let v = self.get_first_or::<Vec4>("r", Vec4::new(0.0, 0.0, 0.0, 1.0));
        Quat::from_xyzw(v.x, v.y, v.z, v.w)
    }

    pub fn set_rotation(&self, rotation: Quat) {
        self.add_value("r", Vec4::new(rotation.x, rotation.y, rotation.z, rotation.w));
    }

    pub fn scale(&self) -> Vec3 {
        self.get_first_or::<Vec3>("s", Vec3::ONE)
    }

    pub fn set_scale(&self, scale: Vec3) {
        self.add_value("s", scale);
    }
}
