use crate::face::define_face;
use crate::identifier::NodeIdentifier;

define_face!(
    /// An inverse-kinematics handle spanning a bone chain.
    IkHandle,
    NodeIdentifier::IkHandle
);

impl IkHandle {
    pub fn start_bone_hash(&self) -> u64 {
        self.get_first_or::<u64>("sb", 0)
    }

    pub fn set_start_bone_hash(&self, hash: u64) {
        self.add_value("sb", hash);
    }

    pub fn end_bone_hash(&self) -> u64 {
        self.get_first_or::<u64>("eb", 0)
    }

    pub fn set_end_bone_hash(&self, hash: u64) {
        self.add_value("eb", hash);
    }

    pub fn target_bone_hash(&self) -> u64 {
        self.get_first_or::<u64>("tb", 0)
    }

    pub fn set_target_bone_hash(&self, hash: u64) {
        self.add_value("tb", hash);
    }

    pub fn pole_vector_bone_hash(&self) -> u64 {
        self.get_first_or::<u64>("pv", 0)
    }

    pub fn set_pole_vector_bone_hash(&self, hash: u64) {
        self.add_value("pv", hash);
    }

    pub fn pole_bone_hash(&self) -> u64 {
        self.get_first_or::<u64>("pb", 0)
    }

    pub fn set_pole_bone_hash(&self, hash: u64) {
        self.add_value("pb", hash);
    }

    pub fn use_target_rotation(&self) -> bool {
        self.get_first_or::<u8>("tr", 0) != 0
    }

    pub fn set_use_target_rotation(&self, value: bool) {
        self.add_value::<u8>("tr", u8::from(value));
    }
}
