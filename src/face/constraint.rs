use crate::face::{define_face, Face};
use crate::identifier::NodeIdentifier;

define_face!(
    /// A bone constraint (point, orient, scale, …) with optional per-axis
    /// skips.
    Constraint,
    NodeIdentifier::Constraint
);

impl Constraint {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    pub fn constraint_type(&self) -> String {
        self.get_string_or("ct", "unknown")
    }

    pub fn set_constraint_type(&self, constraint_type: impl Into<String>) {
        self.add_string("ct", constraint_type);
    }

    pub fn constraint_bone_hash(&self) -> u64 {
        self.get_first_or::<u64>("cb", 0)
    }

    pub fn set_constraint_bone_hash(&self, hash: u64) {
        self.add_value("cb", hash);
    }

    pub fn target_bone_hash(&self) -> u64 {
        self.get_first_or::<u64>("tb", 0)
    }

    pub fn set_target_bone_hash(&self, hash: u64) {
        self.add_value("tb", hash);
    }

    pub fn use_target_rotation(&self) -> bool {
        self.get_first_or::<u8>("tr", 0) != 0
    }

    pub fn set_use_target_rotation(&self, value: bool) {
        self.add_value::<u8>("tr", u8::from(value));
    }

    pub fn skip_x(&self) -> bool {
        self.get_first_or::<u8>("sx", 0) != 0
    }

    pub fn set_skip_x(&self, value: bool) {
        self.add_value::<u8>("sx", u8::from(value));
    }

    pub fn skip_y(&self) -> bool {
        self.get_first_or::<u8>("sy", 0) != 0
    }

    pub fn set_skip_y(&self, value: bool) {
        self.add_value::<u8>("sy", u8::from(value));
    }

    pub fn skip_z(&self) -> bool {
        self.get_first_or::<u8>("sz", 0) != 0
    }

    pub fn set_skip_z(&self, value: bool) {
        self.add_value::<u8>("sz", u8::from(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_type_is_unknown() {
        assert_eq!(Constraint::new().constraint_type(), "unknown");
    }
}
