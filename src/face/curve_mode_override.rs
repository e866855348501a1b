use crate::face::define_face;
use crate::identifier::NodeIdentifier;

define_face!(
    /// Per-node overrides of how an [`crate::face::Animation`]'s curves
    /// blend onto a target node's translation, rotation and scale.
    CurveModeOverride,
    NodeIdentifier::CurveModeOverride
);

impl CurveModeOverride {
    pub fn node_name(&self) -> String {
        self.get_string_or("nn", "")
    }

    pub fn set_node_name(&self, name: impl Into<String>) {
        self.add_string("nn", name);
    }

    pub fn material_hash(&self) -> u64 {
        self.get_first_or::<u64>("m", 0)
    }

    pub fn set_material_hash(&self, hash: u64) {
        self.add_value("m", hash);
    }

    pub fn override_translate(&self) -> bool {
        self.get_first_or::<u8>("ot", 0) != 0
    }

    pub fn set_override_translate(&self, value: bool) {
        self.add_value::<u8>("ot", u8::from(value));
    }

    pub fn override_rotate(&self) -> bool {
        self.get_first_or::<u8>("or", 0) != 0
    }

    pub fn set_override_rotate(&self, value: bool) {
        self.add_value::<u8>("or", u8::from(value));
    }

    pub fn override_scale(&self) -> bool {
        self.get_first_or::<u8>("os", 0) != 0
    }

    pub fn set_override_scale(&self, value: bool) {
        self.add_value::<u8>("os", u8::from(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Face;

    #[test]
    fn defaults_are_all_unoverridden() {
        let over = CurveModeOverride::new();
        assert!(!over.override_translate());
        assert!(!over.override_rotate());
        assert!(!over.override_scale());
    }
}
