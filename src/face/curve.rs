use crate::face::{define_face, Face};
use crate::face::mesh::{read_widened_index_array, write_narrowest_index_array};
use crate::identifier::NodeIdentifier;
use crate::property::Property;

define_face!(
    /// One animated property (e.g. a bone's rotation) as a keyframe track.
    Curve,
    NodeIdentifier::Curve
);

impl Curve {
    /// The node (typically a bone) this curve targets.
    pub fn node_name(&self) -> String {
        self.get_string_or("nn", "")
    }

    pub fn set_node_name(&self, name: impl Into<String>) {
        self.add_string("nn", name);
    }

    /// Which of the target node's properties this curve animates (e.g.
    /// `"rq"` for rotation, `"tx"` for translation on X).
    pub fn key_property_name(&self) -> String {
        self.get_string_or("kp", "")
    }

    pub fn set_key_property_name(&self, name: impl Into<String>) {
        self.add_string("kp", name);
    }

    /// Frame numbers for each keyframe, widened to `u32` regardless of
    /// storage width.
    pub fn key_frames(&self) -> Vec<u32> {
        read_widened_index_array(self, "kb")
    }

    pub fn set_key_frames(&self, frames: &[u32]) {
        write_narrowest_index_array(self, "kb", frames);
    }

    /// Raw keyframe values. Cast curves animate properties of differing
    /// types (floats, vectors, quaternions), so this is left type-erased;
    /// use [`crate::Node::get_array`] / [`crate::Node::try_get_array`]
    /// directly on this façade's underlying node for a typed view.
    pub fn key_values(&self) -> Option<Property> {
        self.try_get_property("kv")
    }

    pub fn set_key_values(&self, values: Property) {
        self.set_property("kv", values);
    }

    pub fn mode(&self) -> String {
        self.get_string_or("m", "relative")
    }

    pub fn set_mode(&self, mode: impl Into<String>) {
        self.add_string("m", mode);
    }

    pub fn additive_blend_weight(&self) -> f32 {
        self.get_first_or::<f32>("ab", 1.0)
    }

    pub fn set_additive_blend_weight(&self, weight: f32) {
        self.add_value("ab", weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative_and_empty() {
        let curve = Curve::new();
        assert_eq!(curve.mode(), "relative");
        assert!(curve.key_frames().is_empty());
        assert_eq!(curve.additive_blend_weight(), 1.0);
    }
}
