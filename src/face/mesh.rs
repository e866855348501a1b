use crate::face::define_face;
use crate::identifier::NodeIdentifier;
use crate::node::Node;

use glam::{Vec2, Vec3, Vec4};

define_face!(
    /// Vertex buffers for a single mesh. Parallel arrays are addressed by
    /// vertex index; `u0..uN`/`c0..cN` name the UV and vertex-color layers.
    Mesh,
    NodeIdentifier::Mesh
);

impl Mesh {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    pub fn material_hash(&self) -> u64 {
        self.get_first_or::<u64>("m", 0)
    }

    pub fn set_material_hash(&self, hash: u64) {
        self.add_value("m", hash);
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.try_get_array::<Vec3>("vp").unwrap_or_default()
    }

    pub fn set_positions(&self, values: Vec<Vec3>) {
        self.add_array("vp", values);
    }

    pub fn normals(&self) -> Vec<Vec3> {
        self.try_get_array::<Vec3>("vn").unwrap_or_default()
    }

    pub fn set_normals(&self, values: Vec<Vec3>) {
        self.add_array("vn", values);
    }

    pub fn tangents(&self) -> Vec<Vec3> {
        self.try_get_array::<Vec3>("vt").unwrap_or_default()
    }

    pub fn set_tangents(&self, values: Vec<Vec3>) {
        self.add_array("vt", values);
    }

    /// Legacy per-vertex color buffer (superseded by `c0..cN` layers).
    pub fn legacy_colors(&self) -> Vec<Vec4> {
        self.try_get_array::<Vec4>("vc").unwrap_or_default()
    }

    pub fn set_legacy_colors(&self, values: Vec<Vec4>) {
        self.add_array("vc", values);
    }

    /// Per-vertex bone indices, widened to `u32` regardless of the narrowest
    /// width (`u8`/`u16`/`u32`) the buffer happens to be stored in.
    pub fn bone_indices(&self) -> Vec<u32> {
        read_widened_index_array(self, "wb")
    }

    /// Stores bone indices using the narrowest integer width that fits all
    /// of `values`.
    pub fn set_bone_indices(&self, values: &[u32]) {
        write_narrowest_index_array(self, "wb", values);
    }

    pub fn vertex_weights(&self) -> Vec<f32> {
        self.try_get_array::<f32>("wv").unwrap_or_default()
    }

    pub fn set_vertex_weights(&self, values: Vec<f32>) {
        self.add_array("wv", values);
    }

    pub fn face_indices(&self) -> Vec<u32> {
        read_widened_index_array(self, "f")
    }

    pub fn set_face_indices(&self, values: &[u32]) {
        write_narrowest_index_array(self, "f", values);
    }

    /// Number of active UV layers (`u0..uN`), capped at 32 by the format.
    pub fn uv_layer_count(&self) -> u8 {
        self.get_first_or::<u8>("ul", 0)
    }

    pub fn set_uv_layer_count(&self, count: u8) {
        self.add_value("ul", count);
    }

    /// Number of active vertex-color layers (`c0..cN`), capped at 32.
    pub fn color_layer_count(&self) -> u8 {
        self.get_first_or::<u8>("cl", 0)
    }

    pub fn set_color_layer_count(&self, count: u8) {
        self.add_value("cl", count);
    }

    pub fn max_skin_influences(&self) -> u8 {
        self.get_first_or::<u8>("mi", 0)
    }

    pub fn set_max_skin_influences(&self, count: u8) {
        self.add_value("mi", count);
    }

    pub fn skinning_method(&self) -> String {
        self.get_string_or("sm", "linear")
    }

    pub fn set_skinning_method(&self, method: impl Into<String>) {
        self.add_string("sm", method);
    }

    pub fn uv_layer(&self, index: u8) -> Vec<Vec2> {
        self.try_get_array::<Vec2>(&format!("u{index}")).unwrap_or_default()
    }

    pub fn set_uv_layer(&self, index: u8, values: Vec<Vec2>) {
        self.add_array(format!("u{index}"), values);
    }

    pub fn color_layer(&self, index: u8) -> Vec<Vec4> {
        self.try_get_array::<Vec4>(&format!("c{index}")).unwrap_or_default()
    }

    pub fn set_color_layer(&self, index: u8, values: Vec<Vec4>) {
        self.add_array(format!("c{index}"), values);
    }
}

pub(crate) fn read_widened_index_array(node: &Node, key: &str) -> Vec<u32> {
    node.try_get_property(key)
        .and_then(|p| p.widen_to_u32_array())
        .unwrap_or_default()
}

pub(crate) fn write_narrowest_index_array(node: &Node, key: &str, values: &[u32]) {
    node.set_property(key, crate::property::Property::narrowest_integer_array(values));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Face;

    #[test]
    fn defaults_are_empty() {
        let mesh = Mesh::new();
        assert!(mesh.positions().is_empty());
        assert_eq!(mesh.skinning_method(), "linear");
        assert_eq!(mesh.material_hash(), 0);
    }

    #[test]
    fn bone_indices_widen_regardless_of_storage_width() {
        let mesh = Mesh::new();
        mesh.set_bone_indices(&[1, 2, 255]);
        assert_eq!(mesh.bone_indices(), vec![1, 2, 255]);

        mesh.set_bone_indices(&[1, 70000]);
        assert_eq!(mesh.bone_indices(), vec![1, 70000]);
    }
}
