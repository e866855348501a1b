use crate::face::{define_face, Face, Mesh};
use crate::identifier::NodeIdentifier;

define_face!(
    /// Blends a base mesh toward one or more target meshes, each with its
    /// own weight.
    BlendShape,
    NodeIdentifier::BlendShape
);

impl BlendShape {
    pub fn base_mesh_hash(&self) -> u64 {
        self.get_first_or::<u64>("b", 0)
    }

    pub fn set_base_mesh_hash(&self, hash: u64) {
        self.add_value("b", hash);
    }

    pub fn base_mesh(&self) -> Option<Mesh> {
        self.node()
            .parent()
            .and_then(|parent| parent.try_child_by_hash_of_kind::<Mesh>(self.base_mesh_hash()))
    }

    pub fn target_hashes(&self) -> Vec<u64> {
        self.try_get_array::<u64>("t").unwrap_or_default()
    }

    pub fn set_target_hashes(&self, hashes: Vec<u64>) {
        self.add_array("t", hashes);
    }

    /// Per-target weights. Defaults every target to `1.0` when the `ts`
    /// property is absent, per the format's documented default.
    pub fn target_weights(&self) -> Vec<f32> {
        match self.try_get_array::<f32>("ts") {
            Some(weights) => weights,
            None => vec![1.0; self.target_hashes().len()],
        }
    }

    pub fn set_target_weights(&self, weights: Vec<f32>) {
        self.add_array("ts", weights);
    }

    /// Resolves each target hash against sibling meshes under this node's
    /// parent, pairing each with its weight (defaulting to `1.0`).
    pub fn enumerate_target_shapes(&self) -> Vec<(Mesh, f32)> {
        let Some(parent) = self.node().parent() else {
            return Vec::new();
        };
        let weights = self.target_weights();

        self.target_hashes()
            .into_iter()
            .enumerate()
            .filter_map(|(i, hash)| {
                parent
                    .try_child_by_hash_of_kind::<Mesh>(hash)
                    .map(|mesh| (mesh, weights.get(i).copied().unwrap_or(1.0)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::NodeIdentifier;
    use crate::node::Node;

    #[test]
    fn enumerates_targets_in_order_with_weights() {
        let parent = Node::new(NodeIdentifier::Model.as_u32());

        let base = parent.add_new::<Mesh>();
        base.set_hash(0x10);
        let target_1 = parent.add_new::<Mesh>();
        target_1.set_hash(0x11);
        let target_2 = parent.add_new::<Mesh>();
        target_2.set_hash(0x12);

        let blend_shape = parent.add_new::<BlendShape>();
        blend_shape.set_base_mesh_hash(0x10);
        blend_shape.set_target_hashes(vec![0x11, 0x12]);
        blend_shape.set_target_weights(vec![0.25, 0.75]);

        let shapes = blend_shape.enumerate_target_shapes();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].0, target_1);
        assert_eq!(shapes[0].1, 0.25);
        assert_eq!(shapes[1].0, target_2);
        assert_eq!(shapes[1].1, 0.75);
    }

    #[test]
    fn missing_weights_default_to_one() {
        let parent = Node::new(NodeIdentifier::Model.as_u32());
        let target = parent.add_new::<Mesh>();
        target.set_hash(0x20);

        let blend_shape = parent.add_new::<BlendShape>();
        blend_shape.set_target_hashes(vec![0x20]);

        assert_eq!(blend_shape.target_weights(), vec![1.0]);
    }
}
