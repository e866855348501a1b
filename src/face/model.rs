use crate::face::{define_face, BlendShape, Bone, Mesh, Skeleton};
use crate::identifier::NodeIdentifier;

define_face!(
    /// Container for a skeleton, its meshes and blend shapes. The source
    /// format's `Model` node carries no documented properties beyond a name;
    /// this façade is intentionally conservative rather than inventing keys.
    Model,
    NodeIdentifier::Model
);

impl Model {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    pub fn skeleton(&self) -> Option<Skeleton> {
        self.try_first_child_of_kind::<Skeleton>()
    }

    pub fn add_skeleton(&self) -> Skeleton {
        self.add_new::<Skeleton>()
    }

    pub fn meshes(&self) -> Vec<Mesh> {
        self.children_of_kind::<Mesh>()
    }

    pub fn add_mesh(&self) -> Mesh {
        self.add_new::<Mesh>()
    }

    pub fn blend_shapes(&self) -> Vec<BlendShape> {
        self.children_of_kind::<BlendShape>()
    }

    pub fn bones(&self) -> Vec<Bone> {
        self.skeleton().map(|s| s.bones()).unwrap_or_default()
    }
}
