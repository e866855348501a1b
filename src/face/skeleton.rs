use crate::face::{define_face, Bone, Face};
use crate::identifier::NodeIdentifier;

define_face!(
    /// A container of [`Bone`] children.
    Skeleton,
    NodeIdentifier::Skeleton
);

impl Skeleton {
    pub fn bones(&self) -> Vec<Bone> {
        self.children_of_kind::<Bone>()
    }

    pub fn bone_count(&self) -> usize {
        self.child_count_of_kind::<Bone>()
    }

    pub fn add_bone(&self) -> Bone {
        self.add_new::<Bone>()
    }

    pub fn bone_at(&self, index: usize) -> Result<Bone, crate::error::Error> {
        self.child_of_kind_at::<Bone>(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn bone_chain_preserves_order() {
        let skeleton = Skeleton::new();
        for i in 0..16u32 {
            let bone = skeleton.add_bone();
            bone.set_name(format!("bone_{i}"));
            bone.set_parent_index(i.wrapping_sub(1));
            bone.set_local_position(Vec3::new(0.0, 0.0, i as f32));
        }

        assert_eq!(skeleton.bone_count(), 16);
        assert_eq!(skeleton.bones()[5].local_position(), Vec3::new(0.0, 0.0, 5.0));
        assert!(skeleton.bones()[0].is_root());
    }
}
