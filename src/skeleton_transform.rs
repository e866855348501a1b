//! Forward-kinematics helpers: recomputing local bone transforms from world
//! transforms, and vice versa.
//!
//! Both functions require bones to be in index order with parents preceding
//! children (`p` never points forward); this is a documented precondition,
//! not validated here — a skeleton built by [`crate::face::Skeleton::add_bone`]
//! in parent-then-child order satisfies it automatically.

use crate::face::{Bone, Skeleton};

use glam::{Quat, Vec3};

/// Recomputes every bone's local position/rotation from its current world
/// position/rotation.
pub fn recompute_local(skeleton: &Skeleton) {
    let bones = skeleton.bones();
    for bone in &bones {
        match parent_of(&bones, bone) {
            None => {
                bone.set_local_position(bone.world_position());
                bone.set_local_rotation(bone.world_rotation());
            }
            Some(parent) => {
                let parent_inverse_rotation = parent.world_rotation().conjugate();
                bone.set_local_rotation(parent_inverse_rotation * bone.world_rotation());
                bone.set_local_position(
                    parent_inverse_rotation * (bone.world_position() - parent.world_position()),
                );
            }
        }
    }
}

/// Recomputes every bone's world position/rotation from its current local
/// position/rotation. Processes bones in index order so a parent's world
/// transform is always resolved before any of its children consume it.
pub fn recompute_world(skeleton: &Skeleton) {
    let bones = skeleton.bones();
    for bone in &bones {
        match parent_of(&bones, bone) {
            None => {
                bone.set_world_position(bone.local_position());
                bone.set_world_rotation(bone.local_rotation());
            }
            Some(parent) => {
                bone.set_world_rotation(parent.world_rotation() * bone.local_rotation());
                bone.set_world_position(
                    parent.world_rotation() * bone.local_position() + parent.world_position(),
                );
            }
        }
    }
}

fn parent_of(bones: &[Bone], bone: &Bone) -> Option<Bone> {
    if bone.is_root() {
        return None;
    }
    bones.get(bone.parent_index() as usize).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Face;

    #[test]
    fn world_round_trips_through_local_on_a_bone_chain() {
        let skeleton = Skeleton::new();
        for i in 0..4u32 {
            let bone = skeleton.add_bone();
            bone.set_name(format!("bone_{i}"));
            bone.set_parent_index(if i == 0 { u32::MAX } else { i - 1 });
            bone.set_world_position(Vec3::new(0.0, i as f32, 0.0));
            bone.set_world_rotation(Quat::from_rotation_z(0.1 * i as f32));
        }

        let before: Vec<_> = skeleton
            .bones()
            .iter()
            .map(|b| (b.world_position(), b.world_rotation()))
            .collect();

        recompute_local(&skeleton);
        for bone in skeleton.bones() {
            bone.set_world_position(Vec3::ZERO);
            bone.set_world_rotation(Quat::IDENTITY);
        }
        recompute_world(&skeleton);

        for (bone, (expected_pos, expected_rot)) in skeleton.bones().iter().zip(before) {
            assert!(bone.world_position().abs_diff_eq(expected_pos, 1e-5));
            assert!(bone.world_rotation().abs_diff_eq(expected_rot, 1e-5));
        }
    }

    #[test]
    fn root_bone_local_equals_world() {
        let skeleton = Skeleton::new();
        let root = skeleton.add_bone();
        root.set_parent_index(u32::MAX);
        root.set_world_position(Vec3::new(1.0, 2.0, 3.0));
        root.set_world_rotation(Quat::from_rotation_x(0.5));

        recompute_local(&skeleton);

        assert_eq!(root.local_position(), root.world_position());
        assert_eq!(root.local_rotation(), root.world_rotation());
    }
}
