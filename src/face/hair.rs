use crate::face::define_face;
use crate::identifier::NodeIdentifier;

use glam::Vec3;

define_face!(
    /// A hair strand buffer: one segment-count byte per strand (`se`), plus
    /// the material that should be used to render them.
    Hair,
    NodeIdentifier::Hair
);

impl Hair {
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

    /// Raw per-strand segment counts, one byte each.
    pub fn segments(&self) -> Vec<u8> {
        self.try_get_array::<u8>("se").unwrap_or_default()
    }

    pub fn set_segments(&self, segments: &[u8]) {
        self.add_array("se", segments.to_vec());
    }

    /// Reinterprets `se` as packed particle positions when its length is a
    /// multiple of three `f32`s. Cast stores both flavors of hair data under
    /// the same `se` key; callers that know theirs is a particle buffer
    /// rather than a segment-count table should use this instead of
    /// [`Hair::segments`].
    pub fn particles(&self) -> Vec<Vec3> {
        let Some(property) = self.try_get_property("se") else {
            return Vec::new();
        };
        let Some(floats) = property_as_f32_slice(&property) else {
            return Vec::new();
        };
        floats
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect()
    }

    pub fn set_particles(&self, particles: &[Vec3]) {
        let mut flat = Vec::with_capacity(particles.len() * 3);
        for p in particles {
            flat.extend_from_slice(&[p.x, p.y, p.z]);
        }
        self.add_array("se", flat);
    }
}

fn property_as_f32_slice(property: &crate::property::Property) -> Option<&[f32]> {
    match property {
        crate::property::Property::Float(values) => Some(values),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Face;

    #[test]
    fn defaults_are_empty() {
        let hair = Hair::new();
        assert!(hair.segments().is_empty());
        assert!(hair.particles().is_empty());
    }

    #[test]
    fn particles_round_trip_through_flat_float_buffer() {
        let hair = Hair::new();
        let particles = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        hair.set_particles(&particles);
        assert_eq!(hair.particles(), particles);
    }
}
