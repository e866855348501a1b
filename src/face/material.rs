use crate::face::{define_face, Face, FileReference};
use crate::identifier::NodeIdentifier;

define_face!(
    /// A named material with one hash-valued slot per texture/file
    /// reference kind.
    Material,
    NodeIdentifier::Material
);

/// The texture slots a [`Material`] can carry a file-reference hash for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSlot {
    Albedo,
    Diffuse,
    Normal,
    Specular,
    Emissive,
    Gloss,
    Roughness,
    Ao,
    Cavity,
    Aniso,
    Extra(u8),
}

impl MaterialSlot {
    fn key(self) -> String {
        match self {
            MaterialSlot::Albedo => "albedo".to_string(),
            MaterialSlot::Diffuse => "diffuse".to_string(),
            MaterialSlot::Normal => "normal".to_string(),
            MaterialSlot::Specular => "specular".to_string(),
            MaterialSlot::Emissive => "emissive".to_string(),
            MaterialSlot::Gloss => "gloss".to_string(),
            MaterialSlot::Roughness => "roughness".to_string(),
            MaterialSlot::Ao => "ao".to_string(),
            MaterialSlot::Cavity => "cavity".to_string(),
            MaterialSlot::Aniso => "aniso".to_string(),
            MaterialSlot::Extra(n) => format!("extra{n}"),
        }
    }
}

impl Material {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    pub fn material_type(&self) -> String {
        self.get_string_or("t", "")
    }

    pub fn set_material_type(&self, material_type: impl Into<String>) {
        self.add_string("t", material_type);
    }

    pub fn slot_hash(&self, slot: MaterialSlot) -> u64 {
        self.get_first_or::<u64>(&slot.key(), 0)
    }

    pub fn set_slot_hash(&self, slot: MaterialSlot, hash: u64) {
        self.add_value(slot.key(), hash);
    }

    /// Resolves a slot's hash against sibling [`FileReference`] nodes.
    pub fn slot_file(&self, slot: MaterialSlot) -> Option<FileReference> {
        let hash = self.slot_hash(slot);
        self.node()
            .parent()
            .and_then(|parent| parent.try_child_by_hash_of_kind::<FileReference>(hash))
    }
}
