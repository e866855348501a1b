use crate::face::define_face;
use crate::identifier::NodeIdentifier;

define_face!(
    /// A reference to an external asset, identified by path.
    FileReference,
    NodeIdentifier::File
);

impl FileReference {
    pub fn path(&self) -> String {
        self.get_string_or("p", "")
    }

    pub fn set_path(&self, path: impl Into<String>) {
        self.add_string("p", path);
    }
}
