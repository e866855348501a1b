use crate::face::define_face;
use crate::face::mesh::{read_widened_index_array, write_narrowest_index_array};
use crate::identifier::NodeIdentifier;

define_face!(
    /// A sequence of frame-stamped named events (footsteps, sound cues, …).
    NotificationTrack,
    NodeIdentifier::NotificationTrack
);

impl NotificationTrack {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    pub fn key_frames(&self) -> Vec<u32> {
        read_widened_index_array(self, "kb")
    }

    pub fn set_key_frames(&self, frames: &[u32]) {
        write_narrowest_index_array(self, "kb", frames);
    }
}
