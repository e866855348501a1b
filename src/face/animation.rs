use crate::face::{define_face, Curve, Face, NotificationTrack};
use crate::identifier::NodeIdentifier;

define_face!(
    /// A container of [`Curve`] and [`NotificationTrack`] children, plus
    /// overall playback settings.
    Animation,
    NodeIdentifier::Animation
);

impl Animation {
    pub fn framerate(&self) -> f32 {
        self.get_first_or::<f32>("f", 30.0)
    }

    pub fn set_framerate(&self, framerate: f32) {
        self.add_value("f", framerate);
    }

    pub fn looping(&self) -> bool {
        self.get_first_or::<u8>("b", 0) != 0
    }

    pub fn set_looping(&self, looping: bool) {
        self.add_value::<u8>("b", u8::from(looping));
    }

    pub fn curves(&self) -> Vec<Curve> {
        self.children_of_kind::<Curve>()
    }

    pub fn add_curve(&self) -> Curve {
        self.add_new::<Curve>()
    }

    pub fn notification_tracks(&self) -> Vec<NotificationTrack> {
        self.children_of_kind::<NotificationTrack>()
    }

    pub fn add_notification_track(&self) -> NotificationTrack {
        self.add_new::<NotificationTrack>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_thirty_fps_non_looping() {
        let animation = Animation::new();
        assert_eq!(animation.framerate(), 30.0);
        assert!(!animation.looping());
    }
}
