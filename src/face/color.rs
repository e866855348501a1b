use crate::face::define_face;
use crate::identifier::NodeIdentifier;

use glam::Vec4;

use std::fmt::{Display, Formatter};

define_face!(
    /// A named RGBA color.
    Color,
    NodeIdentifier::Color
);

/// The color space an RGBA value is expressed in. Cast stores this as a
/// free-form string (`cs`); unrecognized values round-trip through
/// [`ColorSpace::Custom`] rather than being rejected, since an unrecognized
/// color space is not a structural error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    Linear,
    Custom(String),
}

impl From<&str> for ColorSpace {
    fn from(value: &str) -> Self {
        match value {
            "srgb" => ColorSpace::Srgb,
            "linear" => ColorSpace::Linear,
            other => ColorSpace::Custom(other.to_string()),
        }
    }
}

impl Display for ColorSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorSpace::Srgb => write!(f, "srgb"),
            ColorSpace::Linear => write!(f, "linear"),
            ColorSpace::Custom(value) => write!(f, "{value}"),
        }
    }
}

impl Color {
    pub fn name(&self) -> String {
        self.get_string_or("n", "")
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.add_string("n", name);
    }

    pub fn color_space(&self) -> ColorSpace {
        ColorSpace::from(self.get_string_or("cs", "srgb").as_str())
    }

    pub fn set_color_space(&self, color_space: ColorSpace) {
        self.add_string("cs", color_space.to_string());
    }

    pub fn rgba(&self) -> Vec4 {
        self.get_first_or::<Vec4>("rgba", Vec4::ONE)
    }

    pub fn set_rgba(&self, rgba: Vec4) {
        self.add_value("rgba", rgba);
    }
}
