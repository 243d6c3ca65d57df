use std::str::FromStr;

use crate::convert::opts::ImageOpts;
use crate::foundation::error::{StippleError, StippleResult};

/// Expression variants of the face preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaceMode {
    /// `simple_face`
    #[default]
    Simple,
    /// `talking_face`
    Talking,
    /// `straight_face`
    Straight,
}

impl FaceMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Talking => "talking",
            Self::Straight => "straight",
        }
    }
}

/// Named image with its own default scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// `<mode>_face` at scale 0.5.
    Face(FaceMode),
    /// `video_icon` at scale 0.3.
    VideoIcon,
}

impl Preset {
    /// Image identifier resolved through the usual search path.
    pub fn identifier(self) -> String {
        match self {
            Self::Face(mode) => format!("{}_face", mode.as_str()),
            Self::VideoIcon => "video_icon".to_string(),
        }
    }

    /// Preset default for [`ImageOpts::scale_value`].
    pub fn default_scale(self) -> f64 {
        match self {
            Self::Face(_) => 0.5,
            Self::VideoIcon => 0.3,
        }
    }

    /// Return `opts` with `scale_value` replaced by the preset default.
    pub fn apply(self, opts: ImageOpts) -> ImageOpts {
        ImageOpts {
            scale_value: self.default_scale(),
            ..opts
        }
    }
}

impl FromStr for Preset {
    type Err = StippleError;

    /// Accepts `face`, `face:<simple|talking|straight>` and `video_icon`.
    fn from_str(s: &str) -> StippleResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        let (name, arg) = match s.split_once(':') {
            Some((n, a)) => (n, Some(a)),
            None => (s.as_str(), None),
        };
        match (name, arg) {
            ("face", None) => Ok(Self::Face(FaceMode::default())),
            ("face", Some(mode)) => {
                let mode = match mode {
                    "simple" => FaceMode::Simple,
                    "talking" => FaceMode::Talking,
                    "straight" => FaceMode::Straight,
                    other => {
                        return Err(StippleError::validation(format!(
                            "unknown face mode \"{other}\" (expected simple|talking|straight)"
                        )));
                    }
                };
                Ok(Self::Face(mode))
            }
            ("video_icon", None) => Ok(Self::VideoIcon),
            _ => Err(StippleError::validation(format!(
                "unknown preset \"{s}\" (expected face[:mode] or video_icon)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/presets.rs"]
mod tests;
