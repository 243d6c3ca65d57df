use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{StippleError, StippleResult};

/// Exact RGB8 color whose pixels are dropped during conversion.
///
/// Accepts a color name (`"black"`, `"white"`, ...), `#RRGGBB` hex, or an `[r, g, b]` array of
/// integers in `0..=255`. Serializes as lowercase hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterColor(pub Rgb8);

impl FilterColor {
    /// Pure black, the default background.
    pub const BLACK: Self = Self(Rgb8::new(0, 0, 0));

    /// Underlying RGB8 triple.
    pub fn rgb(self) -> Rgb8 {
        self.0
    }

    /// Parse a color name or hex string.
    pub fn parse(s: &str) -> StippleResult<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s).map(Self);
        }
        if let Some(rgb) = named_color(&s.to_ascii_lowercase()) {
            return Ok(Self(rgb));
        }
        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return parse_hex(s).map(Self);
        }
        Err(StippleError::validation(format!(
            "unknown color \"{s}\" (expected a color name or #RRGGBB)"
        )))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

impl Default for FilterColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for FilterColor {
    type Err = StippleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FilterColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for FilterColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FilterColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Arr(Vec<i64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => {
                if v.len() != 3 {
                    return Err(serde::de::Error::custom(
                        "rgb array must have len 3 ([r,g,b])",
                    ));
                }
                let mut ch = [0u8; 3];
                for (dst, &src) in ch.iter_mut().zip(&v) {
                    *dst = u8::try_from(src).map_err(|_| {
                        serde::de::Error::custom(format!("rgb channel {src} is outside 0..=255"))
                    })?;
                }
                Ok(Self(Rgb8::new(ch[0], ch[1], ch[2])))
            }
        }
    }
}

fn named_color(name: &str) -> Option<Rgb8> {
    let rgb = match name {
        "black" => Rgb8::new(0, 0, 0),
        "white" => Rgb8::new(255, 255, 255),
        "red" => Rgb8::new(255, 0, 0),
        "green" | "lime" => Rgb8::new(0, 255, 0),
        "blue" => Rgb8::new(0, 0, 255),
        "yellow" => Rgb8::new(255, 255, 0),
        "cyan" | "aqua" => Rgb8::new(0, 255, 255),
        "magenta" | "fuchsia" => Rgb8::new(255, 0, 255),
        "gray" | "grey" => Rgb8::new(128, 128, 128),
        _ => return None,
    };
    Some(rgb)
}

fn parse_hex(s: &str) -> StippleResult<Rgb8> {
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> StippleResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| StippleError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err(StippleError::validation(
            "hex color must be #RRGGBB (case-insensitive)",
        ));
    }
    Ok(Rgb8::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
