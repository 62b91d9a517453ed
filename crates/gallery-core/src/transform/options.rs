//! Presentation options and their directive token encoding.

use std::fmt;
use std::str::FromStr;

/// Error returned when a crop mode, quality, or format string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseOptionError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Crop mode (`c_` directive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crop {
    Fill,
    #[default]
    Limit,
    Pad,
    Scale,
    Thumb,
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Fill => "fill",
            Crop::Limit => "limit",
            Crop::Pad => "pad",
            Crop::Scale => "scale",
            Crop::Thumb => "thumb",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Crop {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fill" => Ok(Crop::Fill),
            "limit" => Ok(Crop::Limit),
            "pad" => Ok(Crop::Pad),
            "scale" => Ok(Crop::Scale),
            "thumb" => Ok(Crop::Thumb),
            _ => Err(ParseOptionError::new("crop mode", s)),
        }
    }
}

/// Quality (`q_` directive): automatic with an optional level, or a fixed 1-100 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    Auto,
    AutoBest,
    AutoGood,
    AutoEco,
    AutoLow,
    Level(u8),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Auto => f.write_str("auto"),
            Quality::AutoBest => f.write_str("auto:best"),
            Quality::AutoGood => f.write_str("auto:good"),
            Quality::AutoEco => f.write_str("auto:eco"),
            Quality::AutoLow => f.write_str("auto:low"),
            Quality::Level(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Quality {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Quality::Auto),
            "auto:best" => Ok(Quality::AutoBest),
            "auto:good" => Ok(Quality::AutoGood),
            "auto:eco" => Ok(Quality::AutoEco),
            "auto:low" => Ok(Quality::AutoLow),
            other => match other.parse::<u8>() {
                Ok(n) if (1..=100).contains(&n) => Ok(Quality::Level(n)),
                _ => Err(ParseOptionError::new("quality", s)),
            },
        }
    }
}

/// Delivery format (`f_` directive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Auto,
    Webp,
    Avif,
    Jpg,
    Png,
    Gif,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Auto => "auto",
            Format::Webp => "webp",
            Format::Avif => "avif",
            Format::Jpg => "jpg",
            Format::Png => "png",
            Format::Gif => "gif",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Format::Auto),
            "webp" => Ok(Format::Webp),
            "avif" => Ok(Format::Avif),
            "jpg" | "jpeg" => Ok(Format::Jpg),
            "png" => Ok(Format::Png),
            "gif" => Ok(Format::Gif),
            _ => Err(ParseOptionError::new("format", s)),
        }
    }
}

/// Requested presentation for one delivery URL.
///
/// Width and height are emitted only when set (a zero value counts as unset);
/// crop, quality and format fall back to `limit`, `auto` and `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub crop: Option<Crop>,
    pub quality: Option<Quality>,
    pub format: Option<Format>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn crop(mut self, crop: Crop) -> Self {
        self.crop = Some(crop);
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Directive tokens in their fixed order: width, height, crop, quality, format.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(5);
        if let Some(w) = self.width.filter(|w| *w > 0) {
            tokens.push(format!("w_{}", w));
        }
        if let Some(h) = self.height.filter(|h| *h > 0) {
            tokens.push(format!("h_{}", h));
        }
        tokens.push(format!("c_{}", self.crop.unwrap_or_default()));
        tokens.push(format!("q_{}", self.quality.unwrap_or_default()));
        tokens.push(format!("f_{}", self.format.unwrap_or_default()));
        tokens
    }

    /// Tokens joined into a single path segment, e.g. `w_800,c_limit,q_auto,f_auto`.
    pub fn directive_block(&self) -> String {
        self.tokens().join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_crop_quality_format() {
        assert_eq!(
            TransformOptions::new().tokens(),
            vec!["c_limit", "q_auto", "f_auto"]
        );
    }

    #[test]
    fn tokens_follow_fixed_order() {
        let opts = TransformOptions::new()
            .format(Format::Webp)
            .height(600)
            .quality(Quality::Level(80))
            .width(800)
            .crop(Crop::Fill);
        assert_eq!(opts.directive_block(), "w_800,h_600,c_fill,q_80,f_webp");
    }

    #[test]
    fn zero_dimensions_are_omitted() {
        let opts = TransformOptions::new().width(0).height(0);
        assert_eq!(opts.directive_block(), "c_limit,q_auto,f_auto");
    }

    #[test]
    fn quality_parse_and_display() {
        assert_eq!("auto:best".parse::<Quality>().unwrap(), Quality::AutoBest);
        assert_eq!("75".parse::<Quality>().unwrap(), Quality::Level(75));
        assert_eq!(Quality::AutoBest.to_string(), "auto:best");
        assert!("0".parse::<Quality>().is_err());
        assert!("101".parse::<Quality>().is_err());
        assert!("sharp".parse::<Quality>().is_err());
    }

    #[test]
    fn crop_and_format_parse() {
        assert_eq!("FILL".parse::<Crop>().unwrap(), Crop::Fill);
        assert_eq!("jpeg".parse::<Format>().unwrap(), Format::Jpg);
        let err = "stretch".parse::<Crop>().unwrap_err();
        assert_eq!(err.kind, "crop mode");
        assert_eq!(err.to_string(), "invalid crop mode: \"stretch\"");
    }
}
