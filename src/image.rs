//! Sprite image naming configuration.

use serde::{Deserialize, Serialize};

/// Controls how generated `<img>` tags and their asset paths are formed.
///
/// The defaults reproduce the Noto emoji SVG set's on-disk convention:
/// filenames like `emoji_u1f600.svg`, code points joined by `_`, and
/// zero-width joiners flattened to a literal `200d` group.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ImageScheme {
    /// CSS class applied to generated tags.
    pub class: String,
    /// Base path the filename is joined onto.
    pub directory: String,
    /// File extension, without the dot.
    pub format: String,
    pub name_scheme: NameScheme,
}

/// Filename construction rules within an [`ImageScheme`].
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NameScheme {
    pub prefix: String,
    /// Separator placed between the hex values of adjacent code points.
    pub hex_join: String,
    pub suffix: String,
}

impl Default for ImageScheme {
    fn default() -> Self {
        Self {
            class: "emoji".to_string(),
            directory: "./assets/noto-emoji/svg".to_string(),
            format: "svg".to_string(),
            name_scheme: NameScheme::default(),
        }
    }
}

impl Default for NameScheme {
    fn default() -> Self {
        Self {
            prefix: "emoji_u".to_string(),
            hex_join: "_".to_string(),
            suffix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_noto() {
        let scheme = ImageScheme::default();

        assert_eq!(scheme.class, "emoji");
        assert_eq!(scheme.format, "svg");
        assert_eq!(scheme.name_scheme.prefix, "emoji_u");
        assert_eq!(scheme.name_scheme.hex_join, "_");
        assert!(scheme.name_scheme.suffix.is_empty());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let scheme: ImageScheme = serde_json::from_str(
            r#"{ "class": "em", "directory": "/static/emoji" }"#,
        )
        .unwrap();

        assert_eq!(scheme.class, "em");
        assert_eq!(scheme.directory, "/static/emoji");
        assert_eq!(scheme.format, "svg");
        assert_eq!(scheme.name_scheme.prefix, "emoji_u");
    }
}
