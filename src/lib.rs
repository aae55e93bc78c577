#![warn(clippy::perf, clippy::style)]

//! Conversion between the three representations of an emoji: the Unicode
//! character sequence, the `:shortcode:` textual alias, and an HTML image tag
//! pointing into a Noto-style sprite set. Also handles incremental typing
//! detection (a partially typed shortcode at the caret) and substring lookup
//! of candidates against a caller-supplied database.
//!
//! The database is an external collaborator - anything implementing
//! [`EmojiDatabase`] works, and [`EmojiDb`] is a bundled map-backed
//! implementation that deserializes from `emojilib`-style JSON.
//!
//! ```
//! use emote::{EmojiConverter, EmojiDb, EmojiRecord};
//!
//! let db: EmojiDb = [(
//!     "grinning".to_string(),
//!     EmojiRecord {
//!         character: "😀".to_string(),
//!         keywords: vec!["face".to_string(), "happy".to_string()],
//!         category: "people".to_string(),
//!         fitzpatrick_scale: false,
//!     },
//! )]
//! .into_iter()
//! .collect();
//!
//! let converter = EmojiConverter::new(&db);
//! assert_eq!(converter.shortcodes_to_characters("hi :grinning:"), "hi 😀");
//! assert_eq!(converter.characters_to_shortcodes("hi 😀"), "hi :grinning:");
//! ```

mod convert;
mod db;
mod image;
mod skintone;

pub use convert::{EmojiConverter, EmojiMatch};
pub use db::{DbError, EmojiDatabase, EmojiDb, EmojiRecord};
pub use image::{ImageScheme, NameScheme};
pub use skintone::Fitzpatrick;
