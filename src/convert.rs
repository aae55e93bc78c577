//! The shortcode/emoji converter itself.

use std::borrow::Cow;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::db::EmojiDatabase;
use crate::image::ImageScheme;
use crate::skintone::Fitzpatrick;

/// Zero-width joiner, the glue between the code points of a compound emoji.
const ZWJ: char = '\u{200D}';

/// A single `:name:` token - a colon, one or more non-whitespace characters,
/// and a closing colon.
static GENERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r":[^\s]+:").unwrap());

/// A paired `:name::skintone_N:` token, no whitespace inside either code.
static SKINTONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r":[^\s]+::[^\s]+:").unwrap());

/// An in-progress token with the caret right behind it - `:` followed by
/// characters that are neither whitespace nor `:`, ending at end-of-string.
static TYPING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r":[^\s:]+$").unwrap());

/// One emoji run, and the single source of truth for what counts as "an
/// emoji" during image and shortcode conversion.
///
/// A run is: a base (dingbat block, a regional-indicator pair, or any
/// supplementary-plane scalar), an optional variation selector, an optional
/// combining mark or skin-tone modifier, then any number of ZWJ-linked
/// continuations of the same shape. Continuation bases additionally admit
/// bare basic-plane scalars, which keycap sequences rely on.
static EMOJI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:[\x{2700}-\x{27BF}]|[\x{1F1E6}-\x{1F1FF}]{2}|[\x{10000}-\x{10FFFF}])",
        r"[\x{FE0E}\x{FE0F}]?",
        r"(?:[\x{0300}-\x{036F}\x{FE20}-\x{FE23}\x{20D0}-\x{20F0}]|[\x{1F3FB}-\x{1F3FF}])?",
        r"(?:\x{200D}",
        r"(?:[\x{0000}-\x{FFFF}]|[\x{1F1E6}-\x{1F1FF}]{2}|[\x{10000}-\x{10FFFF}])",
        r"[\x{FE0E}\x{FE0F}]?",
        r"(?:[\x{0300}-\x{036F}\x{FE20}-\x{FE23}\x{20D0}-\x{20F0}]|[\x{1F3FB}-\x{1F3FF}])?",
        r")*",
    ))
    .unwrap()
});

/// A candidate surfaced by [`EmojiConverter::find_matches`].
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EmojiMatch<'a> {
    pub shortcode: &'a str,
    pub character: &'a str,
    pub fitzpatrick_scale: bool,
    pub category: &'a str,
}

/// Converts between emoji characters, shortcode text and sprite image tags.
///
/// Holds a shared reference to an externally supplied [`EmojiDatabase`];
/// every operation is a pure, total function over it. Unknown names and
/// missing mappings degrade the output instead of erroring.
#[derive(Debug, Clone)]
pub struct EmojiConverter<'a, D> {
    db: &'a D,
    image: ImageScheme,
    max_return: usize,
}

impl<'a, D> EmojiConverter<'a, D>
where
    D: EmojiDatabase,
{
    pub fn new(db: &'a D) -> Self {
        Self {
            db,
            image: ImageScheme::default(),
            max_return: 20,
        }
    }

    /// Overrides the default (Noto) image naming scheme.
    pub fn with_image_scheme(mut self, image: ImageScheme) -> Self {
        self.image = image;
        self
    }

    /// Overrides the candidate cap used by [`find_matches`](Self::find_matches).
    pub fn with_max_return(mut self, max_return: usize) -> Self {
        self.max_return = max_return;
        self
    }

    /// Collects up to `max_return` candidates whose shortcode or keywords
    /// contain `word` as a (case-sensitive) substring.
    ///
    /// Candidates surface in database iteration order and the scan stops at
    /// the cap - first-N, not best-N.
    pub fn find_matches(&self, word: &str) -> Vec<EmojiMatch<'a>> {
        let mut matches = Vec::new();

        for (shortcode, record) in self.db.iter() {
            if matches.len() >= self.max_return {
                break;
            }

            if shortcode.contains(word) || record.keywords.iter().any(|kw| kw.contains(word)) {
                matches.push(EmojiMatch {
                    shortcode,
                    character: &record.character,
                    fitzpatrick_scale: record.fitzpatrick_scale,
                    category: &record.category,
                });
            }
        }

        matches
    }

    /// Replaces every shortcode in `text` with its emoji character.
    ///
    /// Paired `:name::skintone_N:` tokens resolve first: a skin-tone-capable
    /// emoji gets the modifier appended, one without support drops it. Lone
    /// `:name:` tokens resolve second. Unknown names degrade to the bare name
    /// with the colons stripped.
    pub fn shortcodes_to_characters(&self, text: &str) -> String {
        let paired = expand(text, &SKINTONE_REGEX, |code| {
            let name = token_name(code);

            match self.db.lookup(name) {
                Some(record) if record.fitzpatrick_scale => match tone_suffix(code) {
                    Some(tone) => format!("{}{}", record.character, tone.modifier()),
                    None => record.character.clone(),
                },
                Some(record) => {
                    debug!("emoji '{name}' has no skin-tone variants; dropping modifier");
                    record.character.clone()
                }
                None => name.to_owned(),
            }
        });

        expand(&paired, &GENERIC_REGEX, |code| {
            let name = token_name(code);

            match self.db.lookup(name) {
                Some(record) => record.character.clone(),
                None => name.to_owned(),
            }
        })
        .into_owned()
    }

    /// Replaces every emoji in `text` with its `:shortcode:`.
    ///
    /// Skin-tone modifier characters are rewritten to their suffix shortcodes
    /// first (in scale order), so the emoji scan below sees bare base
    /// characters. An emoji with no database record passes through unchanged.
    pub fn characters_to_shortcodes(&self, text: &str) -> String {
        let mut text = text.to_owned();
        for tone in Fitzpatrick::ALL {
            text = text.replace(tone.modifier(), tone.shortcode());
        }

        expand(&text, &EMOJI_REGEX, |emoji| {
            let hit = self
                .db
                .iter()
                .find(|(_, record)| record.character == emoji);

            match hit {
                Some((shortcode, _)) => format!(":{shortcode}:"),
                None => {
                    debug!("no database record for '{emoji}'; passing it through");
                    emoji.to_owned()
                }
            }
        })
        .into_owned()
    }

    /// Builds the sprite asset path for a single emoji character sequence.
    ///
    /// The sequence splits on the zero-width joiner; each segment contributes
    /// its code points as lowercase hex joined by `hex_join`, and segments
    /// are joined by a literal `200d` group. With the default scheme this
    /// reproduces Noto's filenames exactly: `😀` becomes
    /// `./assets/noto-emoji/svg/emoji_u1f600.svg`.
    pub fn image_url(&self, emoji: &str) -> String {
        let scheme = &self.image.name_scheme;

        let code = emoji
            .split(ZWJ)
            .map(|segment| hex_code_points(segment).join(scheme.hex_join.as_str()))
            .join(&format!("{0}200d{0}", scheme.hex_join));

        format!(
            "{}/{}{}{}.{}",
            self.image.directory, scheme.prefix, code, scheme.suffix, self.image.format
        )
    }

    /// Replaces every emoji in `text` with an `<img>` tag whose `src` points
    /// at the corresponding sprite asset and whose `alt` preserves the
    /// original characters. Text without emoji comes back unchanged.
    pub fn characters_to_image_tags(&self, text: &str) -> String {
        expand(text, &EMOJI_REGEX, |emoji| {
            format!(
                r#"<img class="{}" alt="{}" src="{}" />"#,
                self.image.class,
                emoji,
                self.image_url(emoji)
            )
        })
        .into_owned()
    }

    /// Returns the partial shortcode being typed at the end of `text`, if
    /// any. The caret is assumed to sit at end-of-string, so a token followed
    /// by anything (even trailing whitespace) is not "being typed".
    pub fn find_typing_code<'t>(&self, text: &'t str) -> Option<&'t str> {
        TYPING_REGEX.find(text).map(|m| m.as_str())
    }

    /// Replaces the trailing in-progress token of `text` with `replacement` -
    /// the completion step once the user picks a candidate.
    pub fn complete_typing_code(&self, text: &str, replacement: &str) -> String {
        let mut parts: Vec<&str> = TYPING_REGEX.split(text).collect();
        parts.pop();

        let mut completed = parts.concat();
        completed.push_str(replacement);
        completed
    }
}

/// The emoji name inside a shortcode token - the first colon-delimited
/// segment, so `:wave::skintone_4:` yields `wave`.
fn token_name(token: &str) -> &str {
    token.split(':').nth(1).unwrap_or_default()
}

/// The skin-tone suffix of a paired token - the last colon-delimited segment
/// before the closing colon.
fn tone_suffix(token: &str) -> Option<Fitzpatrick> {
    let mut parts: Vec<&str> = token.split(':').collect();
    parts.pop();
    parts.pop().and_then(Fitzpatrick::from_name)
}

/// Hex code points of one ZWJ-free segment.
///
/// Walks the UTF-16 code units two at a time: a surrogate pair at the cursor
/// yields its combined code point, anything else yields the unit itself. A
/// variation selector trailing a basic-plane base falls between cursor stops
/// and does not appear in the output, matching the sprite set's filenames.
fn hex_code_points(segment: &str) -> Vec<String> {
    let units: Vec<u16> = segment.encode_utf16().collect();

    let mut codes = Vec::new();
    let mut cursor = 0;
    while cursor < units.len() {
        let unit = units[cursor];

        let code = match units.get(cursor + 1) {
            Some(&low)
                if (0xD800..=0xDBFF).contains(&unit) && (0xDC00..=0xDFFF).contains(&low) =>
            {
                0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            _ => u32::from(unit),
        };

        codes.push(format!("{code:x}"));
        cursor += 2;
    }

    codes
}

/// Fine-tuned version of [`Regex::replace_all()`].
/// - Uses the fast (match only, no capture) path.
/// - Borrows the source through untouched when nothing matches.
fn expand<'a>(
    source: &'a str,
    expression: &Regex,
    mut replacer: impl FnMut(&str) -> String,
) -> Cow<'a, str> {
    let mut matches = expression.find_iter(source).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(source);
    }

    let mut buffer = String::with_capacity(source.len());
    let mut last_match = 0;
    for m in matches {
        let replacement = replacer(m.as_str());
        buffer.push_str(&source[last_match..m.start()]);
        buffer.push_str(&replacement);
        last_match = m.end();
    }
    buffer.push_str(&source[last_match..]);
    buffer.shrink_to_fit();

    Cow::Owned(buffer)
}
