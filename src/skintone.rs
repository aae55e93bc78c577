//! The fixed Fitzpatrick skin-tone modifier table.

/// Fitzpatrick skin-tone types 2 through 6 - the five Unicode modifier
/// characters U+1F3FB through U+1F3FF. Type 1 shares a modifier with type 2
/// and has no character of its own.
///
/// Each variant maps bidirectionally between its modifier character and its
/// `:skintone_N:` suffix shortcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fitzpatrick {
    Type2,
    Type3,
    Type4,
    Type5,
    Type6,
}

impl Fitzpatrick {
    /// Every modifier, in scale order.
    pub const ALL: [Self; 5] = [
        Self::Type2,
        Self::Type3,
        Self::Type4,
        Self::Type5,
        Self::Type6,
    ];

    /// The Unicode modifier character.
    pub const fn modifier(self) -> char {
        match self {
            Self::Type2 => '\u{1F3FB}',
            Self::Type3 => '\u{1F3FC}',
            Self::Type4 => '\u{1F3FD}',
            Self::Type5 => '\u{1F3FE}',
            Self::Type6 => '\u{1F3FF}',
        }
    }

    /// The suffix shortcode, colons included.
    pub const fn shortcode(self) -> &'static str {
        match self {
            Self::Type2 => ":skintone_2:",
            Self::Type3 => ":skintone_3:",
            Self::Type4 => ":skintone_4:",
            Self::Type5 => ":skintone_5:",
            Self::Type6 => ":skintone_6:",
        }
    }

    /// Resolves a modifier character back to its scale type.
    pub fn from_modifier(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.modifier() == c)
    }

    /// Resolves a bare suffix name (`skintone_2`..`skintone_6`, no colons).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "skintone_2" => Some(Self::Type2),
            "skintone_3" => Some(Self::Type3),
            "skintone_4" => Some(Self::Type4),
            "skintone_5" => Some(Self::Type5),
            "skintone_6" => Some(Self::Type6),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_bidirectional() {
        for tone in Fitzpatrick::ALL {
            assert_eq!(Fitzpatrick::from_modifier(tone.modifier()), Some(tone));

            let name = tone.shortcode().trim_matches(':');
            assert_eq!(Fitzpatrick::from_name(name), Some(tone));
        }
    }

    #[test]
    fn unknown_inputs_resolve_to_none() {
        assert_eq!(Fitzpatrick::from_modifier('a'), None);
        assert_eq!(Fitzpatrick::from_name("skintone_7"), None);
        assert_eq!(Fitzpatrick::from_name(":skintone_2:"), None);
    }

    #[test]
    fn modifiers_ascend_in_scale_order() {
        let modifiers: Vec<char> = Fitzpatrick::ALL.iter().map(|t| t.modifier()).collect();
        assert_eq!(modifiers, vec!['🏻', '🏼', '🏽', '🏾', '🏿']);
    }
}
