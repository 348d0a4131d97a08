use super::Script;
use crate::stress::split_stress;

/// A named vowel inventory. Membership ignores a trailing stress mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelSet {
    members: &'static [&'static str],
}

impl VowelSet {
    pub const LATIN: VowelSet = VowelSet::new(&["i", "a", "u", "e", "I", "A", "U", "E"]);

    pub const CYRILLIC: VowelSet = VowelSet::new(&[
        "\u{0438}",
        "\u{0430}",
        "\u{0443}",
        "\u{044B}",
        "\u{0418}",
        "\u{0410}",
        "\u{0423}",
        "\u{042B}",
    ]);

    pub const PHONEMIC: VowelSet = VowelSet::new(&["i", "\u{0251}", "a", "u", "\u{0259}"]);

    pub const fn new(members: &'static [&'static str]) -> Self {
        Self { members }
    }

    pub fn for_script(script: Script) -> Self {
        match script {
            Script::Latin => Self::LATIN,
            Script::Cyrillic => Self::CYRILLIC,
        }
    }

    pub fn contains(&self, grapheme: &str) -> bool {
        let (base, _) = split_stress(grapheme);
        self.members.contains(&base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_ignores_stress() {
        assert!(VowelSet::LATIN.contains("a"));
        assert!(VowelSet::LATIN.contains("a\u{0301}"));
        assert!(VowelSet::LATIN.contains("u\u{0302}"));
        assert!(!VowelSet::LATIN.contains("ng"));
        assert!(VowelSet::CYRILLIC.contains("\u{044B}\u{0301}"));
        assert!(VowelSet::PHONEMIC.contains("\u{0259}"));
        assert!(!VowelSet::PHONEMIC.contains("e"));
    }

    #[test]
    fn test_for_script() {
        assert_eq!(VowelSet::for_script(Script::Latin), VowelSet::LATIN);
        assert_eq!(VowelSet::for_script(Script::Cyrillic), VowelSet::CYRILLIC);
    }
}
