//! Letter valuation interface.
//!
//! The engine never computes letter values itself. Every valuation during a
//! scan is a synchronous lookup on a [`Cipher`] supplied by the host
//! application, injected wherever a search runs. Unmapped characters value
//! zero, so a scan never aborts over a valuation gap.
//!
//! Three valuers ship with the crate for hosts that have no cipher of their
//! own: [`OrdinalCipher`], [`HebrewGematria`] and [`NullCipher`]. Engine
//! components depend only on the trait.

/// Letter-to-numeric valuation supplied by the host application.
pub trait Cipher {
    /// Sums the values of every character in `text`.
    ///
    /// Characters without a mapping contribute zero.
    fn calculate(&self, text: &str) -> i64 {
        text.chars().map(|ch| self.get_letter_value(ch)).sum()
    }

    /// Value of a single character, zero when unmapped.
    fn get_letter_value(&self, ch: char) -> i64;
}

/// Values every character at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCipher;

impl Cipher for NullCipher {
    fn get_letter_value(&self, _ch: char) -> i64 {
        0
    }
}

/// Alphabetic ordinals: a=1 through z=26, case-insensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalCipher;

impl Cipher for OrdinalCipher {
    fn get_letter_value(&self, ch: char) -> i64 {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            (lower as u8 - b'a') as i64 + 1
        } else {
            0
        }
    }
}

/// Standard Hebrew gematria values.
///
/// Final forms are valued as their base letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HebrewGematria;

impl Cipher for HebrewGematria {
    fn get_letter_value(&self, ch: char) -> i64 {
        match ch {
            'א' => 1,
            'ב' => 2,
            'ג' => 3,
            'ד' => 4,
            'ה' => 5,
            'ו' => 6,
            'ז' => 7,
            'ח' => 8,
            'ט' => 9,
            'י' => 10,
            'כ' | 'ך' => 20,
            'ל' => 30,
            'מ' | 'ם' => 40,
            'נ' | 'ן' => 50,
            'ס' => 60,
            'ע' => 70,
            'פ' | 'ף' => 80,
            'צ' | 'ץ' => 90,
            'ק' => 100,
            'ר' => 200,
            'ש' => 300,
            'ת' => 400,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_values() {
        let cipher = OrdinalCipher;
        assert_eq!(cipher.get_letter_value('a'), 1);
        assert_eq!(cipher.get_letter_value('Z'), 26);
        assert_eq!(cipher.get_letter_value('é'), 0);
        assert_eq!(cipher.get_letter_value('3'), 0);
    }

    #[test]
    fn test_ordinal_calculate() {
        let cipher = OrdinalCipher;
        // c=3, a=1, b=2; punctuation contributes nothing
        assert_eq!(cipher.calculate("cab"), 6);
        assert_eq!(cipher.calculate("c-a b!"), 6);
        assert_eq!(cipher.calculate(""), 0);
    }

    #[test]
    fn test_hebrew_values() {
        let cipher = HebrewGematria;
        assert_eq!(cipher.get_letter_value('א'), 1);
        assert_eq!(cipher.get_letter_value('ת'), 400);
        // Finals match their base forms
        assert_eq!(cipher.get_letter_value('ם'), cipher.get_letter_value('מ'));
        assert_eq!(cipher.get_letter_value('ץ'), cipher.get_letter_value('צ'));
    }

    #[test]
    fn test_hebrew_word_value() {
        // bet=2 resh=200 alef=1 shin=300 yod=10 tav=400
        assert_eq!(HebrewGematria.calculate("בראשית"), 913);
    }

    #[test]
    fn test_null_cipher() {
        assert_eq!(NullCipher.calculate("anything at all"), 0);
    }

    #[test]
    fn test_unmapped_never_fails() {
        // Unmapped characters value zero on every bundled cipher
        for ch in ['\u{1F600}', '\0', '7', ' '] {
            assert_eq!(OrdinalCipher.get_letter_value(ch), 0);
            assert_eq!(HebrewGematria.get_letter_value(ch), 0);
        }
    }
}
