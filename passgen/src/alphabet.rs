/// Digits, then lowercase, then uppercase ASCII letters.
const STANDARD: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `STANDARD` followed by the special characters enabled by `--extended`.
const EXTENDED: &[u8; 80] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ$%&_-.,:;<>*+/?!=#";

/// The character set a password is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// 62 alphanumeric characters.
    #[default]
    Standard,
    /// 62 alphanumeric characters plus 18 punctuation characters.
    Extended,
}

impl Alphabet {
    pub fn from_extended(extended: bool) -> Self {
        if extended {
            Alphabet::Extended
        } else {
            Alphabet::Standard
        }
    }

    /// All characters of the alphabet, in a fixed order.
    #[inline]
    pub fn chars(self) -> &'static [u8] {
        match self {
            Alphabet::Standard => STANDARD,
            Alphabet::Extended => EXTENDED,
        }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.chars().len()
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }
}
