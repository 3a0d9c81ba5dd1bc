//! Tag names of void and raw-text elements are recognised by a hash
//! rather than by string comparison.
//!
//! Every standard tag name is made of ASCII letters and the digits 1 to 6
//! (never in the first position), which is 32 distinct characters once case
//! is ignored. Each character fits
//! in 5 bits, so names of up to 12 characters pack losslessly into a `u64`.
//! Digits 1..=6 take the codes 0..=5 and letters take 6..=31. Names with any
//! other character (or longer ones) have no hash and therefore never match
//! a known element.

// NOTE: hashes can't be computed in a const context, so the values below are
// precalculated. The `hashes_match_names` test keeps them in sync with the
// hashing function.
#[repr(u64)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TagName {
    Area = 220_486u64,
    Base = 236_298u64,
    Br = 247u64,
    Code = 282_922u64,
    Col = 8_849u64,
    Command = 9_280_494_185u64,
    Embed = 11_083_081u64,
    Hr = 439u64,
    Img = 14_924u64,
    Input = 15_325_017u64,
    Keygen = 548_352_339u64,
    Link = 572_016u64,
    Meta = 600_870u64,
    Param = 22_240_466u64,
    Pre = 22_250u64,
    Script = 814_463_673u64,
    Source = 827_153_674u64,
    Style = 26_016_298u64,
    Textarea = 870_730_390_854u64,
    Track = 26_974_480u64,
    Wbr = 28_919u64,
}

/// Incrementally computed hash of the tag name being read.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TagNameHash(Option<u64>);

impl TagNameHash {
    #[inline]
    pub const fn new() -> Self {
        TagNameHash(Some(0))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn update(&mut self, ch: char) {
        if let Some(h) = self.0 {
            // NOTE: the hash is invalidated once there is no room left for
            // another 5-bit character.
            self.0 = if h >> (64 - 5) == 0 {
                match ch {
                    // NOTE: the 0x1F mask maps both cases of a letter to 1..=26.
                    'a'..='z' | 'A'..='Z' => Some((h << 5) | ((u64::from(ch) & 0x1F) + 5)),
                    // NOTE: a leading `1` would be indistinguishable from
                    // no character at all, so names can't start with a digit.
                    '1'..='6' if h != 0 => Some((h << 5) | ((u64::from(ch) & 0x0F) - 1)),
                    _ => None,
                }
            } else {
                None
            };
        }
    }
}

impl Default for TagNameHash {
    #[inline]
    fn default() -> Self {
        TagNameHash::new()
    }
}

impl From<&str> for TagNameHash {
    #[inline]
    fn from(name: &str) -> Self {
        let mut hash = TagNameHash::new();

        for ch in name.chars() {
            hash.update(ch);
        }

        hash
    }
}

impl PartialEq<TagName> for TagNameHash {
    #[inline]
    fn eq(&self, tag: &TagName) -> bool {
        self.0 == Some(*tag as u64)
    }
}

macro_rules! tag_is_one_of {
    ($hash:expr, [$($tag:ident),+]) => {
        $($hash == $crate::html::TagName::$tag)||+
    };
}

/// Elements that never have a closing tag.
#[inline]
pub fn is_void_element(hash: TagNameHash) -> bool {
    tag_is_one_of!(
        hash,
        [
            Area, Base, Br, Col, Command, Embed, Hr, Img, Input, Keygen, Link, Meta, Param,
            Source, Track, Wbr
        ]
    )
}

/// Elements whose content is not scanned for nested markup.
#[inline]
pub fn is_raw_text_element(hash: TagNameHash) -> bool {
    tag_is_one_of!(hash, [Pre, Code, Textarea, Script, Style])
}
