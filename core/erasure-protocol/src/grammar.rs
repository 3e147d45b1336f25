use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Number agreement class of a word. `Any` doubles as "no definite number".
/// `FirstSingular` is the pseudo-class of the pronoun "I", which demands
/// the copulas "am"/"was" and plural verb forms everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NumberClass {
    Any = 0,
    Singular = 1,
    Plural = 2,
    FirstSingular = 3,
}

/// Initial-sound class used for article agreement ("a" vs "an").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum InitialSound {
    Any = 0,
    Consonant = 1,
    Vowel = 2,
}

impl InitialSound {
    /// Actual sound class of a word, judged from the first letter of its
    /// normalized form. Anything that is not a written vowel counts as a
    /// consonant, the empty string included.
    pub fn of_word(normal: &str) -> Self {
        match normal.chars().next() {
            Some('a' | 'e' | 'i' | 'o' | 'u') => InitialSound::Vowel,
            _ => InitialSound::Consonant,
        }
    }
}

bitflags! {
    /// Grammatical roles a word may fill. A word holds several at once:
    /// "it" is both a subject and an object pronoun, "foxes" is a noun
    /// and a plural. The set is fixed at classification time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct Capability: u32 {
        // Open classes (Bits 0-4)
        const NOUN = 1;
        const VERB = 2;
        const ADJ = 4;
        const GERUND = 8;
        const PERSON = 16;

        // Closed classes (Bits 5-10)
        const DET = 32;
        const ARTICLE = 64;
        const COPULA = 128;
        const MODAL = 256;
        const SUBJECT_PRONOUN = 512;
        const OBJECT_PRONOUN = 1024;

        // Glue words (Bits 11-13)
        const AND = 2048;
        const BUT = 4096;
        const NOT = 8192;

        // Inflection labels (Bits 14-19)
        const INFINITIVE = 16384;
        const PLURAL = 32768;
        const COMPARATIVE = 65536;
        const SUPERLATIVE = 131072;
        const PAST_TENSE = 262144;
        const PAST_PARTICIPLE = 524288;
    }
}

// rkyv support for Capability
impl Archive for Capability {
    type Archived = u32;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::ser::Serializer + ?Sized> Serialize<S> for Capability {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<Capability, D> for u32 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<Capability, D::Error> {
        Ok(Capability::from_bits(*self).unwrap_or_else(|| {
            Capability::from_bits_truncate(*self)
        }))
    }
}
