use rkyv::{Archive, Deserialize, Serialize};
use crate::grammar::{Capability, InitialSound, NumberClass};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One token's grammatical profile.
///
/// `caps` and the agreement fields are derived once at classification time
/// and never change. `marked` is the only field written afterwards, by the
/// selection policy, exactly once per word per pass.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Word {
    /// Original surface string, kept untouched for the renderer.
    pub text: String,
    /// Lowercased, punctuation-stripped form used for lookup.
    pub normal: String,
    /// Part-of-speech code assigned by the external tagger.
    pub source_tag: String,
    pub caps: Capability,
    pub number: NumberClass,
    /// Initial-sound constraint this word imposes on its successor
    /// ("a" demands a consonant start, "an" a vowel start).
    pub initial: InitialSound,
    /// True only for copula forms usable after "I" ("am", "was").
    pub first_person_copula: bool,
    /// Set by the selection policy: kept visible if true, suppressed if not.
    pub marked: bool,
}

/// One surface form and the part-of-speech codes it may carry.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexEntry {
    pub word: String,
    pub tags: Vec<String>,
}

/// Word-to-tags lexicon consulted to second-guess the tagger. Compiled to
/// an rkyv binary by anthology-compiler and consumed zero-copy.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexEntry>,
}
