use erasure_protocol::{Capability, InitialSound, NumberClass};

/// One curated closed-class word. Lookup hits adopt every field verbatim.
pub struct ClosedClassEntry {
    pub word: &'static str,
    pub caps: Capability,
    pub number: NumberClass,
    pub initial: InitialSound,
    pub first_person_copula: bool,
}

const fn entry(word: &'static str, caps: Capability, number: NumberClass) -> ClosedClassEntry {
    ClosedClassEntry {
        word,
        caps,
        number,
        initial: InitialSound::Any,
        first_person_copula: false,
    }
}

pub const CLOSED_CLASS: &[ClosedClassEntry] = &[
    // glue words that constitute their own parts of speech for our purposes
    entry("and", Capability::AND, NumberClass::Any),
    entry("but", Capability::BUT, NumberClass::Any),
    entry("not", Capability::NOT, NumberClass::Any),
    entry("yet", Capability::BUT, NumberClass::Any),

    // articles, with the initial-sound constraint they impose on the next word
    entry(
        "the",
        Capability::DET.union(Capability::ARTICLE),
        NumberClass::Any,
    ),
    ClosedClassEntry {
        word: "a",
        caps: Capability::DET.union(Capability::ARTICLE),
        number: NumberClass::Singular,
        initial: InitialSound::Consonant,
        first_person_copula: false,
    },
    ClosedClassEntry {
        word: "an",
        caps: Capability::DET.union(Capability::ARTICLE),
        number: NumberClass::Singular,
        initial: InitialSound::Vowel,
        first_person_copula: false,
    },

    // copulas
    entry("is", Capability::COPULA, NumberClass::Singular),
    ClosedClassEntry {
        word: "was",
        caps: Capability::COPULA,
        number: NumberClass::Singular,
        initial: InitialSound::Any,
        first_person_copula: true,
    },
    entry("are", Capability::COPULA, NumberClass::Plural),
    entry("were", Capability::COPULA, NumberClass::Plural),
    ClosedClassEntry {
        word: "am",
        caps: Capability::COPULA,
        number: NumberClass::FirstSingular,
        initial: InitialSound::Any,
        first_person_copula: true,
    },

    // pronouns
    entry("i", Capability::SUBJECT_PRONOUN, NumberClass::FirstSingular),
    entry("he", Capability::SUBJECT_PRONOUN, NumberClass::Singular),
    entry("she", Capability::SUBJECT_PRONOUN, NumberClass::Singular),
    entry("we", Capability::SUBJECT_PRONOUN, NumberClass::Plural),
    entry("they", Capability::SUBJECT_PRONOUN, NumberClass::Plural),
    entry("me", Capability::OBJECT_PRONOUN, NumberClass::Singular),
    entry("him", Capability::OBJECT_PRONOUN, NumberClass::Singular),
    entry("her", Capability::OBJECT_PRONOUN, NumberClass::Singular),
    entry("us", Capability::OBJECT_PRONOUN, NumberClass::Plural),
    entry("them", Capability::OBJECT_PRONOUN, NumberClass::Plural),
    entry(
        "it",
        Capability::SUBJECT_PRONOUN.union(Capability::OBJECT_PRONOUN),
        NumberClass::Singular,
    ),
    entry(
        "you",
        Capability::SUBJECT_PRONOUN.union(Capability::OBJECT_PRONOUN),
        NumberClass::Plural,
    ),

    // overrides for words the tagger habitually gets wrong
    entry("just", Capability::ADJ, NumberClass::Any),
    entry("kind", Capability::ADJ, NumberClass::Any),
    entry("like", Capability::VERB, NumberClass::Plural),
    entry(
        "made",
        Capability::VERB.union(Capability::PAST_TENSE),
        NumberClass::Any,
    ),
    entry("own", Capability::VERB, NumberClass::Plural),
    entry("thing", Capability::NOUN, NumberClass::Singular), // not a gerund, whatever the tagger thinks
    entry("way", Capability::NOUN, NumberClass::Singular),

    // determiners beyond the articles
    entry("this", Capability::DET, NumberClass::Singular),
    entry("that", Capability::DET, NumberClass::Singular),
    entry("another", Capability::DET, NumberClass::Singular),
    entry("each", Capability::DET, NumberClass::Singular),
    entry("every", Capability::DET, NumberClass::Singular),
    entry("no", Capability::DET, NumberClass::Singular),
    entry("these", Capability::DET, NumberClass::Plural),
    entry("those", Capability::DET, NumberClass::Plural),
    entry("all", Capability::DET, NumberClass::Plural),
    entry("both", Capability::DET, NumberClass::Plural),
    entry("few", Capability::DET, NumberClass::Plural),
    entry("many", Capability::DET, NumberClass::Plural),
    entry("most", Capability::DET, NumberClass::Plural),
    entry("other", Capability::DET, NumberClass::Plural),
    entry("several", Capability::DET, NumberClass::Plural),
    entry("some", Capability::DET, NumberClass::Plural),
    entry("such", Capability::DET, NumberClass::Plural),
];

/// Linear scan lookup; the table is a few dozen entries.
pub fn closed_class_entry(normal: &str) -> Option<&'static ClosedClassEntry> {
    CLOSED_CLASS.iter().find(|e| e.word == normal)
}

/// Words that reliably produce ungrammatical fragments when kept visible.
pub const DENYLIST: &[&str] = &[
    "also",
    "always",
    "anyone",
    "be",   // never wanted as the fragment's main verb
    "been", // ditto
    "else",
    "here",
    "maybe",
    "more",
    "much",
    "never", // TODO promote to a glue word alongside "not"
    "over",
    "really",
    "same",
    "so",
    "then",
    "there",
    "very",
    "which",
];

pub fn is_denylisted(normal: &str) -> bool {
    DENYLIST.contains(&normal)
}

/// Tag codes whose legal words are fully enumerable. Every member the
/// engine can use should already sit in CLOSED_CLASS; anything else with
/// one of these codes is rejected rather than guessed at.
pub const ENUMERATED_TAGS: &[&str] = &["CC", "DT", "PDT", "PP$", "PRP"];

/// Capability profile an open-class tag code maps to.
pub struct TagProfile {
    pub caps: Capability,
    pub number: NumberClass,
}

pub fn tag_profile(code: &str) -> Option<TagProfile> {
    let (caps, number) = match code {
        "JJ" => (Capability::ADJ, NumberClass::Any),
        "JJR" => (Capability::ADJ | Capability::COMPARATIVE, NumberClass::Any),
        "JJS" => (Capability::ADJ | Capability::SUPERLATIVE, NumberClass::Any),
        "MD" => (Capability::MODAL, NumberClass::Any),
        "NN" => (Capability::NOUN, NumberClass::Singular),
        "NNS" => (Capability::NOUN | Capability::PLURAL, NumberClass::Plural),
        "VB" => (Capability::VERB, NumberClass::Plural),
        "VBD" => (Capability::VERB | Capability::PAST_TENSE, NumberClass::Any),
        "VBG" => (Capability::GERUND, NumberClass::Any),
        "VBN" => (Capability::PAST_PARTICIPLE, NumberClass::Any),
        "VBP" => (Capability::VERB, NumberClass::Plural),
        "VBZ" => (Capability::VERB, NumberClass::Singular),
        _ => return None,
    };
    Some(TagProfile { caps, number })
}
