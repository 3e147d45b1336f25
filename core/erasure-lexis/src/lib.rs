pub mod tables;

use erasure_protocol::{Capability, InitialSound, NumberClass, Word};
use tables::{closed_class_entry, is_denylisted, tag_profile, ENUMERATED_TAGS};

/// Lowercase a surface form and strip everything that is not a letter,
/// digit, or whitespace. This is the form used for every table lookup.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

fn is_blank(normal: &str) -> bool {
    normal.chars().all(char::is_whitespace)
}

fn should_ignore(text: &str, normal: &str) -> bool {
    is_denylisted(normal)
        || is_blank(normal)
        || text.contains('\'')
        || text.contains('’')
        || text.contains('—')
}

/// Turn one externally tagged token into a `Word`.
///
/// Pure function of `(text, source_tag, lex_candidates)`; words the engine
/// cannot place end up with an empty capability set, which excludes them
/// from every template without ever being an error.
pub fn classify(text: &str, source_tag: &str, lex_candidates: &[String]) -> Word {
    let normal = normalize(text);
    let mut word = Word {
        text: text.to_string(),
        normal,
        source_tag: source_tag.to_string(),
        caps: Capability::empty(),
        number: NumberClass::Any,
        initial: InitialSound::Any,
        first_person_copula: false,
        marked: false,
    };

    if should_ignore(text, &word.normal) {
        // denylisted or degenerate surface forms never enter a match
    } else if let Some(entry) = closed_class_entry(&word.normal) {
        word.caps = entry.caps;
        word.number = entry.number;
        word.initial = entry.initial;
        word.first_person_copula = entry.first_person_copula;
    } else if ENUMERATED_TAGS.contains(&source_tag) {
        // A fully enumerated closed class should already be covered by the
        // curated table, so an unknown member is rejected, not guessed at.
    } else {
        // The lexicon outranks the tagger: if the tagger's code is not
        // among the candidates, take the lexicon's primary suggestion.
        let effective = if !lex_candidates.is_empty()
            && !lex_candidates.iter().any(|c| c == source_tag)
        {
            lex_candidates[0].as_str()
        } else {
            source_tag
        };
        match tag_profile(effective) {
            Some(profile) => {
                word.caps = profile.caps;
                word.number = profile.number;
            }
            None => {
                tracing::debug!(token = text, tag = effective, "unrecognized tag code");
            }
        }
    }

    // Bare verb forms are number-agnostic and double as infinitives after
    // a modal.
    if word.caps.contains(Capability::VERB) && word.number == NumberClass::Plural {
        word.caps |= Capability::INFINITIVE;
    }

    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify_bare(text: &str, tag: &str) -> Word {
        classify(text, tag, &[])
    }

    #[test]
    fn test_articles_carry_their_constraints() {
        let a = classify_bare("a", "DT");
        assert_eq!(a.caps, Capability::DET | Capability::ARTICLE);
        assert_eq!(a.number, NumberClass::Singular);
        assert_eq!(a.initial, InitialSound::Consonant);

        let an = classify_bare("an", "DT");
        assert_eq!(an.initial, InitialSound::Vowel);

        let the = classify_bare("The", "DT");
        assert_eq!(the.caps, Capability::DET | Capability::ARTICLE);
        assert_eq!(the.number, NumberClass::Any);
        assert_eq!(the.initial, InitialSound::Any);
    }

    #[test]
    fn test_first_person_copulas() {
        let am = classify_bare("am", "VBP");
        assert_eq!(am.caps, Capability::COPULA);
        assert_eq!(am.number, NumberClass::FirstSingular);
        assert!(am.first_person_copula);

        let was = classify_bare("was", "VBD");
        assert!(was.first_person_copula);
        assert_eq!(was.number, NumberClass::Singular);

        let is = classify_bare("is", "VBZ");
        assert!(!is.first_person_copula);
    }

    #[test]
    fn test_denylist_and_degenerate_forms() {
        assert!(classify_bare("never", "RB").caps.is_empty());
        assert!(classify_bare("be", "VB").caps.is_empty());
        assert!(classify_bare("don't", "VB").caps.is_empty());
        assert!(classify_bare("it’s", "PRP").caps.is_empty());
        assert!(classify_bare("well—almost", "RB").caps.is_empty());
        assert!(classify_bare("", "NN").caps.is_empty());
        assert!(classify_bare("?!", "NN").caps.is_empty());
    }

    #[test]
    fn test_open_class_mappings() {
        let foxes = classify_bare("foxes", "NNS");
        assert_eq!(foxes.caps, Capability::NOUN | Capability::PLURAL);
        assert_eq!(foxes.number, NumberClass::Plural);

        // base verb forms pick up the infinitive label
        let run = classify_bare("run", "VB");
        assert_eq!(run.caps, Capability::VERB | Capability::INFINITIVE);
        assert_eq!(run.number, NumberClass::Plural);

        // past tense carries no definite number, so no infinitive either
        let ran = classify_bare("ran", "VBD");
        assert_eq!(ran.caps, Capability::VERB | Capability::PAST_TENSE);
        assert_eq!(ran.number, NumberClass::Any);

        let faster = classify_bare("faster", "JJR");
        assert_eq!(faster.caps, Capability::ADJ | Capability::COMPARATIVE);
    }

    #[test]
    fn test_unknown_closed_class_member_is_rejected() {
        // "thy" is possessive, but the curated table does not know it
        assert!(classify_bare("thy", "PP$").caps.is_empty());
        assert!(classify_bare("neither", "CC").caps.is_empty());
    }

    #[test]
    fn test_unknown_tag_code_is_rejected() {
        assert!(classify_bare("bonjour", "FW").caps.is_empty());
    }

    #[test]
    fn test_curated_table_outranks_the_tagger() {
        // "like" is forced to a bare verb regardless of the tagger's code
        let like = classify_bare("like", "VBZ");
        assert_eq!(like.caps, Capability::VERB | Capability::INFINITIVE);
        assert_eq!(like.number, NumberClass::Plural);

        let thing = classify_bare("thing", "VBG");
        assert_eq!(thing.caps, Capability::NOUN);
    }

    #[test]
    fn test_lexicon_corrects_the_tagger() {
        // tagger says noun, lexicon has never heard of that reading
        let racing = classify("racing", "NN", &["VBG".to_string()]);
        assert_eq!(racing.caps, Capability::GERUND);

        // tagger's code is among the candidates, so it stands
        let racing = classify("racing", "NN", &["NN".to_string(), "VBG".to_string()]);
        assert_eq!(racing.caps, Capability::NOUN);
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Race!"), "race");
        assert_eq!(normalize(" Mixed3Case? "), "mixed3case");
        assert_eq!(normalize("—"), "");
    }

    proptest! {
        #[test]
        fn classification_is_pure(
            text in "[A-Za-z'’—]{0,12}",
            tag in "(NN|NNS|VB|VBZ|VBG|JJ|MD|CC|XX)",
            candidates in proptest::collection::vec("(NN|VB|JJ)", 0..3),
        ) {
            let cands: Vec<String> = candidates;
            let first = classify(&text, &tag, &cands);
            let second = classify(&text, &tag, &cands);
            prop_assert_eq!(first.caps, second.caps);
            prop_assert_eq!(first.number, second.number);
            prop_assert_eq!(first.initial, second.initial);
            prop_assert_eq!(first.normal, second.normal);
            prop_assert!(!first.marked && !second.marked);
        }

        #[test]
        fn plural_verbs_always_double_as_infinitives(
            text in "[a-z]{1,10}",
            tag in "(VB|VBP|VBZ|VBD|NN)",
        ) {
            let word = classify(&text, &tag, &[]);
            if word.caps.contains(Capability::VERB) && word.number == NumberClass::Plural {
                prop_assert!(word.caps.contains(Capability::INFINITIVE));
            }
        }

        #[test]
        fn normalized_forms_stay_in_charset(text in "\\PC{0,16}") {
            let normal = normalize(&text);
            prop_assert!(normal
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace()));
        }
    }
}
