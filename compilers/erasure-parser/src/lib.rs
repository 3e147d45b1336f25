pub mod parser;
pub mod token;

use erasure_lexis::{classify, normalize};
use erasure_protocol::{Lexicon as LexiconModel, Word};
use rkyv::Archived;
use thiserror::Error;

use crate::parser::split_with_spans;

/// External part-of-speech tagger. Must be deterministic for identical
/// input tokens; all randomness in the system lives in the matcher.
pub trait Tagger {
    /// One code per token, in token order.
    fn tag(&self, tokens: &[&str]) -> Vec<String>;
}

/// External word-to-tags dictionary used to second-guess the tagger.
pub trait Lexicon {
    /// Candidate codes for a normalized form; empty means unknown.
    fn lookup(&self, normal: &str) -> Vec<String>;
}

/// Lexicon with no entries; every word keeps the tagger's code.
pub struct NullLexicon;

impl Lexicon for NullLexicon {
    fn lookup(&self, _normal: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Zero-copy adapter over a lexicon compiled by anthology-compiler.
pub struct CompiledLexicon<'a> {
    lexicon: &'a Archived<LexiconModel>,
}

impl<'a> CompiledLexicon<'a> {
    pub fn new(lexicon: &'a Archived<LexiconModel>) -> Self {
        Self { lexicon }
    }
}

impl Lexicon for CompiledLexicon<'_> {
    /// Linear scan, exact match. Consulted once per word; swap in a hash
    /// or FST lookup if this ever shows up in a profile.
    fn lookup(&self, normal: &str) -> Vec<String> {
        for entry in self.lexicon.entries.iter() {
            if entry.word.as_str() == normal {
                return entry.tags.iter().map(|t| t.as_str().to_string()).collect();
            }
        }
        Vec::new()
    }
}

#[derive(Debug, Error)]
pub enum WordifyError {
    /// The tagger broke its contract and returned a different arity than
    /// it was given.
    #[error("tagger returned {got} codes for {expected} tokens")]
    TagCountMismatch { expected: usize, got: usize },
}

/// Primary entry point of the front end: raw text to classified words,
/// in source order.
pub fn wordify<T: Tagger, L: Lexicon>(
    text: &str,
    tagger: &T,
    lexicon: &L,
) -> Result<Vec<Word>, WordifyError> {
    let tokens = split_with_spans(text);
    let surfaces: Vec<&str> = tokens.iter().map(|t| t.text).collect();

    let tags = tagger.tag(&surfaces);
    if tags.len() != surfaces.len() {
        return Err(WordifyError::TagCountMismatch {
            expected: surfaces.len(),
            got: tags.len(),
        });
    }

    let words = surfaces
        .iter()
        .zip(tags.iter())
        .map(|(surface, tag)| {
            let candidates = lexicon.lookup(&normalize(surface));
            classify(surface, tag, &candidates)
        })
        .collect();

    Ok(words)
}
