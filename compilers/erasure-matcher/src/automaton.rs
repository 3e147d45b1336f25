use erasure_protocol::{Capability, InitialSound, NumberClass, TemplateId, Word, WordId};

use crate::catalog::Template;

/// Progress of one automaton through its template's spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    MatchingSubject,
    MatchingVerb,
    MatchingObject,
    Complete,
}

/// One live attempt to satisfy one template against the word sequence.
///
/// Each state owns its phase, slot, agreement constraints, and accepted
/// words outright; the only shared data is the read-only catalog. A state
/// that rejects a word is dead, never revisited.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub template: TemplateId,
    pub phase: Phase,
    /// Index into the current phase's shape sequence.
    pub slot: usize,
    /// Constraints inherited from the most recently accepted word.
    pub required_number: NumberClass,
    pub required_initial: InitialSound,
    /// Positions of the words consumed so far, in order.
    pub accepted: Vec<WordId>,
}

impl MatchState {
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            phase: Phase::MatchingSubject,
            slot: 0,
            required_number: NumberClass::Any,
            required_initial: InitialSound::Any,
            accepted: Vec::new(),
        }
    }

    fn shape<'t>(&self, template: &'t Template) -> &'t [Capability] {
        match self.phase {
            Phase::MatchingSubject => template.subject,
            Phase::MatchingVerb => template.verb,
            Phase::MatchingObject => template.object,
            Phase::Complete => &[],
        }
    }

    /// Capability the next word must hold, or None once complete.
    pub fn target(&self, template: &Template) -> Option<Capability> {
        self.shape(template).get(self.slot).copied()
    }

    /// Structural acceptance check for one word: capability, number
    /// agreement, and initial-sound agreement. The stochastic draw is the
    /// caller's business.
    pub fn admits(&self, template: &Template, word: &Word) -> bool {
        match self.target(template) {
            Some(capability) => {
                word.caps.contains(capability)
                    && number_compatible(word, self.required_number, capability)
                    && initial_compatible(word, self.required_initial)
            }
            None => false,
        }
    }

    /// Consume an admitted word: inherit its agreement constraints, then
    /// move across phase boundaries. Entering the object span resets the
    /// number constraint; exhausting the object span, empty spans
    /// included, completes the state.
    pub fn advance(&mut self, template: &Template, index: WordId, word: &Word) {
        self.accepted.push(index);
        self.slot += 1;

        // The initial-sound constraint only ever reaches one word ahead.
        self.required_initial = word.initial;
        if word.number != NumberClass::Any {
            self.required_number = word.number;
        }

        while self.phase != Phase::Complete && self.slot >= self.shape(template).len() {
            self.slot = 0;
            self.phase = match self.phase {
                Phase::MatchingSubject => Phase::MatchingVerb,
                Phase::MatchingVerb => Phase::MatchingObject,
                Phase::MatchingObject | Phase::Complete => Phase::Complete,
            };
            if self.phase == Phase::MatchingObject {
                // object agreement is independent of the subject/verb span
                self.required_number = NumberClass::Any;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}

fn number_compatible(word: &Word, required: NumberClass, target: Capability) -> bool {
    if required == NumberClass::Any || word.number == NumberClass::Any {
        return true;
    }
    if required == NumberClass::FirstSingular {
        // "I" takes "am"/"was" as copula and plural forms everywhere else.
        return if target == Capability::COPULA {
            word.first_person_copula
        } else {
            word.number == NumberClass::Plural
        };
    }
    word.number == required
}

fn initial_compatible(word: &Word, required: InitialSound) -> bool {
    required == InitialSound::Any || InitialSound::of_word(&word.normal) == required
}
