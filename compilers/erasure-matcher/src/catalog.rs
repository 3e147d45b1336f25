use erasure_protocol::Capability;

/// One candidate clause shape: ordered capability requirements for the
/// subject, verb, and object spans. The object span may be empty.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub subject: &'static [Capability],
    pub verb: &'static [Capability],
    pub object: &'static [Capability],
}

impl Template {
    /// Number of words a completed match of this template consumes.
    pub fn word_count(&self) -> usize {
        self.subject.len() + self.verb.len() + self.object.len()
    }
}

const SUBJECT_SHAPES: &[&[Capability]] = &[
    // the subject...
    &[Capability::DET, Capability::NOUN],
    // the adjective subject...
    &[Capability::DET, Capability::ADJ, Capability::NOUN],
    // subjects...
    &[Capability::PLURAL],
    // adjective subjects...
    &[Capability::ADJ, Capability::PLURAL],
    // subjects and subjects...
    &[Capability::PLURAL, Capability::AND, Capability::PLURAL],
    // the subjects and subjects...
    &[
        Capability::DET,
        Capability::PLURAL,
        Capability::AND,
        Capability::PLURAL,
    ],
    // Max...
    &[Capability::PERSON],
    // I...
    &[Capability::SUBJECT_PRONOUN],
];

struct VerbObjectShape {
    verb: &'static [Capability],
    object: &'static [Capability],
}

const fn vo(
    verb: &'static [Capability],
    object: &'static [Capability],
) -> VerbObjectShape {
    VerbObjectShape { verb, object }
}

const VERB_OBJECT_SHAPES: &[VerbObjectShape] = &[
    // ...is adjective
    vo(&[Capability::COPULA], &[Capability::ADJ]),
    // ...is adjective and adjective
    vo(
        &[Capability::COPULA],
        &[Capability::ADJ, Capability::AND, Capability::ADJ],
    ),
    // ...is not adjective
    vo(&[Capability::COPULA], &[Capability::NOT, Capability::ADJ]),
    // ...is adjective but adjective
    vo(
        &[Capability::COPULA],
        &[Capability::ADJ, Capability::BUT, Capability::ADJ],
    ),
    // ...is adjective but not adjective
    vo(
        &[Capability::COPULA],
        &[
            Capability::ADJ,
            Capability::BUT,
            Capability::NOT,
            Capability::ADJ,
        ],
    ),
    // ...is verbing
    vo(&[Capability::COPULA], &[Capability::GERUND]),
    // ...is the object
    vo(
        &[Capability::COPULA],
        &[Capability::ARTICLE, Capability::NOUN],
    ),
    // ...can verb
    vo(&[Capability::MODAL, Capability::INFINITIVE], &[]),
    // ...can verb the object
    vo(
        &[Capability::MODAL, Capability::INFINITIVE],
        &[Capability::ARTICLE, Capability::NOUN],
    ),
    // ...verbs the object
    vo(&[Capability::VERB], &[Capability::ARTICLE, Capability::NOUN]),
    // ...verbs the adjective object
    vo(
        &[Capability::VERB],
        &[Capability::ARTICLE, Capability::ADJ, Capability::NOUN],
    ),
    // ...verbs objects
    vo(&[Capability::VERB], &[Capability::PLURAL]),
    // ...verbs adjective objects
    vo(&[Capability::VERB], &[Capability::ADJ, Capability::PLURAL]),
    // ...verbs objects and objects
    vo(
        &[Capability::VERB],
        &[Capability::PLURAL, Capability::AND, Capability::PLURAL],
    ),
    // ...verbs the objects and objects
    vo(
        &[Capability::VERB],
        &[
            Capability::DET,
            Capability::PLURAL,
            Capability::AND,
            Capability::PLURAL,
        ],
    ),
    // ...verbs Max
    vo(&[Capability::VERB], &[Capability::PERSON]),
    // ...verbs me
    vo(&[Capability::VERB], &[Capability::OBJECT_PRONOUN]),
];

/// Cross product of the subject shapes and the verb/object shapes, in
/// subject-major order. Built once at startup, deterministic, and shared
/// read-only across every matching attempt.
pub fn build_catalog() -> Vec<Template> {
    let mut templates = Vec::with_capacity(SUBJECT_SHAPES.len() * VERB_OBJECT_SHAPES.len());
    for subject in SUBJECT_SHAPES {
        for shape in VERB_OBJECT_SHAPES {
            templates.push(Template {
                subject,
                verb: shape.verb,
                object: shape.object,
            });
        }
    }
    templates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_the_full_cross_product() {
        let catalog = build_catalog();
        assert_eq!(catalog.len(), 8 * 17);
    }

    #[test]
    fn test_catalog_is_subject_major() {
        let catalog = build_catalog();

        // first block shares the first subject shape...
        for template in &catalog[..17] {
            assert_eq!(template.subject, SUBJECT_SHAPES[0]);
        }
        // ...and walks the verb/object shapes in declaration order
        assert_eq!(catalog[0].verb, &[Capability::COPULA]);
        assert_eq!(catalog[0].object, &[Capability::ADJ]);
        assert_eq!(catalog[17].subject, SUBJECT_SHAPES[1]);
    }

    #[test]
    fn test_word_counts() {
        let catalog = build_catalog();
        // [Det, Noun] / [Copula] / [Adj]
        assert_eq!(catalog[0].word_count(), 4);
        // the modal shape carries no object span at all
        let bare_modal = catalog
            .iter()
            .find(|t| t.object.is_empty())
            .expect("catalog has an object-less shape");
        assert_eq!(bare_modal.verb.len(), 2);
    }
}
