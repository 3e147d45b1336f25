use wasm_bindgen::prelude::*;
use erasure_lexis::{classify, normalize};
use erasure_matcher::{build_catalog, select_and_mark, MatchConfig, Template};
use erasure_parser::{parser::split_with_spans, CompiledLexicon, Lexicon, NullLexicon};
use erasure_protocol::Lexicon as LexiconModel;
use serde::{Deserialize, Serialize};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One [text, tag] pair coming from the JavaScript tagger.
#[derive(Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

/// What the renderer needs per word: the surface text and keep/suppress.
#[derive(Serialize)]
pub struct MarkedWord {
    pub text: String,
    pub marked: bool,
}

/// The structured response sent back to JavaScript
#[derive(Serialize)]
pub struct PoemReport {
    /// False means no fragment was found; the page should leave the whole
    /// text visible.
    pub matched: bool,
    pub words: Vec<MarkedWord>,
}

/// The engine instance running in the browser.
///
/// Tagging stays on the JS side (the page already ships a tagger); this
/// owns tokenization, classification, matching, and selection. Rendering
/// stays in JS as well.
#[wasm_bindgen]
pub struct PoemEngine {
    catalog: Vec<Template>,
    // Raw binary of the compiled lexicon (loaded via fetch() in JS), if any
    lexicon_data: Option<Vec<u8>>,
    config: MatchConfig,
}

#[wasm_bindgen]
impl PoemEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(lexicon_data: Option<Vec<u8>>) -> Self {
        // In a production app, we would validate the RKYV archive here
        // using rkyv::check_archived_root
        Self {
            catalog: build_catalog(),
            lexicon_data,
            config: MatchConfig::default(),
        }
    }

    /// Whitespace tokenization with the engine's own rules, so the JS
    /// tagger sees exactly the tokens the classifier will.
    pub fn tokenize(&self, text: &str) -> Result<JsValue, JsValue> {
        let tokens: Vec<&str> = split_with_spans(text).into_iter().map(|t| t.text).collect();
        serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The Main Loop: tagged tokens -> classify -> match -> select -> JSON
    pub fn poemify_tagged(&self, tagged: JsValue) -> Result<JsValue, JsValue> {
        let tokens: Vec<TaggedToken> = serde_wasm_bindgen::from_value(tagged)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        // Zero-copy view of the compiled lexicon, when one was provided
        let lexicon: Box<dyn Lexicon + '_> = match &self.lexicon_data {
            Some(data) => {
                let archived = unsafe { rkyv::archived_root::<LexiconModel>(data) };
                Box::new(CompiledLexicon::new(archived))
            }
            None => Box::new(NullLexicon),
        };

        let mut words: Vec<_> = tokens
            .iter()
            .map(|t| {
                let candidates = lexicon.lookup(&normalize(&t.text));
                classify(&t.text, &t.tag, &candidates)
            })
            .collect();

        let mut rng = rand::thread_rng();
        let matched = select_and_mark(&mut words, &self.catalog, &self.config, &mut rng);

        let report = PoemReport {
            matched,
            words: words
                .into_iter()
                .map(|w| MarkedWord {
                    text: w.text,
                    marked: w.marked,
                })
                .collect(),
        };

        serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
