//! JS bindings for the glossary.
//!
//! `GlossaryCortex` shares its `Glossary` through `Rc<RefCell<_>>` so the
//! async `load()` can fetch without holding a borrow across an await; query
//! methods stay usable while a load is in flight and see the previous state.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use crate::error::FetchError;
use crate::glossary::{fetch_first, Category, Glossary, GlossaryConfig, TermSource};

// =============================================================================
// Browser fetch
// =============================================================================

/// `TermSource` backed by `window.fetch`.
pub struct BrowserFetchSource;

fn network_error(value: JsValue) -> FetchError {
    FetchError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl TermSource for BrowserFetchSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Network("no window object".to_string()))?;

        let response: web_sys::Response = JsFuture::from(window.fetch_with_str(location))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        body.as_string()
            .ok_or_else(|| FetchError::Network("response body is not text".to_string()))
    }
}

// =============================================================================
// GlossaryCortex
// =============================================================================

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(v) => v,
        Err(e) => {
            log::error!("[GlossaryCortex] Serialization failed: {:?}", e);
            JsValue::NULL
        }
    }
}

/// Glossary index + term highlighter for the host page
#[wasm_bindgen]
pub struct GlossaryCortex {
    inner: Rc<RefCell<Glossary>>,
}

#[wasm_bindgen]
impl GlossaryCortex {
    /// Create a glossary with optional configuration
    ///
    /// # Arguments
    /// * `config` - Optional `{ sources?: string[], draft_marker?: string }`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlossaryCortex, JsValue> {
        let config: GlossaryConfig = if config.is_null() || config.is_undefined() {
            GlossaryConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner: Rc::new(RefCell::new(Glossary::new(config))),
        })
    }

    /// Fetch and index the glossary. Resolves to the term count.
    ///
    /// Never rejects: if every source fails the glossary is loaded empty.
    /// Overlapping calls each fetch, but only the first to finish installs.
    #[wasm_bindgen]
    pub fn load(&self) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);

        future_to_promise(async move {
            if !inner.borrow().index().is_loaded() {
                let sources = inner.borrow().config().sources.clone();
                let fetched = fetch_first(&BrowserFetchSource, &sources).await;

                let mut glossary = inner.borrow_mut();
                if glossary.index().is_loaded() {
                    log::debug!("[GlossaryCortex] Discarding duplicate load result");
                } else {
                    glossary.install_fetched(fetched);
                }
            }

            let count = inner.borrow().index().len();
            Ok(JsValue::from_f64(count as f64))
        })
    }

    /// Load from CSV text the host already has (replaces any loaded glossary)
    #[wasm_bindgen(js_name = loadFromText)]
    pub fn load_from_text(&self, raw: &str) -> usize {
        self.inner.borrow_mut().load_from_str(raw).len()
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.inner.borrow().index().is_loaded()
    }

    #[wasm_bindgen(js_name = termCount)]
    pub fn term_count(&self) -> usize {
        self.inner.borrow().index().len()
    }

    #[wasm_bindgen(js_name = clearCache)]
    pub fn clear_cache(&self) {
        self.inner.borrow_mut().clear_cache();
    }

    /// Term by id, or `null`
    #[wasm_bindgen(js_name = getById)]
    pub fn get_by_id(&self, id: &str) -> JsValue {
        match self.inner.borrow().index().get_by_id(id) {
            Some(term) => to_js(term),
            None => JsValue::NULL,
        }
    }

    /// Term by display name or alias (any case), or `null`
    #[wasm_bindgen(js_name = findByWord)]
    pub fn find_by_word(&self, word: &str) -> JsValue {
        match self.inner.borrow().index().find_by_word(word) {
            Some(term) => to_js(term),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen(js_name = isKnownWord)]
    pub fn is_known_word(&self, word: &str) -> bool {
        self.inner.borrow().index().is_known_word(word)
    }

    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> JsValue {
        to_js(&self.inner.borrow().index().search(query))
    }

    /// Terms with the given category label; unknown labels give `[]`
    #[wasm_bindgen(js_name = byCategory)]
    pub fn by_category(&self, label: &str) -> JsValue {
        let glossary = self.inner.borrow();
        match Category::from_label(label) {
            Some(category) => to_js(&glossary.index().by_category(category)),
            None => to_js(&Vec::<()>::new()),
        }
    }

    #[wasm_bindgen(js_name = allCategories)]
    pub fn all_categories(&self) -> JsValue {
        to_js(&self.inner.borrow().index().all_categories())
    }

    #[wasm_bindgen(js_name = allWords)]
    pub fn all_words(&self) -> JsValue {
        to_js(&self.inner.borrow().index().all_words())
    }

    /// Loaded terms referenced by `id`'s related list
    #[wasm_bindgen]
    pub fn related(&self, id: &str) -> JsValue {
        to_js(&self.inner.borrow().index().related(id))
    }

    /// Definition for display (draft marker removed), or `undefined`
    #[wasm_bindgen(js_name = displayDefinition)]
    pub fn display_definition(&self, id: &str) -> Option<String> {
        let glossary = self.inner.borrow();
        glossary
            .index()
            .get_by_id(id)
            .map(|term| glossary.display_definition(term).to_string())
    }

    /// Split text into `{ kind: "literal" | "term", text, term? }` segments
    #[wasm_bindgen]
    pub fn segment(&self, text: &str) -> JsValue {
        to_js(&self.inner.borrow().segment(text))
    }

    /// Distinct terms mentioned in text
    #[wasm_bindgen]
    pub fn mentions(&self, text: &str) -> JsValue {
        to_js(&self.inner.borrow().mentions(text))
    }

    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> JsValue {
        to_js(&self.inner.borrow().stats())
    }
}
