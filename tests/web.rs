//! Browser-side checks for the JS surface. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use termcore::GlossaryCortex;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const CSV: &str = "\
id,term,definition,category,source,needs_review,aliases,related_terms,image_url
permit,Permit,Official approval,Documents,industry,false,PW1,building_permit,
building_permit,Building Permit,[AI-DRAFT] Permit to build,Documents,game,true,BP,permit,
";

#[wasm_bindgen_test]
fn test_load_from_text_and_lookup() {
    let glossary = GlossaryCortex::new(JsValue::NULL).unwrap();
    assert_eq!(glossary.load_from_text(CSV), 2);
    assert!(glossary.is_loaded());
    assert!(glossary.is_known_word("pw1"));
    assert!(glossary.get_by_id("missing").is_null());
    assert_eq!(
        glossary.display_definition("building_permit").as_deref(),
        Some("Permit to build")
    );
}

#[wasm_bindgen_test]
fn test_segment_returns_array() {
    let glossary = GlossaryCortex::new(JsValue::NULL).unwrap();
    glossary.load_from_text(CSV);

    let segments = js_sys::Array::from(&glossary.segment("Apply for a building permit today"));
    assert_eq!(segments.length(), 3);
}

#[wasm_bindgen_test]
fn test_clear_cache() {
    let glossary = GlossaryCortex::new(JsValue::NULL).unwrap();
    glossary.load_from_text(CSV);
    glossary.clear_cache();
    assert!(!glossary.is_loaded());
    assert!(glossary.find_by_word("permit").is_null());
}
