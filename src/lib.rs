//! TermCore: Construction Glossary Index + Term Highlighter
//!
//! A Rust/WASM implementation of the glossary panel's data core.
//!
//! # Architecture
//!
//! ## Glossary Components
//! - `term.rs` - Term records, closed `Category` set, `Provenance`
//! - `parser.rs` - Quote-aware CSV row parsing with per-field defaults
//! - `source.rs` - `TermSource` fetch capability + candidate fallback
//! - `index.rs` - TermIndex: by-id / by-word lookup, search, filters
//! - `facade.rs` - Glossary: index and matcher kept in step
//!
//! ## Highlighting
//! - `matcher.rs` - TextMatcher: whole-word, longest-first, case-insensitive
//!   segmentation of free text
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { GlossaryCortex } from 'termcore';
//!
//! await init();
//!
//! const glossary = new GlossaryCortex({ sources: ['/data/glossary.csv', './glossary.csv'] });
//! await glossary.load();
//!
//! glossary.findByWord('co');          // Certificate of Occupancy
//! glossary.search('permit');          // name, alias or definition hits
//! glossary.segment('Apply for a building permit today');
//! // [{ kind: 'literal', text: 'Apply for a ' },
//! //  { kind: 'term', text: 'building permit', term: {...} },
//! //  { kind: 'literal', text: ' today' }]
//! ```

pub mod error;
pub mod glossary;
pub mod logging;
pub mod matcher;
pub mod wasm;

// Public exports - Glossary
pub use error::*;
pub use glossary::*;

// Public exports - Highlighting
pub use matcher::*;

pub use wasm::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init_console_logging(log::LevelFilter::Info);
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("termcore v{}", env!("CARGO_PKG_VERSION"))
}
