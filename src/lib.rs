//! # clean
//!
//! A converter from CLEAN, a plain-text format for legislation, to Akoma Ntoso
//! XML.
//!
//! ```rust
//! let xml = clean::clean::generate_akn("Short Act\n\n1. The only section.\n").unwrap();
//! assert!(xml.contains(r#"<section eId="sec_1">"#));
//! ```
//!
//! ## Testing
//!
//! Parser tests use the sample documents under `docs/samples/` and the fluent
//! assertions in the [testing module](clean::testing).

pub mod clean;
