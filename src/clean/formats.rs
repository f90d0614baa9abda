//! Output formats for CLEAN trees
//!
//! - `akn` - Akoma Ntoso XML, the conversion target
//! - `treeviz` - a box-drawing tree for inspecting parse results

pub mod akn;
pub mod treeviz;

pub use akn::{escape_xml, generate_act, AKN_NAMESPACE};
pub use treeviz::to_treeviz_str;
