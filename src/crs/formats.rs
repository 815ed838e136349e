//! Output formats for realm graphs
//!
//! - crs: the canonical realm string
//! - json, yaml: the edge and pair lists through serde
//! - treeviz: one line per realm, embedding shown as nesting

pub mod canonical;
pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use canonical::CrsFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
