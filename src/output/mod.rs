//! Output document writing
//!
//! The document is a header line, the rendered tree, a blank line, then one
//! block per selected file:
//!
//! ```text
//! File Tree:
//! ├─ src
//! │  └─ main.ts
//! └─ package.json
//!
//! ===== BEGIN src/main.ts =====
//! <content>
//!
//! ```

mod config;
mod writer;

pub use config::{
    DEFAULT_BEGIN_PREFIX, DEFAULT_END_PREFIX, DEFAULT_HEADER, DEFAULT_MARKER_SUFFIX, OutputConfig,
};
pub use writer::OutputWriter;
