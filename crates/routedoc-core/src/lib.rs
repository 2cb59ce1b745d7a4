pub mod compile;
pub mod config;
pub mod document;
pub mod error;
pub mod generate;
pub mod merge;
pub mod output;
pub mod reduce;
pub mod serialize;
pub mod status;
pub mod tree;

pub use document::SpecDocument;
pub use generate::{RouteDump, generate, run_pass};
pub use merge::merge;
pub use serialize::{Format, deserialize, serialize};
