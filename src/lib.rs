pub mod analyzer;
pub mod args;
pub mod business;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod patterns;
pub mod record;
pub mod site_config;
pub mod synth;
pub mod utils;

pub use analyzer::{analyze, Analyzer};
pub use args::Args;
pub use business::BusinessInput;
pub use defaults::{init_default_tables, load_default_tables, DefaultTables};
pub use error::{Error, Result};
pub use patterns::PatternLibrary;
pub use record::AnalysisRecord;
pub use site_config::ConfigDocument;
pub use synth::{synthesize, Synthesizer};
