pub mod lexicon;
pub mod model;
pub mod stats;
pub mod status;
pub mod vocabulary;

pub use lexicon::{
    DefProperties, FlatField, FlatFields, Lexicon, LexiconDef, LexiconObject, LexiconProperty,
};
pub use model::ModelConfig;
pub use stats::{GlobalStats, ModelStats, format_pct};
pub use status::{AlignmentStatus, GbifStatus};
pub use vocabulary::{DEFAULT_CLASS_GROUP, TermCatalog, VocabularyTerm};
