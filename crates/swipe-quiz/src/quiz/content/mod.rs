//! Static content tables consumed by the selection strategies.

pub mod combos;
pub mod legacy;
pub mod pools;
pub mod verify;

pub use combos::{combo_catalog, ComboProfile};
pub use legacy::LegacyCorpus;
pub use pools::{pool_option, AnswerPool, PoolCategory, PoolCorpus, QuestionStem};
pub use verify::{CorpusError, CorpusIssue};
