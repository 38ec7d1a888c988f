pub mod legacy;
pub mod pool;

pub use legacy::{
    rank_pairs_by_ambiguity, secondary_candidates, select_phase1_question,
    select_phase2_question, select_phase3_question,
};
pub use pool::{pick_options, select_pool_question, stem_text, update_pool_session, PoolSession};
