//! RPC endpoint probing, scoring and selection

mod head;
mod prober;
mod score;
mod selector;

#[cfg(test)]
pub(crate) mod testing;

pub use head::{parse_block_number, BLOCK_NUMBER_METHOD, UNKNOWN_HEAD};
pub use prober::{
    parse_response, request_body, HttpProber, ProbeError, ProbeOutcome, Prober, DEFAULT_TIMEOUT,
    USER_AGENT,
};
pub use score::{score_outcome, ScoredEndpoint};
pub use selector::Selector;
