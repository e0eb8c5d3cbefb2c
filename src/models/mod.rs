//! Core data models for search requests, results and account quota.

mod quota;
mod search;

pub use quota::{PlanFeatures, QuotaCounters, QuotaInfo};
pub use search::{
    Language, SafeSearch, SearchData, SearchItem, SearchRequest, TimeRange, ValidationError,
};
