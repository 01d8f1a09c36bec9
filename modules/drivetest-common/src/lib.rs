pub mod config;
pub mod types;

pub use config::Config;
pub use types::{
    Criteria, CriteriaUpdate, Site, SiteUpdate, TestResult, TimeRange, TimeSeries, Trace,
};
