pub use descriptive::SummaryStatistics;

mod descriptive;
