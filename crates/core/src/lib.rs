#![forbid(unsafe_code)]

pub mod catalog;
pub mod grading;
pub mod model;
pub mod progress;
pub mod remix;
pub mod time;

pub use catalog::{Catalog, CatalogError, Direction, PartGroup};
pub use progress::{Completion, MasteryBand, OverallProgress, ProgressStore, SectionProgress};
pub use remix::remix;
pub use time::Clock;
