pub mod portfolio;
pub mod trend;
