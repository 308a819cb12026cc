pub mod estimate;
pub mod path_matrix;
pub mod risk_metrics;
pub mod rounding;
pub mod simulation_report;

pub use estimate::DriftVolEstimate;
pub use path_matrix::PathMatrix;
pub use risk_metrics::{DistributionSummary, RiskMetrics};
pub use simulation_report::SimulationReport;
