pub mod assessor;
pub mod orchestrator;
pub mod tabayyun;

pub use assessor::Assessor;
pub use orchestrator::AssessmentOrchestrator;
pub use orchestrator::AssessmentState;
pub use orchestrator::ContinueAction;
pub use tabayyun::RunOptions;
pub use tabayyun::Tabayyun;
