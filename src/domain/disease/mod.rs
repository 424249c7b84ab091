pub mod model;
pub mod notifier;

pub use model::DiseaseWarningRequest;
pub use notifier::DiseaseNotifier;
