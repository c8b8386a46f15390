//! Service logic: catalog lookup, model adaptation and live prediction

pub mod threshold;
pub mod resolver;
pub mod model;
pub mod predictor;

pub use resolver::CatalogResolver;
pub use predictor::LivePredictor;
