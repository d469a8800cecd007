pub mod encoder;
pub mod initializer;
pub mod preset_matcher;
pub mod static_catalogs;
pub mod validation;

pub use validation::OptionValidator;
