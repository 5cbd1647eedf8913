// Loading template parameters from configuration files

pub mod parameter_file;

pub use parameter_file::{load_parameters, parse_parameters, ParameterFormat};
