pub mod loggers;
pub mod trajectory_file;

pub use loggers::*;
pub use trajectory_file::*;
