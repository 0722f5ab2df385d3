pub mod logger;
pub mod segregation;

pub use logger::*;
pub use segregation::*;
