pub mod advocate;
pub mod specialty;

pub use advocate::*;
pub use specialty::*;
