pub mod advocate;
pub mod enums;
pub mod filters;
pub mod specialty;

pub use advocate::*;
pub use enums::*;
pub use filters::*;
pub use specialty::*;
