pub mod key_codes;
pub mod modifiers;
pub mod mapping;

pub use key_codes::*;
pub use modifiers::*;
pub use mapping::*;
