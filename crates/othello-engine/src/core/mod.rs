pub use self::{board::*, rules::*};

pub(crate) mod board;
pub(crate) mod rules;
