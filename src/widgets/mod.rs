mod buttons;
pub use buttons::*;

mod confirm;
pub use confirm::*;

mod labels;
pub use labels::*;

mod stacks;
pub use stacks::*;
