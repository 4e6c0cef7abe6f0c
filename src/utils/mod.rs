pub mod timer;

pub use timer::{FixedTimer, RunningTimer, SystemTimer, Timer};
