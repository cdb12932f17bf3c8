//! Compile-and-run pipeline
//!
//! Strictly sequential: the compiler runs first, its combined output is
//! relayed line by line into the console pane, and only a zero exit starts
//! the produced binary. A cancellation token lets the user kill whichever
//! subprocess is current.

pub mod console;
pub mod pipeline;
mod worker;

pub use console::Console;
pub use pipeline::{BuildEvent, BuildPhase, BuildPipeline};
