//! Command handler modules for the twofold CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and stdin
//!   (`&mut dyn BufRead`) are passed as parameters
//! - Error propagation: all errors propagated via `CliError` enum

mod cfg;
mod play;
mod replay;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use sim::handle_sim_command;
