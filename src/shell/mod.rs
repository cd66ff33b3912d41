// Composition root for the users bounded context.
//
// Responsibilities
// - Read config from the environment and the command line.
// - Instantiate the file backed store and wire it into the form controller.
// - Render controller state for the terminal.

pub mod cli;
pub mod config;
pub mod render;
