pub mod check;
pub mod command_result;
pub mod init;

pub use command_result::{CheckSummary, CommandResult, CommandSummary, InitSummary};
