//! Running Temporal Fast Downward as an external process and turning its
//! plan files back into plans over the original problem.

pub mod config;
pub use config::*;

pub mod invoker;
pub use invoker::*;

pub mod plan_parser;

pub mod reconstruct;
pub use reconstruct::*;

pub mod status;
pub use status::*;

pub mod planner;
pub use planner::*;
