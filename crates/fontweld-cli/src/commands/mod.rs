//! One module per subcommand

pub mod apply;
pub mod generate;
pub mod info;
pub mod tags;
