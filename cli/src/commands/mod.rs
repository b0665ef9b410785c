//! CLI command implementations

pub mod generate;
pub mod interactive;
pub mod navigate;
pub mod routes;

pub use generate::generate_command;
pub use interactive::interactive_command;
pub use navigate::navigate_command;
pub use routes::routes_command;
