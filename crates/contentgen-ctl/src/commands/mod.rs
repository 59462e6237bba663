//! Command handlers for the contentgen CLI.

pub(crate) mod generate;

pub(crate) use generate::handle_generate_command;
