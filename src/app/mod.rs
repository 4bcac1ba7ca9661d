pub mod api;
pub mod cli;
pub mod commands;
pub mod composer;
pub mod generation_client;
pub mod logging;
