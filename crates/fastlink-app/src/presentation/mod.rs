pub mod bootstrap;
pub mod cli;
pub mod http_server;
