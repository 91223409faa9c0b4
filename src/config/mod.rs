/// Main configuration module.
///
/// Re-exports submodules for gameplay, anti-spam and server configuration.
pub mod game;
pub mod anti_spam;
pub mod server;
