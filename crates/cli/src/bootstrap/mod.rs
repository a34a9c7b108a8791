mod config;
mod event;
mod logging;

pub use config::load_config;
pub use event::read_event;
pub use logging::init_logging;
