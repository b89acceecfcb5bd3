pub mod config;

pub use config::environment::AtmosphereConfig;
