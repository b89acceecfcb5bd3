pub mod environment;

pub use environment::AtmosphereConfig;
