mod batch;
mod config_loading;
mod flight;
