pub mod configuration;
pub mod controller;
pub mod debounce;
pub mod domain;
pub mod startup;
pub mod storage;
pub mod surface;
pub mod telemetry;
