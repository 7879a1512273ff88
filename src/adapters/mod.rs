// Adapters layer: concrete mass sources backed by external systems.

pub mod file;
