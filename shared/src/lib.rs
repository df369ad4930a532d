pub mod models;
pub mod utils;

// Plain data types passed between the engine and the front ends. Nothing in
// here touches the filesystem or the model artifact.
