pub mod urls;
pub mod http;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP transport utilities
#[allow(unused_imports)]
pub use http::*;
// Re-export the client itself
pub use core::PlaytomicClient;
