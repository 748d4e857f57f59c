pub mod client;
pub mod filter;

pub use client::BlogClient;
pub use filter::PostFilter;
