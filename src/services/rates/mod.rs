pub mod fred;

pub use fred::FredClient;
