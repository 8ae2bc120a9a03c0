pub mod chart;
pub mod market;
pub mod rates;
pub mod response;

pub use chart::*;
pub use market::*;
pub use rates::*;
pub use response::*;
