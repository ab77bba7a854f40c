mod feed;
mod market;
mod routes;
mod search;

pub use feed::*;
pub use market::*;
pub use routes::*;
pub use search::*;
