mod location;
mod market;
mod route;
mod user;

pub use location::*;
pub use market::*;
pub use route::*;
pub use user::*;
