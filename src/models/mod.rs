pub mod ids;
pub mod instance;
pub mod request;
pub mod response;

pub use ids::*;
pub use instance::*;
pub use request::*;
pub use response::*;
