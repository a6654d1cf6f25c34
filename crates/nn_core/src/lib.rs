pub mod error;
pub mod types;

pub use error::Error;
pub use types::{Article, Group, Side};
pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{Article, Error, Group, Result, Side};
}
