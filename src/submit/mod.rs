//! Consumers of validated create-user submissions

mod logger;
mod traits;

pub use logger::LogSubmitter;
pub use traits::UserSubmitter;

#[cfg(test)]
pub use traits::MockUserSubmitter;
