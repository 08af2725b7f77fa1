pub mod factory;
pub mod singleton;

pub mod errors {
    use thiserror::Error;

    #[derive(Debug, Error, Clone, PartialEq, Eq)]
    pub enum FactoryError {
        #[error("no creator registered for key {key}")]
        UnknownKey { key: String },
    }
}

pub use errors::FactoryError;
pub use factory::{Creator, GenericFactory};
pub use singleton::SingletonHolder;
