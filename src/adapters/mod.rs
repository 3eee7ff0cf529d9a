// Adapters layer: concrete implementations of the domain ports.

pub mod local_store;
pub mod remote;

pub use local_store::JsonFileStore;
pub use remote::RestRepository;
