pub mod store_context;
pub mod use_store;

pub use store_context::{use_store_context, StoreContextProvider};
pub use use_store::{use_store, UseStoreHandle};
