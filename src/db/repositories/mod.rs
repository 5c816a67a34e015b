pub mod history;
pub(crate) mod kv_store;
