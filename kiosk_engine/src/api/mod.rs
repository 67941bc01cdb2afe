mod chat_api;
mod order_api;

pub use chat_api::ChatApi;
pub use order_api::OrderApi;
