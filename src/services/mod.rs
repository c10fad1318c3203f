pub mod gateway;

pub use gateway::{HttpGateway, RecommenderGateway};
