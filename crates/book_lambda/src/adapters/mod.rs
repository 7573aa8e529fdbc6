pub mod book_store;
pub mod dynamo_store;
pub mod id_generator;
