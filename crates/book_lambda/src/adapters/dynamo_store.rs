use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use book_core::item::BookItem;

use crate::adapters::book_store::BookStore;

/// DynamoDB-backed book store. The SDK client is cheap to clone and is
/// created once per execution environment.
///
/// Must be used from a multi-thread tokio runtime: the write is driven with
/// `block_in_place`.
#[derive(Clone)]
pub struct DynamoBookStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoBookStore {
    pub fn new(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }
}

impl BookStore for DynamoBookStore {
    fn put_book(&self, item: &BookItem) -> Result<(), String> {
        let request = self
            .client
            .put_item()
            .table_name(item.table_name())
            .set_item(Some(attribute_map(item)));

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                request.send().await.map(|_| ()).map_err(|error| {
                    format!(
                        "failed to put item into dynamodb: {}",
                        DisplayErrorContext(&error)
                    )
                })
            })
        })
    }
}

pub fn attribute_map(item: &BookItem) -> HashMap<String, AttributeValue> {
    item.attributes()
        .map(|(name, value)| (name.to_string(), AttributeValue::S(value.to_string())))
        .collect()
}
