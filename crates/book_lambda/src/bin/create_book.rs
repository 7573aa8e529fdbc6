use book_lambda::adapters::dynamo_store::DynamoBookStore;
use book_lambda::adapters::id_generator::UuidGenerator;
use book_lambda::config::CreateBookConfig;
use book_lambda::handlers::create_book::{ApiGatewayResponse, CreateBookHandler};
use book_lambda::logging::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

type DynamoHandler = CreateBookHandler<DynamoBookStore, UuidGenerator>;

async fn handle_request(
    handler: &DynamoHandler,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    span.in_scope(|| handler.handle_event(event.payload)).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = CreateBookConfig::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoBookStore::new(aws_sdk_dynamodb::Client::new(&aws_config));
    let handler = CreateBookHandler::new(config, store, UuidGenerator);

    tracing::info!(
        component = "create_book_runtime",
        event = "runtime_started",
        table_name = %handler.config().table_name
    );

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handle_request(&handler, event)
    }))
    .await
}
