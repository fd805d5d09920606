//! Tests against a running DynamoDB Local.
//!
//! Ignored by default. Start DynamoDB Local on port 8000 and run with
//! `--ignored`; set `DYNADMIN_TEST_ENDPOINT` to use another endpoint.

use crate::{
    connection::{ConnectionFactory, SdkConnectionFactory},
    dispatcher::Dispatcher,
};
use dynadmin_core::endpoint::DEFAULT_ENDPOINT;
use dynadmin_core::item::{Item, Value};
use dynadmin_core::query::KeyCondition;
use dynadmin_core::schema::{AttributeType, KeyType, TableForm, TtlSpec};

fn dispatcher() -> Dispatcher {
    let endpoint =
        std::env::var("DYNADMIN_TEST_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    Dispatcher::new(SdkConnectionFactory.connect(&endpoint))
}

fn unique_table(prefix: &str) -> String {
    format!("{prefix}_{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
#[ignore = "requires DynamoDB Local"]
async fn test_table_and_item_round_trip() {
    let dispatcher = dispatcher();
    let table_name = unique_table("dynadmin_items");

    dispatcher
        .create_table_from_form(TableForm {
            table_name: table_name.clone(),
            sort_key_name: "n".to_string(),
            sort_key_type: AttributeType::Number,
            ..TableForm::default()
        })
        .await
        .unwrap();

    let mut item = Item::new();
    item.insert("id".to_string(), Value::from("a"));
    item.insert("n".to_string(), Value::from(1_i64));
    item.insert("tags".to_string(), Value::List(vec![Value::from("x")]));
    dispatcher.put_item(&table_name, &item).await.unwrap();

    let page = dispatcher.scan(&table_name, None).await.unwrap();
    assert_eq!(page.items, vec![item.clone()]);

    let found = dispatcher
        .query(
            &table_name,
            None,
            &[
                KeyCondition::new("id", "a", KeyType::Hash),
                KeyCondition::new("n", "1", KeyType::Range),
            ],
        )
        .await
        .unwrap();
    assert_eq!(found, vec![item.clone()]);

    dispatcher
        .delete_item_by_base_key(&table_name, &item)
        .await
        .unwrap();
    assert!(dispatcher.scan(&table_name, None).await.unwrap().items.is_empty());

    dispatcher.delete_table(&table_name).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DynamoDB Local"]
async fn test_ttl_and_stream_settings() {
    let dispatcher = dispatcher();
    let table_name = unique_table("dynadmin_settings");

    dispatcher
        .create_table_from_form(TableForm {
            table_name: table_name.clone(),
            ..TableForm::default()
        })
        .await
        .unwrap();

    if dispatcher.describe_time_to_live(&table_name).await.unwrap().is_some() {
        dispatcher
            .update_time_to_live(&table_name, &TtlSpec::enable("expires").unwrap())
            .await
            .unwrap();
        let applied = dispatcher.disable_time_to_live(&table_name).await.unwrap();
        assert_eq!(applied.attribute_name, "expires");
    }

    let enabled = dispatcher.toggle_stream(&table_name).await.unwrap();
    assert!(enabled.stream_enabled());

    dispatcher.delete_table(&table_name).await.unwrap();
}
