mod common;

use common::test_db::create_test_pool;

use cb_db::OutputRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_text_when_inserted_then_row_returned_with_id() {
    let pool = create_test_pool().await;

    let row = OutputRepository::insert(&pool, "hello").await.unwrap();

    assert!(row.id > 0);
    assert_that!(row.output.as_str(), eq("hello"));
}

#[tokio::test]
async fn given_two_inserts_when_compared_then_ids_increase() {
    let pool = create_test_pool().await;

    let first = OutputRepository::insert(&pool, "one").await.unwrap();
    let second = OutputRepository::insert(&pool, "two").await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn given_inserted_row_when_found_by_id_then_matches() {
    let pool = create_test_pool().await;
    let row = OutputRepository::insert(&pool, r#"{"a":1}"#).await.unwrap();

    let found = OutputRepository::find_by_id(&pool, row.id).await.unwrap();

    assert_that!(found, some(eq(&row)));
}

#[tokio::test]
async fn given_unknown_id_when_found_by_id_then_none() {
    let pool = create_test_pool().await;

    let found = OutputRepository::find_by_id(&pool, 9999).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_rows_when_find_all_then_newest_first() {
    let pool = create_test_pool().await;
    OutputRepository::insert(&pool, "old").await.unwrap();
    OutputRepository::insert(&pool, "new").await.unwrap();

    let rows = OutputRepository::find_all(&pool).await.unwrap();

    let outputs: Vec<_> = rows.iter().map(|r| r.output.as_str()).collect();
    assert_that!(outputs, eq(&vec!["new", "old"]));
}

#[tokio::test]
async fn given_migrations_applied_twice_when_run_then_ok() {
    let pool = create_test_pool().await;

    let result = cb_db::run_migrations(&pool).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_file_path_when_connect_then_database_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("outputs.db");

    let pool = cb_db::connect(&path).await.unwrap();
    cb_db::run_migrations(&pool).await.unwrap();
    OutputRepository::insert(&pool, "persisted").await.unwrap();
    pool.close().await;

    assert!(path.exists());
}
