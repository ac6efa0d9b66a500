//! PostgreSQL store tests.
//!
//! These tests require a database connection.
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use std::sync::Arc;

use bank_transaction_service::{
    AppError, db,
    models::{
        account::Account,
        transaction::{Transaction, TransactionRequest, TransactionType},
    },
    services::TransactionService,
    store::{AccountStore, PgAccountStore, PgTransactionStore, TransactionStore},
};

async fn setup() -> db::DbPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = db::create_pool(&database_url, 5)
        .await
        .expect("Failed to connect to DB");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE TABLE transactions, accounts")
        .execute(&pool)
        .await
        .expect("Failed to clean up DB");

    pool
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn register_transaction_round_trip() {
    let pool = setup().await;
    let accounts = Arc::new(PgAccountStore::new(pool.clone()));
    let service = TransactionService::new(accounts.clone(), Arc::new(PgTransactionStore::new(pool)));

    let account = accounts
        .save(Account::new("1000008", "John Doe", 5000.0))
        .await
        .unwrap();
    let id = account.id.unwrap();
    assert!(accounts.exists_by_account_number("1000008").await.unwrap());

    let saved = service
        .register_transaction(
            &id,
            TransactionRequest {
                transaction_type: TransactionType::DepositToOtherAccount,
                amount: 1000.0,
                description: "Rent".to_string(),
            },
        )
        .await
        .unwrap();

    let stored = accounts.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.balance, 3998.5);
    assert_eq!(stored.transactions.len(), 1);
    assert_eq!(stored.transactions[0].id, saved.id);
    assert_eq!(stored.transactions[0].transaction_type, TransactionType::DepositToOtherAccount);

    let err = service
        .register_transaction(
            &id,
            TransactionRequest {
                transaction_type: TransactionType::WithdrawAtm,
                amount: 6000.0,
                description: String::new(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InsufficientFunds));
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn duplicate_account_number_surfaces_database_error() {
    let pool = setup().await;
    let accounts = PgAccountStore::new(pool);

    accounts
        .save(Account::new("1000008", "John Doe", 0.0))
        .await
        .unwrap();
    let err = accounts
        .save(Account::new("1000008", "Jane Doe", 0.0))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn same_timestamp_transactions_keep_insertion_order() {
    let pool = setup().await;
    let accounts = Arc::new(PgAccountStore::new(pool.clone()));
    let transactions = PgTransactionStore::new(pool);

    let account = accounts
        .save(Account::new("1000008", "John Doe", 5000.0))
        .await
        .unwrap();
    let id = account.id.unwrap();

    let first = Transaction::new(
        &id,
        &TransactionRequest {
            transaction_type: TransactionType::WithdrawAtm,
            amount: 1.0,
            description: "0".to_string(),
        },
    );
    for i in 0..10 {
        let mut transaction = first.clone();
        transaction.description = i.to_string();
        transactions.save(transaction).await.unwrap();
    }

    let listed = transactions.find_by_account_id(&id).await.unwrap();
    let descriptions: Vec<String> = listed.into_iter().map(|t| t.description).collect();
    let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
    assert_eq!(descriptions, expected);

    let stored = accounts.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.transactions.len(), 10);
    assert_eq!(stored.transactions[9].description, "9");
}
