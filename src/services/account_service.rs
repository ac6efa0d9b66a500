//! Account creation and lookup.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::account::{Account, CreateAccountRequest},
    store::AccountStore,
};

pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Open a new account.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: blank number or owner, negative or non-finite balance
    /// - `DuplicateAccountNumber`: the account number is already in use
    #[tracing::instrument(skip(self, request), fields(account_number = %request.account_number))]
    pub async fn create_account(&self, request: CreateAccountRequest) -> AppResult<Account> {
        let account_number = request.account_number.trim();
        let owner_name = request.owner_name.trim();

        if account_number.is_empty() {
            return Err(AppError::InvalidRequest(
                "Account number must not be empty".to_string(),
            ));
        }
        if owner_name.is_empty() {
            return Err(AppError::InvalidRequest(
                "Owner name must not be empty".to_string(),
            ));
        }
        if !request.initial_balance.is_finite() || request.initial_balance < 0.0 {
            return Err(AppError::InvalidRequest(
                "Initial balance must be zero or positive".to_string(),
            ));
        }

        if self.accounts.exists_by_account_number(account_number).await? {
            return Err(AppError::DuplicateAccountNumber(account_number.to_string()));
        }

        let account = self
            .accounts
            .save(Account::new(account_number, owner_name, request.initial_balance))
            .await?;

        tracing::info!(account_id = account.id_str(), "account created");

        Ok(account)
    }

    /// Fetch an account with its transactions.
    pub async fn get_account(&self, account_id: &str) -> AppResult<Account> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAccountStore;

    fn request(number: &str, owner: &str, balance: f64) -> CreateAccountRequest {
        CreateAccountRequest {
            account_number: number.to_string(),
            owner_name: owner.to_string(),
            initial_balance: balance,
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let service = AccountService::new(Arc::new(InMemoryAccountStore::new()));

        let created = service
            .create_account(request("1000008", "John Doe", 5000.0))
            .await
            .unwrap();
        let id = created.id.clone().unwrap();

        let fetched = service.get_account(&id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.balance, 5000.0);
        assert!(fetched.transactions.is_empty());
    }

    #[tokio::test]
    async fn duplicate_number_is_rejected() {
        let store = Arc::new(InMemoryAccountStore::new());
        let service = AccountService::new(store.clone());

        service
            .create_account(request("1000008", "John Doe", 0.0))
            .await
            .unwrap();
        let err = service
            .create_account(request(" 1000008 ", "Jane Doe", 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateAccountNumber(ref n) if n == "1000008"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected() {
        let service = AccountService::new(Arc::new(InMemoryAccountStore::new()));

        for bad in [
            request("", "John Doe", 0.0),
            request("1000008", "  ", 0.0),
            request("1000008", "John Doe", -5.0),
            request("1000008", "John Doe", f64::NAN),
        ] {
            let err = service.create_account(bad).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidRequest(_)));
        }
    }

    #[tokio::test]
    async fn missing_account() {
        let service = AccountService::new(Arc::new(InMemoryAccountStore::new()));
        let err = service.get_account("nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Account with ID nope not found");
    }
}
