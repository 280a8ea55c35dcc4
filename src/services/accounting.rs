//! Accounting service implementation
//!
//! Wraps `/api/accounting`: financial transactions, inventory items and
//! their logs, and the weekly reports.

use serde::Serialize;
use tracing::{debug, info};

use super::client::ApiClient;
use crate::models::{
    AccountingDashboard, Acknowledgement, FinancialTransaction, FinancialTransactionCreate, InventoryFilter,
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, InventoryLog, InventoryLogCreate, Pagination,
    TransactionFilter, WeeklyActivityReport, WeeklyFinancialReport, WeeklyInventoryReport,
};
use crate::utils::errors::Result;

/// The backend expects the item id inside the log body as well as the path.
#[derive(Serialize)]
struct InventoryLogBody<'a> {
    item_id: i64,
    #[serde(flatten)]
    log: &'a InventoryLogCreate,
}

/// Accounting service for transactions, inventory and reports
#[derive(Debug, Clone)]
pub struct AccountingService {
    client: ApiClient,
}

impl AccountingService {
    /// Create a new AccountingService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Record a financial transaction
    pub async fn create_transaction(&self, transaction: &FinancialTransactionCreate) -> Result<FinancialTransaction> {
        debug!(amount = transaction.amount, kind = ?transaction.transaction_type, "Creating financial transaction");
        let created: FinancialTransaction = self.client.post("transactions", transaction).await?;
        info!(transaction_id = created.id, "Financial transaction created");
        Ok(created)
    }

    /// List transactions, newest first
    pub async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<FinancialTransaction>> {
        self.client.get_with_query("transactions", filter).await
    }

    pub async fn create_inventory_item(&self, item: &InventoryItemCreate) -> Result<InventoryItem> {
        debug!(name = %item.name, "Creating inventory item");
        let created: InventoryItem = self.client.post("inventory", item).await?;
        info!(item_id = created.id, "Inventory item created");
        Ok(created)
    }

    pub async fn list_inventory_items(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>> {
        self.client.get_with_query("inventory", filter).await
    }

    pub async fn get_inventory_item(&self, item_id: i64) -> Result<InventoryItem> {
        self.client.get(&format!("inventory/{}", item_id)).await
    }

    pub async fn update_inventory_item(&self, item_id: i64, update: &InventoryItemUpdate) -> Result<InventoryItem> {
        debug!(item_id = item_id, "Updating inventory item");
        self.client.put(&format!("inventory/{}", item_id), update).await
    }

    pub async fn delete_inventory_item(&self, item_id: i64) -> Result<Acknowledgement> {
        let ack: Acknowledgement = self.client.delete(&format!("inventory/{}", item_id)).await?;
        info!(item_id = item_id, "Inventory item deleted");
        Ok(ack)
    }

    /// Append a movement entry (check-out, restock, ...) to an item's log
    pub async fn create_inventory_log(&self, item_id: i64, log: &InventoryLogCreate) -> Result<InventoryLog> {
        debug!(item_id = item_id, action = %log.action, "Creating inventory log entry");
        let body = InventoryLogBody { item_id, log };
        self.client.post(&format!("inventory/{}/log", item_id), &body).await
    }

    pub async fn get_inventory_logs(&self, item_id: i64, page: &Pagination) -> Result<Vec<InventoryLog>> {
        self.client.get_with_query(&format!("inventory/{}/logs", item_id), page).await
    }

    /// Activity counts for the past seven days
    pub async fn weekly_activity_report(&self) -> Result<WeeklyActivityReport> {
        self.client.get("reports/weekly-activity").await
    }

    /// Income, expenses and balance for the past seven days
    pub async fn weekly_financial_report(&self) -> Result<WeeklyFinancialReport> {
        self.client.get("reports/weekly-financial").await
    }

    pub async fn weekly_inventory_report(&self) -> Result<WeeklyInventoryReport> {
        self.client.get("reports/weekly-inventory").await
    }

    pub async fn dashboard(&self) -> Result<AccountingDashboard> {
        self.client.get("reports/dashboard").await
    }
}
