//! Accounting models: financial transactions, inventory and reports

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::Patch;
use crate::utils::helpers::{optional_timestamp, timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTransaction {
    pub id: i64,
    pub transaction_type: TransactionType,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTransactionCreate {
    pub transaction_type: TransactionType,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

/// Filters for listing transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
}

/// Inventory item status.
///
/// Stored as free text by the backend; any value outside the known set
/// decodes as [`InventoryStatus::Unknown`] and is sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    Available,
    CheckedOut,
    Maintenance,
    Retired,
    LowStock,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub total_value: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: InventoryStatus,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: InventoryStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub category: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub quantity: Patch<i64>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub unit_price: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub location: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub status: Patch<InventoryStatus>,
}

/// Filters for listing inventory items
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InventoryStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLog {
    pub id: i64,
    pub item_id: i64,
    pub action: String,
    pub quantity: i64,
    #[serde(default)]
    pub performed_by: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// New log entry; the item id travels in the URL and the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLogCreate {
    pub action: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyActivityReport {
    pub period: String,
    pub new_users: u64,
    pub new_resources: u64,
    pub messages_sent: u64,
    pub new_inquiries: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyFinancialReport {
    pub period: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    #[serde(default)]
    pub income_transactions: Vec<FinancialTransaction>,
    #[serde(default)]
    pub expense_transactions: Vec<FinancialTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInventoryReport {
    pub report_date: NaiveDate,
    pub total_items: u64,
    pub available_items: u64,
    pub checked_out_items: u64,
    pub maintenance_items: u64,
    pub retired_items: u64,
    #[serde(default)]
    pub low_stock_items: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_transactions: u64,
    pub total_inventory_items: u64,
    pub unread_inquiries: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingDashboard {
    pub metrics: DashboardMetrics,
    #[serde(default)]
    pub recent_transactions: Vec<FinancialTransaction>,
    #[serde(default)]
    pub low_stock_items: Vec<InventoryItem>,
}
