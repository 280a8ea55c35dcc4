//! Data models module
//!
//! This module contains the request and response records exchanged with
//! the school backend.

pub mod common;
pub mod user;
pub mod accounting;
pub mod inquiry;
pub mod resource;
pub mod message;

// Re-export commonly used models
pub use common::{Acknowledgement, Pagination, Patch};
pub use user::{AuthResult, LoginCredentials, User, UserCreate, UserRole};
pub use accounting::{
    AccountingDashboard, DashboardMetrics, FinancialTransaction, FinancialTransactionCreate, InventoryFilter,
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, InventoryLog, InventoryLogCreate, InventoryStatus,
    TransactionFilter, TransactionType, WeeklyActivityReport, WeeklyFinancialReport, WeeklyInventoryReport,
};
pub use inquiry::{
    Inquiry, InquiryActionResult, InquiryComment, InquiryCommentCreate, InquiryCreate, InquiryDepartment,
    InquiryFilter, InquiryPriority, InquiryStatus, InquiryUpdate,
};
pub use resource::{
    NewResourceComment, Resource, ResourceCategory, ResourceComment, ResourceCreate, ResourceFilter,
    ResourceRating, ResourceUpdate, UploadReceipt,
};
pub use message::{
    Message, MessageCreate, MessageGroup, MessageGroupCreate, MessageGroupMember, MessageGroupMemberCreate,
    MessageType, UnreadCount,
};
