//! Absent filters never reach the query string

use proptest::prelude::*;
use reqwest::Client;
use serde::Serialize;

use school_admin::models::{
    InquiryDepartment, InquiryFilter, InquiryStatus, InventoryFilter, InventoryStatus, Pagination, ResourceCategory,
    ResourceFilter, TransactionFilter, TransactionType,
};

const BASE: &str = "http://localhost:8000/api/collection/";

fn query_keys<Q: Serialize>(query: &Q) -> Vec<String> {
    let request = Client::new().get(BASE).query(query).build().unwrap();
    request.url().query_pairs().map(|(key, _)| key.into_owned()).collect()
}

fn present(pairs: &[(&str, bool)]) -> Vec<String> {
    pairs
        .iter()
        .filter(|(_, set)| *set)
        .map(|(key, _)| key.to_string())
        .collect()
}

fn inquiry_status() -> impl Strategy<Value = InquiryStatus> {
    prop_oneof![
        Just(InquiryStatus::New),
        Just(InquiryStatus::InProgress),
        Just(InquiryStatus::Resolved),
        Just(InquiryStatus::Closed),
    ]
}

fn department() -> impl Strategy<Value = InquiryDepartment> {
    prop_oneof![
        Just(InquiryDepartment::Admissions),
        Just(InquiryDepartment::Academics),
        Just(InquiryDepartment::Finance),
        Just(InquiryDepartment::ItSupport),
        Just(InquiryDepartment::General),
    ]
}

fn category() -> impl Strategy<Value = ResourceCategory> {
    prop_oneof![
        Just(ResourceCategory::LessonPlan),
        Just(ResourceCategory::Worksheet),
        Just(ResourceCategory::Video),
        Just(ResourceCategory::Presentation),
        Just(ResourceCategory::Assessment),
        Just(ResourceCategory::Other),
    ]
}

fn inventory_status() -> impl Strategy<Value = InventoryStatus> {
    prop_oneof![
        Just(InventoryStatus::Available),
        Just(InventoryStatus::CheckedOut),
        Just(InventoryStatus::Maintenance),
        Just(InventoryStatus::Retired),
        Just(InventoryStatus::LowStock),
        "[a-z_]{3,12}".prop_map(InventoryStatus::Unknown),
    ]
}

proptest! {
    #[test]
    fn inquiry_filter_emits_only_present_keys(
        skip in proptest::option::of(0u32..500),
        limit in proptest::option::of(1u32..200),
        status in proptest::option::of(inquiry_status()),
        department in proptest::option::of(department()),
    ) {
        let expected = present(&[
            ("skip", skip.is_some()),
            ("limit", limit.is_some()),
            ("status", status.is_some()),
            ("department", department.is_some()),
        ]);
        let filter = InquiryFilter { skip, limit, status, department };
        prop_assert_eq!(query_keys(&filter), expected);
    }

    #[test]
    fn resource_filter_emits_only_present_keys(
        skip in proptest::option::of(0u32..500),
        subject_id in proptest::option::of(1i64..50),
        grade_level in proptest::option::of("[1-9]|1[0-2]"),
        category in proptest::option::of(category()),
    ) {
        let expected = present(&[
            ("skip", skip.is_some()),
            ("subject_id", subject_id.is_some()),
            ("grade_level", grade_level.is_some()),
            ("category", category.is_some()),
        ]);
        let filter = ResourceFilter { skip, limit: None, subject_id, grade_level, category };
        let keys = query_keys(&filter);
        prop_assert!(!keys.iter().any(|k| k == "limit"));
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn accounting_filters_emit_only_present_keys(
        limit in proptest::option::of(1u32..200),
        transaction_type in proptest::option::of(prop_oneof![Just(TransactionType::Income), Just(TransactionType::Expense)]),
        inventory_category in proptest::option::of("[a-z]{1,12}"),
        status in proptest::option::of(inventory_status()),
    ) {
        let transactions = TransactionFilter { skip: None, limit, transaction_type };
        prop_assert_eq!(
            query_keys(&transactions),
            present(&[("limit", limit.is_some()), ("transaction_type", transaction_type.is_some())])
        );

        let expected = present(&[
            ("limit", limit.is_some()),
            ("category", inventory_category.is_some()),
            ("status", status.is_some()),
        ]);
        let inventory = InventoryFilter { skip: None, limit, category: inventory_category, status };
        prop_assert_eq!(query_keys(&inventory), expected);
    }

    #[test]
    fn pagination_emits_only_present_keys(
        skip in proptest::option::of(0u32..1000),
        limit in proptest::option::of(1u32..100),
    ) {
        let page = Pagination { skip, limit };
        prop_assert_eq!(
            query_keys(&page),
            present(&[("skip", skip.is_some()), ("limit", limit.is_some())])
        );
    }
}

#[test]
fn empty_filter_leaves_no_query_string() {
    let request = Client::new()
        .get(BASE)
        .query(&InquiryFilter::default())
        .build()
        .unwrap();
    assert_eq!(request.url().query(), None);
    assert!(!request.url().as_str().contains("undefined"));
}
