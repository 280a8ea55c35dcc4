//! Canned backend payloads
//!
//! Timestamps are naive, the way the backend emits them.

use serde_json::{json, Value};

pub const CREATED_AT: &str = "2024-03-04T09:15:00";

pub fn user_json(id: i64, role: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@school.test", role),
        "full_name": "Test User",
        "role": role,
    })
}

pub fn auth_json(token: &str, role: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user": user_json(1, role),
    })
}

pub fn transaction_json(id: i64, kind: &str, amount: f64) -> Value {
    json!({
        "id": id,
        "transaction_type": kind,
        "amount": amount,
        "description": "Term fees",
        "category": "fees",
        "reference_number": null,
        "created_by": 1,
        "created_at": CREATED_AT,
    })
}

pub fn inventory_item_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "name": "Projector",
        "description": null,
        "category": "equipment",
        "quantity": 3,
        "unit_price": 450.0,
        "total_value": 1350.0,
        "location": "Room 12",
        "status": status,
        "created_at": CREATED_AT,
        "updated_at": null,
    })
}

pub fn inventory_log_json(id: i64, item_id: i64) -> Value {
    json!({
        "id": id,
        "item_id": item_id,
        "action": "checkout",
        "quantity": 1,
        "performed_by": 1,
        "notes": "Science fair",
        "created_at": CREATED_AT,
    })
}

pub fn inquiry_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "ticket_number": format!("INQ-2024-{:04}", id),
        "name": "Jane Parent",
        "email": "jane@example.com",
        "subject": "Bus schedule",
        "message": "When does the late bus leave?",
        "department": "general",
        "priority": "medium",
        "status": status,
        "assigned_to": null,
        "created_at": CREATED_AT,
        "updated_at": null,
        "resolved_at": null,
    })
}

pub fn resource_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Fractions worksheet",
        "description": "Grade 4 practice",
        "file_url": "/uploads/fractions.pdf",
        "video_url": null,
        "subject_id": 3,
        "grade_level": "4",
        "category": "worksheet",
        "tags": "math,fractions",
        "is_public": true,
        "uploaded_by": 2,
        "created_at": CREATED_AT,
        "updated_at": null,
    })
}

pub fn message_json(id: i64, kind: &str) -> Value {
    json!({
        "id": id,
        "sender_id": 1,
        "recipient_id": if kind == "direct" { json!(2) } else { Value::Null },
        "group_id": if kind == "group" { json!(5) } else { Value::Null },
        "message_type": kind,
        "subject": "Hello",
        "content": "See you at the meeting",
        "is_read": false,
        "created_at": CREATED_AT,
    })
}

pub fn group_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Grade 4 teachers",
        "description": null,
        "group_type": "staff",
        "created_by": 1,
        "created_at": CREATED_AT,
    })
}
