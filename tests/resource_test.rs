//! Resource hub service against the mock backend

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

use helpers::*;
use school_admin::models::{NewResourceComment, ResourceCategory, ResourceCreate, ResourceFilter, ResourceUpdate, Patch};
use school_admin::SchoolAdminError;

#[tokio::test]
async fn test_create_and_fetch_resource() {
    let mock = SchoolApiMock::start().await;
    Mock::given(method("POST"))
        .and(path("/api/resources/"))
        .and(body_json(json!({
            "title": "Fractions worksheet",
            "category": "worksheet",
            "grade_level": "4",
            "is_public": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource_json(6)))
        .expect(1)
        .mount(&mock.server)
        .await;
    mock.respond("GET", "/api/resources/6", 200, resource_json(6)).await;

    let (services, _) = mock.services_with_token("teacher-token");
    let created = services
        .resource_service
        .create_resource(&ResourceCreate {
            title: "Fractions worksheet".to_string(),
            description: None,
            file_url: None,
            video_url: None,
            subject_id: None,
            grade_level: Some("4".to_string()),
            category: ResourceCategory::Worksheet,
            tags: None,
            is_public: Some(true),
        })
        .await
        .unwrap();

    let fetched = services.resource_service.get_resource(6).await.unwrap();
    assert_eq!(created, fetched);
    assert_eq!(fetched.category, ResourceCategory::Worksheet);
}

#[tokio::test]
async fn test_list_resources_by_category() {
    let mock = SchoolApiMock::start().await;
    mock.respond("GET", "/api/resources/", 200, json!([resource_json(1), resource_json(2)]))
        .await;

    let (services, _) = mock.services_with_token("tok");
    let filter = ResourceFilter {
        category: Some(ResourceCategory::LessonPlan),
        grade_level: Some("4".to_string()),
        ..Default::default()
    };
    let resources = services.resource_service.list_resources(&filter).await.unwrap();
    assert_eq!(resources.len(), 2);

    let request = mock.only_request().await;
    assert_eq!(request.url.query(), Some("grade_level=4&category=lesson_plan"));
}

#[tokio::test]
async fn test_update_distinguishes_cleared_from_untouched() {
    let mock = SchoolApiMock::start().await;
    mock.respond("PUT", "/api/resources/6", 200, resource_json(6)).await;

    let (services, _) = mock.services_with_token("tok");

    let make_private = ResourceUpdate {
        is_public: Patch::Value(false),
        ..Default::default()
    };
    services.resource_service.update_resource(6, &make_private).await.unwrap();

    let clear_visibility = ResourceUpdate {
        is_public: Patch::Null,
        video_url: Patch::Null,
        ..Default::default()
    };
    services.resource_service.update_resource(6, &clear_visibility).await.unwrap();

    services
        .resource_service
        .update_resource(6, &ResourceUpdate::default())
        .await
        .unwrap();

    let bodies: Vec<_> = mock.received().await.iter().map(json_body).collect();
    assert_eq!(bodies[0], json!({"is_public": false}));
    assert_eq!(bodies[1], json!({"is_public": null, "video_url": null}));
    assert_eq!(bodies[2], json!({}));
}

#[tokio::test]
async fn test_delete_resource() {
    let mock = SchoolApiMock::start().await;
    mock.respond("DELETE", "/api/resources/6", 200, json!({"message": "Resource deleted successfully"}))
        .await;

    let (services, _) = mock.services_with_token("tok");
    let ack = services.resource_service.delete_resource(6).await.unwrap();
    assert_eq!(ack.message, "Resource deleted successfully");
}

#[tokio::test]
async fn test_ratings() {
    let mock = SchoolApiMock::start().await;
    let rating = json!({"id": 1, "resource_id": 6, "user_id": 3, "rating": 5, "created_at": CREATED_AT});
    Mock::given(method("POST"))
        .and(path("/api/resources/6/ratings"))
        .and(body_json(json!({"resource_id": 6, "rating": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&rating))
        .expect(1)
        .mount(&mock.server)
        .await;
    mock.respond("GET", "/api/resources/6/ratings", 200, json!([rating])).await;

    let (services, _) = mock.services_with_token("tok");
    let created = services.resource_service.rate_resource(6, 5).await.unwrap();
    assert_eq!(created.rating, 5);

    let ratings = services.resource_service.get_ratings(6).await.unwrap();
    assert_eq!(ratings, vec![created]);
}

#[tokio::test]
async fn test_threaded_comment() {
    let mock = SchoolApiMock::start().await;
    let reply = json!({
        "id": 9,
        "resource_id": 6,
        "user_id": 3,
        "comment": "Thanks!",
        "parent_comment_id": 4,
        "created_at": CREATED_AT,
    });
    Mock::given(method("POST"))
        .and(path("/api/resources/6/comments"))
        .and(body_json(json!({"resource_id": 6, "comment": "Thanks!", "parent_comment_id": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&reply))
        .expect(1)
        .mount(&mock.server)
        .await;
    mock.respond("GET", "/api/resources/6/comments", 200, json!([reply])).await;

    let (services, _) = mock.services_with_token("tok");
    let comment = services
        .resource_service
        .comment_on_resource(
            6,
            &NewResourceComment {
                comment: "Thanks!".to_string(),
                parent_comment_id: Some(4),
            },
        )
        .await
        .unwrap();
    assert_eq!(comment.parent_comment_id, Some(4));

    let comments = services.resource_service.get_comments(6).await.unwrap();
    assert_eq!(comments[0].id, 9);
}

#[tokio::test]
async fn test_upload_is_multipart_with_token() {
    let mock = SchoolApiMock::start().await;
    Mock::given(method("POST"))
        .and(path("/api/resources/upload"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filename": "fractions.pdf",
            "content_type": "application/pdf",
            "message": "File uploaded successfully",
        })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let (services, _) = mock.services_with_token("tok");
    let receipt = services
        .resource_service
        .upload_resource_file("fractions.pdf", "application/pdf", b"%PDF-1.4 test".to_vec())
        .await
        .unwrap();
    assert_eq!(receipt.filename, "fractions.pdf");

    let request = mock.only_request().await;
    let content_type = header_value(&request, "content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="), "{}", content_type);

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\"; filename=\"fractions.pdf\""));
    assert!(body.contains("%PDF-1.4 test"));
}

#[tokio::test]
async fn test_upload_rejects_bad_content_type_before_sending() {
    let mock = SchoolApiMock::start().await;
    let (services, _) = mock.services_with_token("tok");

    let err = services
        .resource_service
        .upload_resource_file("notes.txt", "not a mime", b"hi".to_vec())
        .await
        .unwrap_err();

    assert_matches!(err, SchoolAdminError::InvalidInput(_));
    assert!(mock.received().await.is_empty());
}

#[tokio::test]
async fn test_validation_error_details_are_joined() {
    let mock = SchoolApiMock::start().await;
    mock.respond(
        "POST",
        "/api/resources/6/ratings",
        422,
        json!({"detail": [
            {"loc": ["body", "rating"], "msg": "ensure this value is less than or equal to 5", "type": "value_error"},
        ]}),
    )
    .await;

    let (services, _) = mock.services_with_token("tok");
    let err = services.resource_service.rate_resource(6, 9).await.unwrap_err();
    assert_eq!(err.to_string(), "ensure this value is less than or equal to 5");
}
