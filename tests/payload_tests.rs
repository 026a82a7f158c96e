use chrono::DateTime;
use wlsync::jira::payload::{NewWorklogPayload, UserPayload, WorklogPage, WorklogPayload};
use wlsync::models::{RemoteUser, WorklogRecord};

#[test]
fn test_worklog_detail_is_parsed() {
    let json = r#"{
        "self": "https://jira.example.com/rest/api/2/issue/10010/worklog/10000",
        "author": {"key": "jdoe", "name": "jdoe", "displayName": "Jane Doe"},
        "comment": "work",
        "started": "2024-03-01T09:00:00.000-0500",
        "timeSpent": "1h",
        "timeSpentSeconds": 3600,
        "id": "10000",
        "issueId": "10010"
    }"#;
    let payload: WorklogPayload = serde_json::from_str(json).unwrap();
    let worklog = payload.into_remote("PROJ-1").unwrap();

    assert_eq!(worklog.id, "10000");
    assert_eq!(worklog.issue_id, "PROJ-1");
    assert_eq!(worklog.author_key, "jdoe");
    assert_eq!(worklog.duration_seconds, 3600);
    assert_eq!(
        worklog.started_at,
        DateTime::parse_from_rfc3339("2024-03-01T09:00:00-05:00").unwrap()
    );
}

#[test]
fn test_cloud_author_falls_back_to_account_id() {
    let json = r#"{
        "author": {"accountId": "5b10ac8d82e05b22cc7d4ef5"},
        "started": "2024-03-01T09:00:00.000+0100",
        "timeSpentSeconds": 60,
        "id": "1"
    }"#;
    let payload: WorklogPayload = serde_json::from_str(json).unwrap();
    let worklog = payload.into_remote("PROJ-1").unwrap();
    assert_eq!(worklog.author_key, "5b10ac8d82e05b22cc7d4ef5");
}

#[test]
fn test_bad_start_time_is_a_payload_error() {
    let json = r#"{
        "author": {"key": "jdoe"},
        "started": "yesterday",
        "timeSpentSeconds": 60,
        "id": "1"
    }"#;
    let payload: WorklogPayload = serde_json::from_str(json).unwrap();
    assert!(matches!(
        payload.into_remote("PROJ-1"),
        Err(wlsync::errors::AppError::Payload(_))
    ));
}

#[test]
fn test_new_worklog_body() {
    let record = WorklogRecord {
        started_at: DateTime::parse_from_rfc3339("2024-03-01T09:00:00-05:00").unwrap(),
        duration_seconds: 3600,
        issue_id: "PROJ-1".into(),
        description: "work".into(),
    };
    let body = serde_json::to_value(NewWorklogPayload::from(&record)).unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "started": "2024-03-01T09:00:00.000-0500",
            "timeSpentSeconds": 3600,
            "comment": "work"
        })
    );
}

#[test]
fn test_myself_and_worklog_list() {
    let user: UserPayload =
        serde_json::from_str(r#"{"key": "jdoe", "displayName": "Jane Doe", "active": true}"#)
            .unwrap();
    let user = RemoteUser::try_from(user).unwrap();
    assert_eq!(user.key, "jdoe");
    assert_eq!(user.display_name.as_deref(), Some("Jane Doe"));

    let page: WorklogPage = serde_json::from_str(
        r#"{"startAt": 0, "maxResults": 2, "total": 3, "worklogs": [{"id": "1"}, {"id": "2"}]}"#,
    )
    .unwrap();
    let ids: Vec<String> = page.worklogs.into_iter().map(|w| w.id).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(page.total, 3);

    let nobody: UserPayload = serde_json::from_str(r#"{"displayName": "Ghost"}"#).unwrap();
    assert!(RemoteUser::try_from(nobody).is_err());
}
