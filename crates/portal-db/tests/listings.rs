//! Listing integration tests: page bounds, ordering, and read-time counters.

use pretty_assertions::assert_eq;
use rstest::rstest;

use portal_core::enums::EntityKind;
use portal_core::errors::CoreError;
use portal_core::pagination::PageRequest;
use portal_db::error::DatabaseError;
use portal_db::test_support::TestPortal;

fn page(page: u32, size: u32) -> PageRequest {
    PageRequest::new(page, size).unwrap()
}

fn assert_not_found(err: &DatabaseError, kind: EntityKind, missing: i64) {
    match err.as_core() {
        Some(CoreError::NotFound { entity, id }) => {
            assert_eq!(*entity, kind);
            assert_eq!(*id, missing);
        }
        other => panic!("expected NotFound({kind}), got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Page bounds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn second_page_of_twelve_words() {
    let portal = TestPortal::new().await;
    let ids = portal.words(12).await;

    let result = portal.svc.list_words(page(2, 5)).await.unwrap();

    assert_eq!(result.pagination.current_page, 2);
    assert_eq!(result.pagination.total_pages, 3);
    assert_eq!(result.pagination.total_items, 12);
    assert_eq!(result.pagination.items_per_page, 5);
    let got: Vec<i64> = result.items.iter().map(|w| w.id).collect();
    assert_eq!(got, ids[5..10].to_vec());
}

#[rstest]
#[case(1, 5, 5)]
#[case(2, 5, 5)]
#[case(3, 5, 2)]
#[case(4, 5, 0)]
#[case(1, 12, 12)]
#[case(1, 100, 12)]
#[case(12, 1, 1)]
#[tokio::test]
async fn fetched_rows_match_page_arithmetic(
    #[case] number: u32,
    #[case] size: u32,
    #[case] expected: usize,
) {
    let portal = TestPortal::new().await;
    portal.words(12).await;

    let result = portal.svc.list_words(page(number, size)).await.unwrap();

    assert_eq!(result.items.len(), expected);
    assert_eq!(result.pagination.items_on_page(), expected as u64);
    assert_eq!(result.pagination.total_items, 12);
}

#[tokio::test]
async fn empty_table_has_zero_pages() {
    let portal = TestPortal::new().await;

    let result = portal.svc.list_groups(PageRequest::first()).await.unwrap();

    assert!(result.is_empty());
    assert_eq!(result.pagination.total_items, 0);
    assert_eq!(result.pagination.total_pages, 0);
}

// ---------------------------------------------------------------------------
// Words
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreviewed_word_has_zero_counts() {
    let portal = TestPortal::new().await;
    let id = portal.word("nyam", "eat").await;

    let word = portal.svc.get_word(id).await.unwrap();

    assert_eq!(word.jamaican_patois, "nyam");
    assert_eq!(word.english, "eat");
    assert_eq!(word.reviews.correct_count, 0);
    assert_eq!(word.reviews.wrong_count, 0);
    assert_eq!(word.parts, None);
}

#[tokio::test]
async fn word_parts_are_parsed_as_json() {
    let portal = TestPortal::new().await;
    let id = portal
        .word_with_parts("pickney", "child", r#"{"type":"noun"}"#)
        .await;

    let word = portal.svc.get_word(id).await.unwrap();

    assert_eq!(word.parts, Some(serde_json::json!({"type": "noun"})));
}

#[tokio::test]
async fn three_correct_one_wrong() {
    let portal = TestPortal::new().await;
    let word = portal.word("likkle", "little").await;
    let group = portal.group("Adjectives").await;
    let activity = portal.activity("Flashcards").await;
    let session = portal.session(group, activity).await;
    portal.schedule(session, word).await;

    for correct in [true, true, false, true] {
        portal
            .svc
            .record_review(session, word, correct)
            .await
            .unwrap();
    }

    let fetched = portal.svc.get_word(word).await.unwrap();
    assert_eq!(fetched.reviews.correct_count, 3);
    assert_eq!(fetched.reviews.wrong_count, 1);

    let listed = portal.svc.list_words(PageRequest::first()).await.unwrap();
    assert_eq!(listed.items[0].reviews, fetched.reviews);
}

#[tokio::test]
async fn get_missing_word_is_not_found() {
    let portal = TestPortal::new().await;

    let err = portal.svc.get_word(404).await.unwrap_err();

    assert_not_found(&err, EntityKind::Word, 404);
}

#[tokio::test]
async fn word_groups_lists_memberships() {
    let portal = TestPortal::new().await;
    let word = portal.word("bredda", "brother").await;
    let other = portal.word("sistah", "sister").await;
    let family = portal.group("Family").await;
    let people = portal.group("People").await;
    portal.group("Food").await;
    portal.add_to_group(word, family).await;
    portal.add_to_group(word, people).await;
    portal.add_to_group(other, family).await;

    let result = portal
        .svc
        .list_word_groups(word, PageRequest::first())
        .await
        .unwrap();

    let names: Vec<&str> = result.items.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Family", "People"]);
    assert_eq!(result.items[0].word_count, 2);
    assert_eq!(result.items[1].word_count, 1);
    assert_eq!(result.pagination.total_items, 2);
}

#[tokio::test]
async fn word_groups_of_missing_word_is_not_found() {
    let portal = TestPortal::new().await;

    let err = portal
        .svc
        .list_word_groups(9, PageRequest::first())
        .await
        .unwrap_err();

    assert_not_found(&err, EntityKind::Word, 9);
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn group_word_count_matches_associations() {
    let portal = TestPortal::new().await;
    let ids = portal.words(4).await;
    let full = portal.group("Full").await;
    let empty = portal.group("Empty").await;
    for id in &ids[..3] {
        portal.add_to_group(*id, full).await;
    }

    assert_eq!(portal.svc.get_group(full).await.unwrap().word_count, 3);
    assert_eq!(portal.svc.get_group(empty).await.unwrap().word_count, 0);

    let listed = portal.svc.list_groups(PageRequest::first()).await.unwrap();
    let counts: Vec<(i64, i64)> = listed.items.iter().map(|g| (g.id, g.word_count)).collect();
    assert_eq!(counts, vec![(full, 3), (empty, 0)]);
}

#[tokio::test]
async fn group_words_are_paged_with_global_counts() {
    let portal = TestPortal::new().await;
    let ids = portal.words(7).await;
    let group = portal.group("Verbs").await;
    for id in &ids {
        portal.add_to_group(*id, group).await;
    }
    let activity = portal.activity("Typing").await;
    let first = portal.session(group, activity).await;
    let second = portal.session(group, activity).await;
    portal.schedule(first, ids[0]).await;
    portal.schedule(second, ids[0]).await;
    portal.svc.record_review(first, ids[0], true).await.unwrap();
    portal.svc.record_review(second, ids[0], false).await.unwrap();

    let page_one = portal
        .svc
        .list_group_words(group, page(1, 5))
        .await
        .unwrap();
    assert_eq!(page_one.items.len(), 5);
    assert_eq!(page_one.pagination.total_pages, 2);
    assert_eq!(page_one.items[0].reviews.correct_count, 1);
    assert_eq!(page_one.items[0].reviews.wrong_count, 1);

    let page_two = portal
        .svc
        .list_group_words(group, page(2, 5))
        .await
        .unwrap();
    let got: Vec<i64> = page_two.items.iter().map(|w| w.id).collect();
    assert_eq!(got, ids[5..].to_vec());
}

#[tokio::test]
async fn group_sessions_newest_first() {
    let portal = TestPortal::new().await;
    let group = portal.group("Greetings").await;
    let other = portal.group("Other").await;
    let activity = portal.activity("Flashcards").await;
    let old = portal
        .session_at(group, activity, "2025-01-01 09:00:00")
        .await;
    let new = portal
        .session_at(group, activity, "2025-03-01 09:00:00")
        .await;
    portal
        .session_at(other, activity, "2025-02-01 09:00:00")
        .await;

    let result = portal
        .svc
        .list_group_study_sessions(group, PageRequest::first())
        .await
        .unwrap();

    let ids: Vec<i64> = result.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![new, old]);
    assert_eq!(result.items[0].group_name.as_deref(), Some("Greetings"));
    assert_eq!(result.items[0].activity_name.as_deref(), Some("Flashcards"));
}

#[tokio::test]
async fn missing_group_is_not_found_everywhere() {
    let portal = TestPortal::new().await;

    let err = portal.svc.get_group(3).await.unwrap_err();
    assert_not_found(&err, EntityKind::Group, 3);

    let err = portal
        .svc
        .list_group_words(3, PageRequest::first())
        .await
        .unwrap_err();
    assert_not_found(&err, EntityKind::Group, 3);

    let err = portal
        .svc
        .list_group_study_sessions(3, PageRequest::first())
        .await
        .unwrap_err();
    assert_not_found(&err, EntityKind::Group, 3);
}

// ---------------------------------------------------------------------------
// Study sessions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_review_items_count_matches_schedule() {
    let portal = TestPortal::new().await;
    let ids = portal.words(3).await;
    let group = portal.group("Basics").await;
    let activity = portal.activity("Flashcards").await;
    let session = portal.session(group, activity).await;
    let idle = portal.session(group, activity).await;
    for id in &ids {
        portal.schedule(session, *id).await;
    }

    let fetched = portal.svc.get_study_session(session).await.unwrap();
    assert_eq!(fetched.review_items_count, 3);
    assert_eq!(fetched.end_time, None);
    assert_eq!(
        portal.svc.get_study_session(idle).await.unwrap().review_items_count,
        0
    );
}

#[tokio::test]
async fn sessions_seeded_with_naive_iso_timestamps_are_listed() {
    let portal = TestPortal::new().await;
    let group = portal.group("Basics").await;
    let activity = portal.activity("Flashcards").await;
    let iso = portal
        .session_at(group, activity, "2025-02-10T09:30:00.123456")
        .await;
    let plain = portal
        .session_at(group, activity, "2025-01-10 08:00:00")
        .await;

    let result = portal
        .svc
        .list_study_sessions(PageRequest::first())
        .await
        .unwrap();

    let ids: Vec<i64> = result.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![iso, plain]);
    assert_eq!(
        result.items[0].start_time.to_rfc3339(),
        "2025-02-10T09:30:00.123456+00:00"
    );
}

#[tokio::test]
async fn sessions_with_dangling_references_keep_null_names() {
    let portal = TestPortal::new().await;
    let session = portal.session(77, 88).await;

    let fetched = portal.svc.get_study_session(session).await.unwrap();

    assert_eq!(fetched.group_id, 77);
    assert_eq!(fetched.group_name, None);
    assert_eq!(fetched.activity_name, None);
}

#[tokio::test]
async fn sessions_tie_break_on_id_descending() {
    let portal = TestPortal::new().await;
    let group = portal.group("Basics").await;
    let activity = portal.activity("Flashcards").await;
    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(
            portal
                .session_at(group, activity, "2025-05-05 12:00:00")
                .await,
        );
    }

    let result = portal
        .svc
        .list_study_sessions(page(1, 3))
        .await
        .unwrap();

    let got: Vec<i64> = result.items.iter().map(|s| s.id).collect();
    ids.reverse();
    assert_eq!(got, ids[..3].to_vec());
    assert_eq!(result.pagination.total_pages, 2);
}

#[tokio::test]
async fn session_words_count_only_that_session() {
    let portal = TestPortal::new().await;
    let word = portal.word("nyam", "eat").await;
    let unscheduled = portal.word("sleep", "sleep").await;
    let group = portal.group("Verbs").await;
    let activity = portal.activity("Flashcards").await;
    let earlier = portal.session(group, activity).await;
    let current = portal.session(group, activity).await;
    portal.schedule(earlier, word).await;
    portal.schedule(current, word).await;
    portal.svc.record_review(earlier, word, true).await.unwrap();
    portal.svc.record_review(earlier, word, true).await.unwrap();
    portal.svc.record_review(current, word, false).await.unwrap();

    let result = portal
        .svc
        .list_session_words(current, PageRequest::first())
        .await
        .unwrap();

    assert_eq!(result.pagination.total_items, 1);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].id, word);
    assert_ne!(result.items[0].id, unscheduled);
    assert_eq!(result.items[0].reviews.correct_count, 0);
    assert_eq!(result.items[0].reviews.wrong_count, 1);

    // Outside a session listing, counts span every session.
    let global = portal.svc.get_word(word).await.unwrap();
    assert_eq!(global.reviews.correct_count, 2);
    assert_eq!(global.reviews.wrong_count, 1);
}

#[tokio::test]
async fn missing_session_is_not_found_everywhere() {
    let portal = TestPortal::new().await;

    let err = portal.svc.get_study_session(5).await.unwrap_err();
    assert_not_found(&err, EntityKind::StudySession, 5);

    let err = portal
        .svc
        .list_session_words(5, PageRequest::first())
        .await
        .unwrap_err();
    assert_not_found(&err, EntityKind::StudySession, 5);

    let err = portal
        .svc
        .list_session_reviews(5, PageRequest::first())
        .await
        .unwrap_err();
    assert_not_found(&err, EntityKind::StudySession, 5);
}
