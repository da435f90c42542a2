//! Profile save, badge upload, directory browsing, and the admin review
//! queue, end to end over the in-memory backends.

mod common;

use common::*;
use matchday_core::{ProfileDraft, ServiceError};
use matchday_identity::AuthError;
use matchday_storage::{ProfileFilter, SkillLevel, Sport};

#[tokio::test]
async fn saving_a_profile_always_revokes_advanced_approval() {
    let service = test_service_with_admin("ref@example.com");
    let admin = sign_up(&service, "ref@example.com").await;
    let player = sign_up(&service, "alex@example.com").await;

    complete_profile(&service, &player, "Alex", Sport::Tennis, SkillLevel::Advanced).await;
    service.approve(&admin, &player.principal.id).await.unwrap();
    assert!(service.my_profile(&player).await.unwrap().approved_advanced);

    // Any self-save drops the approval again, pending re-review.
    let saved = complete_profile(&service, &player, "Alex", Sport::Tennis, SkillLevel::Advanced).await;
    assert!(!saved.approved_advanced);
    assert!(!service.my_profile(&player).await.unwrap().approved_advanced);
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let service = test_service();
    let player = sign_up(&service, "alex@example.com").await;
    let err = service
        .save_profile(
            &player,
            ProfileDraft {
                name: "   ".to_string(),
                sport: Sport::Tennis,
                level: SkillLevel::Beginner,
                badge_image: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn badge_upload_sets_the_image_url_and_survives_later_saves() {
    let service = test_service();
    let player = sign_up(&service, "alex@example.com").await;

    let saved = service
        .save_profile(
            &player,
            ProfileDraft {
                name: "Alex".to_string(),
                sport: Sport::Tennis,
                level: SkillLevel::Intermediate,
                badge_image: Some(vec![0xFF, 0xD8, 0xFF]),
            },
        )
        .await
        .unwrap();
    let url = saved.image_url.clone().expect("badge url");
    assert!(url.ends_with(&format!("profileImages/{}.jpg", player.principal.id.0)));

    // A save without a new image keeps the previous upload.
    let resaved = complete_profile(&service, &player, "Alex", Sport::Tennis, SkillLevel::Beginner).await;
    assert_eq!(resaved.image_url, Some(url));
}

#[tokio::test]
async fn directory_filters_by_sport_and_level() {
    let service = test_service();
    let a = sign_up(&service, "a@example.com").await;
    let b = sign_up(&service, "b@example.com").await;
    let c = sign_up(&service, "c@example.com").await;
    complete_profile(&service, &a, "Ann", Sport::Tennis, SkillLevel::Beginner).await;
    complete_profile(&service, &b, "Ben", Sport::Tennis, SkillLevel::Advanced).await;
    complete_profile(&service, &c, "Cal", Sport::Football, SkillLevel::Beginner).await;

    let tennis = service
        .browse_profiles(
            &a,
            ProfileFilter {
                sport: Some(Sport::Tennis),
                level: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(tennis.len(), 2);

    let tennis_beginners = service
        .browse_profiles(
            &a,
            ProfileFilter {
                sport: Some(Sport::Tennis),
                level: Some(SkillLevel::Beginner),
            },
        )
        .await
        .unwrap();
    assert_eq!(tennis_beginners.len(), 1);
    assert_eq!(tennis_beginners[0].name, "Ann");
}

#[tokio::test]
async fn review_queue_approve_and_reject() {
    let service = test_service_with_admin("ref@example.com");
    let admin = sign_up(&service, "ref@example.com").await;
    let player = sign_up(&service, "alex@example.com").await;

    service
        .save_profile(
            &player,
            ProfileDraft {
                name: "Alex".to_string(),
                sport: Sport::Basketball,
                level: SkillLevel::Advanced,
                badge_image: Some(vec![1, 2, 3]),
            },
        )
        .await
        .unwrap();

    let pending = service.pending_approvals(&admin).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, player.principal.id);

    service.approve(&admin, &player.principal.id).await.unwrap();
    assert!(service.pending_approvals(&admin).await.unwrap().is_empty());
    assert!(service.my_profile(&player).await.unwrap().approved_advanced);

    // Rejection clears the flag, demotes the level, and drops the badge,
    // whatever the prior state.
    service.reject(&admin, &player.principal.id).await.unwrap();
    let rejected = service.my_profile(&player).await.unwrap();
    assert!(!rejected.approved_advanced);
    assert_eq!(rejected.level, SkillLevel::Intermediate);
    assert_eq!(rejected.image_url, None);
}

#[tokio::test]
async fn review_operations_require_an_admin_caller() {
    let service = test_service_with_admin("ref@example.com");
    let player = sign_up(&service, "alex@example.com").await;
    complete_profile(&service, &player, "Alex", Sport::Tennis, SkillLevel::Advanced).await;

    for result in [
        service.pending_approvals(&player).await.map(|_| ()),
        service.approve(&player, &player.principal.id).await,
        service.reject(&player, &player.principal.id).await,
    ] {
        assert!(matches!(
            result.unwrap_err(),
            ServiceError::Auth(AuthError::Forbidden)
        ));
    }
}
