//! User lifecycle guard tests

#[cfg(test)]
mod tests {
    use crate::common::database::create_test_storage;
    use crate::common::fixtures::{sample_role, seed_role_and_user};
    use rbac_panel_rs::PanelError;
    use rbac_panel_rs::auth::password::verify_password;
    use rbac_panel_rs::services::{UserService, UserUpdate};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_user_hashes_password_and_expands_role() {
        let storage = create_test_storage().await;
        let role = storage
            .database
            .create_role(&sample_role("Editors"))
            .await
            .unwrap();
        let service = UserService::new(storage.clone());

        let created = service
            .create("Alex", "alex@example.com", "s3cret-pass", role.id)
            .await
            .unwrap();

        assert_eq!(created.user.email, "alex@example.com");
        assert_eq!(created.role.name, "Editors");
        assert_ne!(created.user.password_hash, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &created.user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_rejected() {
        let storage = create_test_storage().await;
        let (role, _user) = seed_role_and_user(&storage, "Editors", "taken@example.com").await;
        let service = UserService::new(storage);

        let err = service
            .create("Other", "taken@example.com", "password123", role.id)
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_with_missing_role_rejected() {
        let storage = create_test_storage().await;
        let service = UserService::new(storage.clone());

        let err = service
            .create("Alex", "alex@example.com", "password123", Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));

        // Guard fires before any write
        assert!(storage
            .database
            .find_user_by_email("alex@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_update_missing_user_not_found() {
        let storage = create_test_storage().await;
        let service = UserService::new(storage);

        let err = service
            .update(Uuid::new_v4(), UserUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_role_reference_must_exist() {
        let storage = create_test_storage().await;
        let (_role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let service = UserService::new(storage);

        let err = service
            .update(
                user.id,
                UserUpdate {
                    role_id: Some(Uuid::new_v4()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_reassigns_role() {
        let storage = create_test_storage().await;
        let (_role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let viewers = storage
            .database
            .create_role(&sample_role("Viewers"))
            .await
            .unwrap();
        let service = UserService::new(storage);

        let updated = service
            .update(
                user.id,
                UserUpdate {
                    role_id: Some(viewers.id),
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.role.name, "Viewers");
        assert_eq!(updated.user.name, "Renamed");
    }

    #[tokio::test]
    async fn test_deactivate_user() {
        let storage = create_test_storage().await;
        let (_role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let service = UserService::new(storage);

        let updated = service
            .update(
                user.id,
                UserUpdate {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.user.is_active);
    }

    #[tokio::test]
    async fn test_self_deletion_conflicts() {
        let storage = create_test_storage().await;
        let (_role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let service = UserService::new(storage.clone());

        let err = service.delete(user.id, user.id).await.unwrap_err();
        assert!(matches!(err, PanelError::Conflict(_)));

        // The account survives
        assert!(storage
            .database
            .find_user_by_id(user.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_self_deletion_checked_before_existence() {
        let storage = create_test_storage().await;
        let service = UserService::new(storage);

        // Even an id that matches no stored user conflicts when it names
        // the acting actor
        let id = Uuid::new_v4();
        let err = service.delete(id, id).await.unwrap_err();
        assert!(matches!(err, PanelError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_other_user() {
        let storage = create_test_storage().await;
        let (role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let admin = storage
            .database
            .create_user(&crate::common::fixtures::sample_user("admin@example.com", &role))
            .await
            .unwrap();
        let service = UserService::new(storage.clone());

        service.delete(user.id, admin.id).await.unwrap();
        assert!(storage
            .database
            .find_user_by_id(user.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_user_not_found() {
        let storage = create_test_storage().await;
        let service = UserService::new(storage);

        let err = service
            .delete(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::NotFound(_)));
    }
}
