//! Role lifecycle guard tests

#[cfg(test)]
mod tests {
    use crate::common::database::create_test_storage;
    use crate::common::fixtures::{sample_user, seed_role_and_user};
    use rbac_panel_rs::services::{RoleService, RoleUpdate, UserService};
    use rbac_panel_rs::{PanelError, Permission};
    use uuid::Uuid;

    fn tokens(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_create_role() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let role = service
            .create("Editors", "Can edit content", &tokens(&["read", "update"]))
            .await
            .unwrap();

        assert_eq!(role.name, "Editors");
        assert_eq!(role.permissions, vec![Permission::Read, Permission::Update]);
        assert!(role.is_active);
    }

    #[tokio::test]
    async fn test_create_trims_and_rejects_empty_name() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let err = service
            .create("   ", "Blank name", &tokens(&["read"]))
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));

        let role = service
            .create("  Editors  ", "Trimmed", &tokens(&["read"]))
            .await
            .unwrap();
        assert_eq!(role.name, "Editors");
    }

    #[tokio::test]
    async fn test_create_requires_description() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let err = service.create("Editors", "  ", &tokens(&["read"])).await.unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_permission() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage.clone());

        let err = service
            .create("Editors", "Bad tokens", &tokens(&["read", "fly"]))
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
        assert!(err.to_string().contains("fly"));

        // The whole list fails; nothing is stored
        assert!(storage
            .database
            .find_role_by_name("Editors")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_create_collapses_duplicate_tokens() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let role = service
            .create("Editors", "Dup tokens", &tokens(&["read", "read", "update"]))
            .await
            .unwrap();
        assert_eq!(role.permissions, vec![Permission::Read, Permission::Update]);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_rejected() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        service
            .create("Editors", "First", &tokens(&["read"]))
            .await
            .unwrap();
        let err = service
            .create("Editors", "Second", &tokens(&["read"]))
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_missing_role_not_found() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let err = service
            .update(Uuid::new_v4(), RoleUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_permissions() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let role = service
            .create("Editors", "Editors", &tokens(&["read"]))
            .await
            .unwrap();

        let updated = service
            .update(
                role.id,
                RoleUpdate {
                    permissions: Some(tokens(&["create", "delete"])),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            updated.permissions,
            vec![Permission::Create, Permission::Delete]
        );
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_rejected() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        service
            .create("Editors", "Editors", &tokens(&["read"]))
            .await
            .unwrap();
        let viewers = service
            .create("Viewers", "Viewers", &tokens(&["read"]))
            .await
            .unwrap();

        let err = service
            .update(
                viewers.id,
                RoleUpdate {
                    name: Some("Editors".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_keeping_own_name_allowed() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let role = service
            .create("Editors", "Editors", &tokens(&["read"]))
            .await
            .unwrap();

        let updated = service
            .update(
                role.id,
                RoleUpdate {
                    name: Some("Editors".to_string()),
                    description: Some("Edits content".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description, "Edits content");
    }

    #[tokio::test]
    async fn test_deactivated_role_leaves_listing() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        let role = service
            .create("Editors", "Editors", &tokens(&["read"]))
            .await
            .unwrap();
        service
            .update(
                role.id,
                RoleUpdate {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_in_use_role_conflicts() {
        let storage = create_test_storage().await;
        let (role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let service = RoleService::new(storage.clone());

        let err = service.delete(role.id).await.unwrap_err();
        assert!(matches!(err, PanelError::Conflict(_)));

        // Reassign the user, then the delete goes through
        let other = storage
            .database
            .create_role(&crate::common::fixtures::sample_role("Viewers"))
            .await
            .unwrap();
        let users = UserService::new(storage.clone());
        users
            .update(
                user.id,
                rbac_panel_rs::services::UserUpdate {
                    role_id: Some(other.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        service.delete(role.id).await.unwrap();
        assert!(storage
            .database
            .find_role_by_id(role.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_in_use_check_runs_before_not_found() {
        let storage = create_test_storage().await;
        let service = RoleService::new(storage);

        // Missing role has no users, so the absence surfaces
        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, PanelError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_role_last_user_removed_first() {
        let storage = create_test_storage().await;
        let (role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let service = RoleService::new(storage.clone());

        storage
            .database
            .create_user(&sample_user("second@example.com", &role))
            .await
            .unwrap();

        // Two users block the delete
        assert!(matches!(
            service.delete(role.id).await.unwrap_err(),
            PanelError::Conflict(_)
        ));

        storage.database.delete_user(user.id).await.unwrap();

        // One remaining user still blocks it
        assert!(matches!(
            service.delete(role.id).await.unwrap_err(),
            PanelError::Conflict(_)
        ));
    }
}
