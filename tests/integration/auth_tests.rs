//! Login, registration and token verification tests

#[cfg(test)]
mod tests {
    use crate::common::database::create_test_storage;
    use crate::common::fixtures::{admin_role, sample_role, sample_user, seed_role_and_user};
    use rbac_panel_rs::auth::AuthSystem;
    use rbac_panel_rs::config::AuthConfig;
    use rbac_panel_rs::services::{RoleService, RoleUpdate};
    use rbac_panel_rs::storage::StorageLayer;
    use rbac_panel_rs::{PanelError, Permission};
    use std::sync::Arc;

    fn auth_system(storage: Arc<StorageLayer>) -> AuthSystem {
        AuthSystem::new(&AuthConfig::default(), storage)
    }

    #[tokio::test]
    async fn test_login_issues_permission_snapshot() {
        let storage = create_test_storage().await;
        seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let auth = auth_system(storage);

        let outcome = auth
            .login("member@example.com", "password123")
            .await
            .unwrap();

        assert!(!outcome.token.is_empty());
        assert_eq!(
            outcome.permissions,
            vec![Permission::Read, Permission::Update]
        );
        assert_eq!(outcome.user.role.name, "Editors");

        // The token resolves back to an actor carrying the same snapshot
        let actor = auth.authenticate(Some(&outcome.token)).unwrap();
        assert_eq!(actor.user_id, outcome.user.user.id);
        assert!(actor.permissions.contains(&Permission::Read));
        assert!(!actor.permissions.contains(&Permission::ManageUsers));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let storage = create_test_storage().await;
        seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let auth = auth_system(storage);

        let err = auth
            .login("member@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Auth(_)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let storage = create_test_storage().await;
        let auth = auth_system(storage);

        let err = auth
            .login("ghost@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Auth(_)));
    }

    #[tokio::test]
    async fn test_login_disabled_account() {
        let storage = create_test_storage().await;
        let role = storage
            .database
            .create_role(&sample_role("Editors"))
            .await
            .unwrap();
        let mut user = sample_user("member@example.com", &role);
        user.is_active = false;
        storage.database.create_user(&user).await.unwrap();
        let auth = auth_system(storage);

        let err = auth
            .login("member@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Auth(_)));
    }

    #[tokio::test]
    async fn test_login_records_last_login() {
        let storage = create_test_storage().await;
        let (_role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let auth = auth_system(storage.clone());

        auth.login("member@example.com", "password123")
            .await
            .unwrap();

        let reread = storage
            .database
            .find_user_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert!(reread.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_inactive_role_yields_empty_snapshot() {
        let storage = create_test_storage().await;
        let (role, _user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let roles = RoleService::new(storage.clone());
        roles
            .update(
                role.id,
                RoleUpdate {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let auth = auth_system(storage);

        let outcome = auth
            .login("member@example.com", "password123")
            .await
            .unwrap();
        assert!(outcome.permissions.is_empty());

        let actor = auth.authenticate(Some(&outcome.token)).unwrap();
        assert!(actor.permissions.is_empty());
    }

    #[tokio::test]
    async fn test_role_edits_do_not_touch_outstanding_tokens() {
        let storage = create_test_storage().await;
        let (role, _user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let auth = auth_system(storage.clone());

        let outcome = auth
            .login("member@example.com", "password123")
            .await
            .unwrap();

        // Strip the role after the token was issued
        let roles = RoleService::new(storage);
        roles
            .update(
                role.id,
                RoleUpdate {
                    permissions: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // The outstanding token still carries the snapshot taken at login
        let actor = auth.authenticate(Some(&outcome.token)).unwrap();
        assert!(actor.permissions.contains(&Permission::Read));

        // A fresh login picks up the narrowed set
        let fresh = auth
            .login("member@example.com", "password123")
            .await
            .unwrap();
        assert!(fresh.permissions.is_empty());
    }

    #[tokio::test]
    async fn test_register_with_default_role() {
        let storage = create_test_storage().await;
        storage
            .database
            .create_role(&sample_role("Developer"))
            .await
            .unwrap();
        let auth = auth_system(storage);

        let outcome = auth
            .register("New User", "new@example.com", "password123", None)
            .await
            .unwrap();

        assert_eq!(outcome.user.role.name, "Developer");
        assert_eq!(outcome.user.user.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_register_with_named_role() {
        let storage = create_test_storage().await;
        storage
            .database
            .create_role(&admin_role("Admin"))
            .await
            .unwrap();
        let auth = auth_system(storage);

        let outcome = auth
            .register("New Admin", "boss@example.com", "password123", Some("Admin"))
            .await
            .unwrap();
        assert_eq!(outcome.user.role.name, "Admin");
        assert_eq!(outcome.permissions, Permission::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let storage = create_test_storage().await;
        seed_role_and_user(&storage, "Editors", "taken@example.com").await;
        let auth = auth_system(storage);

        let err = auth
            .register("Other", "taken@example.com", "password123", Some("Editors"))
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_unknown_role_rejected() {
        let storage = create_test_storage().await;
        let auth = auth_system(storage.clone());

        let err = auth
            .register("New User", "new@example.com", "password123", Some("Nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::Validation(_)));

        // Nothing was written
        assert!(storage
            .database
            .find_user_by_email("new@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_authenticate_missing_token() {
        let storage = create_test_storage().await;
        let auth = auth_system(storage);

        let err = auth.authenticate(None).unwrap_err();
        assert!(matches!(err, PanelError::Auth(_)));
    }

    #[tokio::test]
    async fn test_authenticate_garbage_token() {
        let storage = create_test_storage().await;
        let auth = auth_system(storage);

        assert!(auth.authenticate(Some("not-a-jwt")).is_err());
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let storage = create_test_storage().await;
        seed_role_and_user(&storage, "Editors", "member@example.com").await;

        let auth_a = auth_system(storage.clone());
        let auth_b = auth_system(storage);

        let outcome = auth_a
            .login("member@example.com", "password123")
            .await
            .unwrap();

        // Default configs generate independent secrets
        assert!(auth_b.authenticate(Some(&outcome.token)).is_err());
    }

    #[tokio::test]
    async fn test_current_user() {
        let storage = create_test_storage().await;
        let (_role, user) = seed_role_and_user(&storage, "Editors", "member@example.com").await;
        let auth = auth_system(storage);

        let outcome = auth
            .login("member@example.com", "password123")
            .await
            .unwrap();
        let actor = auth.authenticate(Some(&outcome.token)).unwrap();

        let me = auth.current_user(&actor).await.unwrap();
        assert_eq!(me.user.id, user.id);
        assert_eq!(me.role.name, "Editors");
    }
}
