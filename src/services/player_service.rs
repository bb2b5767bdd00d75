use std::sync::Arc;

use tracing::info;

use crate::models::player::{Player, PlayerSummary};
use crate::repositories::player_repository::PlayerRepository;
use crate::services::errors::player_service_errors::PlayerServiceError;

pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        PlayerService { repository }
    }

    /// Registers a new player and returns it, id included. Usernames are
    /// not unique; the id is the only identity.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Player, PlayerServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Username or password cannot be empty".to_string(),
            ));
        }
        let stored_password = password.to_string(); // Replace with real hashing
        let player = Player::new(username.to_string(), stored_password);
        self.repository.create(&player).await;
        info!(player_id = %player.id, username, "player registered");
        Ok(player)
    }

    /// Looks an id up again; this is the whole token-resolution scheme.
    pub async fn resolve(&self, player_id: &str) -> Result<Player, PlayerServiceError> {
        if player_id.is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Player ID cannot be empty".to_string(),
            ));
        }
        self.repository
            .get(player_id)
            .await
            .map_err(|_| PlayerServiceError::PlayerNotFound)
    }

    /// Every registered player in registration order, credentials left out.
    pub async fn list(&self) -> Vec<PlayerSummary> {
        let mut players = self.repository.list().await;
        players.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        players.iter().map(Player::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::player_repository::{InMemoryPlayerRepository, MockPlayerRepository};

    fn service() -> PlayerService {
        PlayerService::new(Arc::new(InMemoryPlayerRepository::new()))
    }

    #[tokio::test]
    async fn test_register_then_resolve_round_trip() {
        let service = service();

        let registered = service.register("anna", "secret").await.unwrap();
        let resolved = service.resolve(&registered.id).await.unwrap();

        assert_eq!(resolved.id, registered.id);
        assert_eq!(resolved.username, "anna");
        assert!(!resolved.busy);
    }

    #[tokio::test]
    async fn test_register_rejects_empty_username() {
        let service = service();

        let result = service.register("", "secret").await;

        assert!(matches!(
            result,
            Err(PlayerServiceError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_password() {
        let service = service();

        let result = service.register("anna", "").await;

        assert!(matches!(
            result,
            Err(PlayerServiceError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_usernames_get_distinct_ids() {
        let service = service();

        let first = service.register("anna", "secret").await.unwrap();
        let second = service.register("anna", "secret").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let service = service();

        let result = service.resolve("missing-id").await;

        assert_eq!(result, Err(PlayerServiceError::PlayerNotFound));
    }

    #[tokio::test]
    async fn test_resolve_empty_id_is_a_validation_error() {
        let service = service();

        let result = service.resolve("").await;

        assert!(matches!(
            result,
            Err(PlayerServiceError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_registration() {
        let service = service();
        let first = service.register("anna", "secret").await.unwrap();
        let second = service.register("boris", "secret").await.unwrap();

        let listed = service.list().await;

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[tokio::test]
    async fn test_resolve_delegates_to_the_repository() {
        let mut mock_repo = MockPlayerRepository::new();
        mock_repo.expect_get().returning(|_| {
            Box::pin(async {
                Ok(Player::new("anna".to_string(), "secret".to_string()))
            })
        });
        let service = PlayerService::new(Arc::new(mock_repo));

        let resolved = service.resolve("any-id").await.unwrap();

        assert_eq!(resolved.username, "anna");
    }
}
