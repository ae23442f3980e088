//! Authentication service (credential store use cases)
//!
//! Handles registration, credential checks, login and "who am I".

use forum_common::auth::{hash_password, verify_password};
use forum_common::AppError;
use forum_core::entities::{Identity, NewUser, User};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_text;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user with a freshly salted password hash
    ///
    /// A duplicate username or email fails with the matching constraint
    /// error and leaves the existing row untouched.
    #[instrument(skip(self, password))]
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> ServiceResult<User> {
        require_text("username", username)?;
        require_text("password", password)?;
        require_text("email", email)?;

        let password_hash = hash_password(password)?;
        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::new(username, email), &password_hash)
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Register from an API request
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<CurrentUserResponse> {
        if request.password != request.confirm_password {
            return Err(ServiceError::validation("Passwords do not match"));
        }

        let user = self
            .create_user(&request.username, &request.password, &request.email)
            .await?;
        Ok(CurrentUserResponse::from(user))
    }

    /// Check a username/password pair
    ///
    /// Unknown users, wrong passwords and unreadable hashes all come back
    /// as `InvalidCredentials`; only store failures pass through.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<Identity> {
        let Some(credentials) = self.ctx.user_repo().find_credentials(username).await? else {
            warn!(username, "Login failed: user not found");
            return Err(AppError::InvalidCredentials.into());
        };

        match verify_password(password, &credentials.password_hash) {
            Ok(true) => Ok(credentials.identity()),
            Ok(false) => {
                warn!(username, "Login failed: invalid password");
                Err(AppError::InvalidCredentials.into())
            }
            Err(e) => {
                warn!(username, error = %e, "Login failed: unreadable password hash");
                Err(AppError::InvalidCredentials.into())
            }
        }
    }

    /// Login and issue an access token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let identity = self
            .authenticate(&request.username, &request.password)
            .await?;
        let token = self.ctx.jwt_service().issue(&identity)?;

        info!(user_id = %identity.id, "User logged in");

        Ok(AuthResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserResponse::from(&identity),
        })
    }

    /// Resolve an access token to the identity it was issued for
    pub fn identify(&self, token: &str) -> ServiceResult<Identity> {
        let claims = self.ctx.jwt_service().validate(token)?;
        Ok(claims.identity()?)
    }

    /// Find a user by username
    #[instrument(skip(self))]
    pub async fn find_user(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| forum_core::DomainError::UserNotFound(username.to_string()).into())
    }

    /// Profile of the authenticated user
    pub async fn current_user(&self, identity: &Identity) -> ServiceResult<CurrentUserResponse> {
        let user = self.find_user(&identity.username).await?;
        Ok(CurrentUserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::context;
    use forum_core::DomainError;

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "pw1".to_string(),
            confirm_password: "pw1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let (ctx, _) = context();
        let auth = AuthService::new(&ctx);

        let user = auth
            .register(register_request("alice", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(user.username, "alice");

        let identity = auth.authenticate("alice", "pw1").await.unwrap();
        assert_eq!(identity.id, user.id);

        assert!(matches!(
            auth.authenticate("alice", "wrong").await,
            Err(ServiceError::App(AppError::InvalidCredentials))
        ));
        assert!(matches!(
            auth.authenticate("nobody", "pw1").await,
            Err(ServiceError::App(AppError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let (ctx, _) = context();
        let mut request = register_request("alice", "alice@example.com");
        request.confirm_password = "other".to_string();

        let result = AuthService::new(&ctx).register(request).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_username_keeps_original_password() {
        let (ctx, _) = context();
        let auth = AuthService::new(&ctx);
        auth.create_user("alice", "pw1", "alice@example.com")
            .await
            .unwrap();

        let result = auth.create_user("alice", "pw2", "other@example.com").await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::UsernameTaken))
        ));

        assert!(auth.authenticate("alice", "pw1").await.is_ok());
        assert!(auth.authenticate("alice", "pw2").await.is_err());
    }

    #[tokio::test]
    async fn test_login_token_identifies_user() {
        let (ctx, _) = context();
        let auth = AuthService::new(&ctx);
        auth.create_user("alice", "pw1", "alice@example.com")
            .await
            .unwrap();

        let response = auth
            .login(LoginRequest {
                username: "alice".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.token_type, "Bearer");

        let identity = auth.identify(&response.access_token).unwrap();
        assert_eq!(identity.username, "alice");

        let me = auth.current_user(&identity).await.unwrap();
        assert_eq!(me.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_blank_username_rejected() {
        let (ctx, _) = context();
        let result = AuthService::new(&ctx)
            .create_user("  ", "pw1", "a@example.com")
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
