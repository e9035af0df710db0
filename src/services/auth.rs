//! Patron authentication service

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use rand::rngs::OsRng;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::PatronShort,
    repository::Repository,
    session::Session,
};

/// Build the argon2 hasher for the configured cost
pub fn argon2_from(config: &AuthConfig) -> AppResult<Argon2<'static>> {
    let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
        .map_err(|e| AppError::Internal(format!("Invalid argon2 parameters: {}", e)))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password using Argon2 with a fresh random salt
pub fn hash_password(argon2: &Argon2<'_>, password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    argon2: Argon2<'static>,
    /// Verified against when the login is unknown so both paths cost the same
    dummy_hash: String,
}

impl AuthService {
    pub fn new(repository: Repository, config: &AuthConfig) -> AppResult<Self> {
        let argon2 = argon2_from(config)?;
        let dummy_hash = hash_password(&argon2, "shelfmark-dummy-credential")?;
        Ok(Self {
            repository,
            argon2,
            dummy_hash,
        })
    }

    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        hash_password(&self.argon2, password)
    }

    /// Authenticate a patron by exact name and password, then sign the session in.
    /// On failure the session is left as it was.
    pub fn authenticate(
        &self,
        session: &mut Session,
        login: &str,
        password: &str,
    ) -> AppResult<PatronShort> {
        let patron = match self.repository.patrons_get_by_name(login)? {
            Some(patron) => patron,
            None => {
                self.verify_password(&self.dummy_hash, password)?;
                tracing::warn!(session = %session.id(), "Login failed: unknown patron");
                return Err(AppError::AuthenticationFailed);
            }
        };

        if !self.verify_password(&patron.password_hash, password)? {
            tracing::warn!(session = %session.id(), patron_id = patron.id, "Login failed: bad password");
            return Err(AppError::AuthenticationFailed);
        }

        let short = patron.short();
        session.sign_in(short.clone());
        tracing::info!(session = %session.id(), patron_id = short.id, "Patron logged in");
        Ok(short)
    }

    pub fn logout(&self, session: &mut Session) -> Option<PatronShort> {
        let previous = session.sign_out();
        if let Some(ref patron) = previous {
            tracing::info!(session = %session.id(), patron_id = patron.id, "Patron logged out");
        }
        previous
    }

    /// Verify a password against a stored PHC string; the digest comparison is constant-time
    fn verify_password(&self, hash: &str, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
