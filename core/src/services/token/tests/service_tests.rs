use uuid::Uuid;

use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..TokenServiceConfig::default()
    })
}

#[test]
fn token_pair_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let pair = service.generate_token_pair(user_id).unwrap();
    assert_eq!(pair.access_expires_in, 3600);

    let access = service.verify_access_token(&pair.access_token).unwrap();
    assert_eq!(access.user_id().unwrap(), user_id);

    let refresh = service.verify_refresh_token(&pair.refresh_token).unwrap();
    assert_eq!(refresh.user_id().unwrap(), user_id);
}

#[test]
fn identify_recovers_the_subject() {
    let service = service();
    let user_id = Uuid::new_v4();
    let pair = service.generate_token_pair(user_id).unwrap();
    assert_eq!(service.identify(&pair.access_token).unwrap(), user_id);
}

#[test]
fn token_types_are_not_interchangeable() {
    let service = service();
    let pair = service.generate_token_pair(Uuid::new_v4()).unwrap();

    let err = service.verify_access_token(&pair.refresh_token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::WrongTokenType { .. })
    ));

    let err = service.verify_refresh_token(&pair.access_token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::WrongTokenType { .. })
    ));
}

#[test]
fn tampered_token_is_rejected() {
    let service = service();
    let pair = service.generate_token_pair(Uuid::new_v4()).unwrap();

    let mut tampered = pair.access_token.clone();
    tampered.pop();
    tampered.push(if tampered.ends_with('A') { 'B' } else { 'A' });

    assert!(service.verify_access_token(&tampered).is_err());
}

#[test]
fn token_from_another_secret_is_rejected() {
    let service = service();
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "different-secret".to_string(),
        ..TokenServiceConfig::default()
    });

    let pair = other.generate_token_pair(Uuid::new_v4()).unwrap();
    let err = service.verify_access_token(&pair.access_token).unwrap_err();
    assert!(matches!(err, DomainError::Token(_)));
}

#[test]
fn expired_token_is_rejected() {
    // Negative lifetime puts exp safely past the decoder's leeway
    let service = TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        access_token_expiry: -120,
        ..TokenServiceConfig::default()
    });

    let pair = service.generate_token_pair(Uuid::new_v4()).unwrap();
    let err = service.verify_access_token(&pair.access_token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::TokenExpired)
    ));
}

#[test]
fn garbage_is_an_invalid_format() {
    let service = service();
    assert!(service.verify_access_token("not.a.jwt").is_err());
    assert!(service.identify("").is_err());
}
