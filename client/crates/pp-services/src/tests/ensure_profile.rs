use crate::memory::InMemoryProfileStore;
use crate::{ProfileStore, ServiceError, ensure_profile};

use pp_core::{Identity, Profile, TemperatureUnit, Theme};

use chrono::Utc;
use googletest::prelude::*;

fn identity() -> Identity {
    Identity::new("uid-42", "moss@example.com")
}

// =========================================================================
// Profile Bootstrap Tests
// =========================================================================

#[tokio::test]
async fn given_no_document_when_ensured_then_defaults_are_created() {
    // Given
    let store = InMemoryProfileStore::new();

    // When
    let profile = ensure_profile(&store, &identity()).await.unwrap();

    // Then
    assert_that!(profile.theme, eq(Theme::Dark));
    assert_that!(profile.temperature_unit, eq(TemperatureUnit::C));
    assert_that!(store.create_calls(), eq(1));
    assert_that!(store.document("uid-42"), some(anything()));
}

#[tokio::test]
async fn given_existing_document_when_ensured_then_it_is_not_overwritten() {
    // Given
    let store = InMemoryProfileStore::new();
    let mut existing = Profile::with_defaults(&identity(), Utc::now());
    existing.theme = Theme::Light;
    existing.location = "Lyon, Auvergne-Rhone-Alpes".into();
    store.insert(existing.clone());

    // When
    let profile = ensure_profile(&store, &identity()).await.unwrap();

    // Then
    assert_that!(profile, eq(&existing));
    assert_that!(store.create_calls(), eq(0));
    assert_that!(store.document("uid-42"), some(eq(&existing)));
}

#[tokio::test]
async fn given_two_calls_in_succession_when_ensured_then_one_document_exists() {
    // Given
    let store = InMemoryProfileStore::new();

    // When
    let first = ensure_profile(&store, &identity()).await.unwrap();
    let second = ensure_profile(&store, &identity()).await.unwrap();

    // Then
    assert_that!(store.document_count(), eq(1));
    assert_that!(store.create_calls(), eq(1));
    assert_that!(second.created_at, eq(first.created_at));
}

#[tokio::test]
async fn given_store_read_failure_when_ensured_then_error_propagates() {
    // Given
    let store = InMemoryProfileStore::new();
    store.fail_gets("backend offline");

    // When
    let result = ensure_profile(&store, &identity()).await;

    // Then
    assert!(matches!(result, Err(ServiceError::Api { .. })));
    assert_that!(store.get(&identity().uid).await.is_err(), eq(true));
    assert_that!(store.create_calls(), eq(0));
}

#[tokio::test]
async fn given_create_failure_when_ensured_then_retry_after_recovery_creates_once() {
    // Given
    let store = InMemoryProfileStore::new();
    store.fail_creates("quota exceeded");

    // When
    let failed = ensure_profile(&store, &identity()).await;
    store.clear_failures();
    let recovered = ensure_profile(&store, &identity()).await;

    // Then
    assert!(matches!(failed, Err(ServiceError::Api { .. })));
    assert_that!(recovered.is_ok(), eq(true));
    assert_that!(store.document_count(), eq(1));
}
