mod common;

use std::{sync::Arc, time::Duration};

use common::*;
use songscout::{management::LookupCache, types::Artist};

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let fake = Arc::new(coldplay_catalog());
    let client = client_for(&fake);
    let cache = LookupCache::unbounded();

    let first = cache
        .get_or_compute("Coldplay", 2, || client.search_artist("Coldplay", 2))
        .await;
    assert_eq!(fake.search_calls(), 1);
    assert_eq!(fake.lookup_calls(), 2);

    let second = cache
        .get_or_compute("Coldplay", 2, || client.search_artist("Coldplay", 2))
        .await;
    assert_eq!(fake.search_calls(), 1);
    assert_eq!(fake.lookup_calls(), 2);

    assert_eq!(first, second);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_limit_is_part_of_the_key() {
    let fake = Arc::new(
        FakeCatalog::new().with_albums(
            "Queen",
            (1..=6)
                .map(|i| album_row(i, &format!("Album {}", i), "Queen"))
                .collect(),
        ),
    );
    let client = client_for(&fake);
    let cache = LookupCache::unbounded();

    let three = cache
        .get_or_compute("Queen", 3, || client.search_artist("Queen", 3))
        .await;
    let five = cache
        .get_or_compute("Queen", 5, || client.search_artist("Queen", 5))
        .await;

    assert_eq!(fake.search_calls(), 2);
    assert_eq!(three.albums.len(), 3);
    assert_eq!(five.albums.len(), 5);
    assert_eq!(cache.len().await, 2);
}

#[tokio::test]
async fn test_name_is_case_sensitive() {
    let fake = Arc::new(coldplay_catalog());
    let client = client_for(&fake);
    let cache = LookupCache::unbounded();

    cache
        .get_or_compute("Coldplay", 2, || client.search_artist("Coldplay", 2))
        .await;
    cache
        .get_or_compute("coldplay", 2, || client.search_artist("coldplay", 2))
        .await;

    assert_eq!(fake.search_calls(), 2);
    assert!(cache.get("Coldplay", 2).await.is_some());
    assert!(cache.get("coldplay", 2).await.is_some());
    assert!(cache.get("COLDPLAY", 2).await.is_none());
}

#[tokio::test]
async fn test_concurrent_identical_lookups_coalesce() {
    let fake = Arc::new(coldplay_catalog().with_delay(Duration::from_millis(50)));
    let client = client_for(&fake);
    let cache = LookupCache::unbounded();

    let results = futures::future::join_all((0..8).map(|_| {
        cache.get_or_compute("Coldplay", 2, || client.search_artist("Coldplay", 2))
    }))
    .await;

    assert_eq!(fake.search_calls(), 1);
    assert_eq!(fake.lookup_calls(), 2);
    assert!(results.iter().all(|a| Arc::ptr_eq(a, &results[0])));
}

#[tokio::test]
async fn test_concurrent_lookups_across_tasks_coalesce() {
    let fake = Arc::new(coldplay_catalog().with_delay(Duration::from_millis(50)));
    let client = client_for(&fake);
    let cache = Arc::new(LookupCache::unbounded());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let client = client.clone();
            tokio::spawn(async move {
                cache
                    .get_or_compute("Coldplay", 2, || client.search_artist("Coldplay", 2))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let artist = handle.await.unwrap();
        assert_eq!(artist.track_count(), 6);
    }
    assert_eq!(fake.search_calls(), 1);
}

#[tokio::test]
async fn test_capacity_evicts_oldest_key() {
    let cache = LookupCache::with_capacity(2);

    for name in ["a", "b", "c"] {
        cache
            .get_or_compute(name, 1, || async move { Artist::new(name, Vec::new()) })
            .await;
    }

    assert_eq!(cache.len().await, 2);
    assert!(cache.get("a", 1).await.is_none());
    assert!(cache.get("b", 1).await.is_some());
    assert!(cache.get("c", 1).await.is_some());
}

#[tokio::test]
async fn test_capacity_keeps_in_flight_lookup_shared() {
    let fake = Arc::new(
        coldplay_catalog()
            .with_albums("Other", vec![album_row(7, "Elsewhere", "Other")])
            .with_delay(Duration::from_millis(100)),
    );
    let client = client_for(&fake);
    let cache = Arc::new(LookupCache::with_capacity(1));

    let spawn_lookup = |name: &'static str, after: Duration| {
        let cache = Arc::clone(&cache);
        let client = client.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            cache
                .get_or_compute(name, 2, || client.search_artist(name, 2))
                .await
        })
    };

    let first = spawn_lookup("Coldplay", Duration::ZERO);
    let other = spawn_lookup("Other", Duration::from_millis(10));
    let again = spawn_lookup("Coldplay", Duration::from_millis(30));

    let first = first.await.unwrap();
    let again = again.await.unwrap();
    other.await.unwrap();

    assert_eq!(fake.search_calls(), 2);
    assert!(Arc::ptr_eq(&first, &again));
}

#[tokio::test]
async fn test_capacity_evicts_once_lookups_finish() {
    let cache = LookupCache::with_capacity(1);

    cache
        .get_or_compute("a", 1, || async { Artist::new("a", Vec::new()) })
        .await;
    cache
        .get_or_compute("b", 1, || async { Artist::new("b", Vec::new()) })
        .await;

    assert_eq!(cache.len().await, 1);
    assert!(cache.get("a", 1).await.is_none());
    assert!(cache.get("b", 1).await.is_some());
}

#[tokio::test]
async fn test_failed_lookup_is_cached_like_any_other_result() {
    let fake = Arc::new(FakeCatalog::unreachable());
    let client = client_for(&fake);
    let cache = LookupCache::unbounded();

    let artist = cache
        .get_or_compute("Nirvana", 3, || client.search_artist("Nirvana", 3))
        .await;
    cache
        .get_or_compute("Nirvana", 3, || client.search_artist("Nirvana", 3))
        .await;

    assert_eq!(artist.name, "Nirvana");
    assert!(artist.albums.is_empty());
    assert_eq!(fake.search_calls(), 1);
}

#[tokio::test]
async fn test_clear() {
    let cache = LookupCache::default();
    cache
        .get_or_compute("x", 1, || async { Artist::new("x", Vec::new()) })
        .await;
    assert!(!cache.is_empty().await);

    cache.clear().await;

    assert!(cache.is_empty().await);
    assert!(cache.get("x", 1).await.is_none());
}
