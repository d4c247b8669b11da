//! Tests for the null providers

use switchboard_domain::value_objects::PhoneNumber;
use switchboard_providers::cache::NullCacheProvider;
use switchboard_providers::sms::NullSmsProvider;
use switchboard_providers::{CacheProvider, SmsProvider};

#[tokio::test]
async fn test_null_cache_stores_nothing() {
    let cache = NullCacheProvider::new();

    cache.set("k", b"v", None).await.unwrap();

    assert_eq!(cache.get("k").await.unwrap(), None);
    assert!(!cache.exists("k").await.unwrap());
    assert!(!cache.delete("k").await.unwrap());
    assert_eq!(cache.provider_name(), "null");
}

#[tokio::test]
async fn test_null_sms_accepts_everything() {
    let sms = NullSmsProvider::new();
    let to = PhoneNumber::parse("+33612345678").unwrap();

    assert!(sms.send(&to, "hello").await.unwrap());
    assert_eq!(sms.provider_name(), "null");
}
