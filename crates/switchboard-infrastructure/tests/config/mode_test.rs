//! Mode selector validation and dispatch

use serde_json::json;
use std::sync::Arc;
use switchboard_domain::error::Error;
use switchboard_domain::ports::{CacheProvider, SmsProvider};
use switchboard_domain::value_objects::{PhoneNumber, Secret};
use switchboard_infrastructure::config::{
    CacheConfig, CacheMode, MemoryConfig, ModeSelector, RedisConfig, SmsConfig, SmsMode,
    TwilioConfig,
};
use switchboard_infrastructure::di::VariantConfig;

fn twilio_block() -> TwilioConfig {
    TwilioConfig {
        account_sid: "AC0001".to_string(),
        auth_token: Secret::new("token"),
        phone_number: PhoneNumber::parse("+15550001111").unwrap(),
    }
}

#[test]
fn test_cache_defaults_to_memory() {
    let config: CacheConfig = serde_json::from_value(json!({})).unwrap();

    assert_eq!(config.mode(), CacheMode::Memory);
    assert_eq!(config.memory_config().map(|m| m.max_size), Some(100));
    assert!(config.redis_config().is_none());
    assert_eq!(config, CacheConfig::default());
}

#[test]
fn test_cache_redis_mode_requires_redis_slot() {
    let error = serde_json::from_value::<CacheConfig>(json!({"mode": "redis"})).unwrap_err();
    assert!(error.to_string().contains("Redis config required"));

    let error = CacheConfig::new(CacheMode::Redis, Some(MemoryConfig::default()), None).unwrap_err();
    assert!(error.is_configuration());
}

#[test]
fn test_cache_memory_mode_requires_memory_slot() {
    let error = CacheConfig::new(CacheMode::Memory, None, None).unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
    assert!(error.to_string().contains("Memory config required"));
}

#[test]
fn test_cache_inactive_slot_is_accepted() {
    let config: CacheConfig = serde_json::from_value(json!({
        "mode": "redis",
        "redis": {"host": "cache.internal", "password": "secret"}
    }))
    .unwrap();

    assert_eq!(config.mode(), CacheMode::Redis);
    // Default memory slot stays populated but unused
    assert!(config.memory_config().is_some());

    let redis = config.redis_config().unwrap();
    assert_eq!(redis.port, 6379);
    assert_eq!(redis.database, 0);
    assert!(redis.ssl);
}

#[test]
fn test_cache_present_slots_are_validated() {
    let too_small = serde_json::from_value::<CacheConfig>(json!({
        "mode": "memory",
        "memory": {"max_size": 5}
    }));
    assert!(too_small.is_err());

    let inactive_too_small = serde_json::from_value::<CacheConfig>(json!({
        "mode": "redis",
        "memory": {"max_size": 5},
        "redis": {"host": "cache.internal", "password": "secret"}
    }));
    assert!(inactive_too_small.is_err());

    let empty_host = CacheConfig::redis(RedisConfig::new("", Secret::new("secret")));
    assert!(empty_host.unwrap_err().is_configuration());
}

#[test]
fn test_cache_unknown_mode_rejected() {
    assert!(serde_json::from_value::<CacheConfig>(json!({"mode": "memcached"})).is_err());
}

#[test]
fn test_sms_defaults_to_communication_services() {
    let config: SmsConfig = serde_json::from_value(json!({})).unwrap();

    assert_eq!(config.mode(), SmsMode::CommunicationServices);
    assert!(config.communication_services_config().is_some());
    assert!(config.twilio_config().is_none());
}

#[test]
fn test_sms_twilio_mode_requires_twilio_slot() {
    let error = serde_json::from_value::<SmsConfig>(json!({"mode": "twilio"})).unwrap_err();
    assert!(error.to_string().contains("Twilio config required"));
}

#[test]
fn test_sms_communication_services_mode_requires_slot() {
    let error = SmsConfig::new(SmsMode::CommunicationServices, None, Some(twilio_block()))
        .unwrap_err();
    assert!(error.to_string().contains("Communication Services config required"));
}

#[test]
fn test_sms_twilio_block_is_validated() {
    let bad_phone = serde_json::from_value::<SmsConfig>(json!({
        "mode": "twilio",
        "twilio": {"account_sid": "AC1", "auth_token": "t", "phone_number": "call me"}
    }));
    assert!(bad_phone.is_err());

    let mut block = twilio_block();
    block.account_sid = String::new();
    assert!(SmsConfig::twilio(block).unwrap_err().is_configuration());
}

#[test]
fn test_sms_twilio_round_trip() {
    let config = SmsConfig::twilio(twilio_block()).unwrap();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["mode"], "twilio");
    assert_eq!(value["twilio"]["phone_number"], "+15550001111");

    let parsed: SmsConfig = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.mode(), SmsMode::Twilio);
    assert_eq!(parsed.twilio_config(), config.twilio_config());
}

#[tokio::test]
async fn test_equal_cache_configs_share_instance() {
    let built = CacheConfig::memory(MemoryConfig { max_size: 4242 }).unwrap();
    let parsed: CacheConfig = serde_json::from_value(json!({
        "mode": "memory",
        "memory": {"max_size": 4242}
    }))
    .unwrap();

    let first = built.instance().await.unwrap();
    let second = parsed.instance().await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.provider_name(), "memory");
    assert!(MemoryConfig::registry().contains(&MemoryConfig { max_size: 4242 }));
}

#[tokio::test]
async fn test_distinct_cache_configs_get_distinct_instances() {
    let small = CacheConfig::memory(MemoryConfig { max_size: 4243 }).unwrap();
    let large = CacheConfig::memory(MemoryConfig { max_size: 4244 }).unwrap();

    let first = small.instance().await.unwrap();
    let second = large.instance().await.unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_instance_state_is_shared() {
    let config = CacheConfig::memory(MemoryConfig { max_size: 4245 }).unwrap();

    let writer = config.instance().await.unwrap();
    writer.set("conversation:1", b"open", None).await.unwrap();

    let reader = config.clone().instance().await.unwrap();
    assert_eq!(
        reader.get("conversation:1").await.unwrap(),
        Some(b"open".to_vec())
    );
}

#[tokio::test]
async fn test_twilio_mode_dispatches_to_twilio() {
    let config = SmsConfig::twilio(twilio_block()).unwrap();

    let provider = config.instance().await.unwrap();

    assert_eq!(provider.provider_name(), "twilio");
    assert!(TwilioConfig::registry().contains(&twilio_block()));
}
