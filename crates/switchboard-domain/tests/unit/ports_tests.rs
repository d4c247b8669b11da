//! Capability port contract tests using in-test implementations

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use switchboard_domain::Result;
use switchboard_domain::ports::{CacheProvider, SmsProvider};
use switchboard_domain::value_objects::PhoneNumber;

#[derive(Default)]
struct MapCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl CacheProvider for MapCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.lock().unwrap().contains_key(key))
    }

    fn provider_name(&self) -> &str {
        "map"
    }
}

#[derive(Default)]
struct RecordingSms {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SmsProvider for RecordingSms {
    async fn send(&self, recipient: &PhoneNumber, body: &str) -> Result<bool> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), body.to_string()));
        Ok(true)
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn test_cache_port_is_object_safe() {
    let cache: Box<dyn CacheProvider> = Box::new(MapCache::default());
    cache.set("k", b"v", None).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), Some(b"v".to_vec()));
    assert!(cache.delete("k").await.unwrap());
    assert!(!cache.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_sms_port_is_object_safe() {
    let recording = RecordingSms::default();
    let sms: &dyn SmsProvider = &recording;
    let to = PhoneNumber::parse("+33612345678").unwrap();
    assert!(sms.send(&to, "hello").await.unwrap());
    assert_eq!(recording.sent.lock().unwrap().len(), 1);
}
