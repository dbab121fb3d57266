use async_trait::async_trait;
use dashmap::DashMap;

// Last-spin-timestamp store, one record per user, upsert on write. The
// backend is fixed at startup; durable-store failures are absorbed here
// (failed read = absent record, failed write = not confirmed), so the
// spin flow never sees a storage error.
#[async_trait]
pub trait EligibilityStore: Send + Sync {
    async fn last_spin(&self, user_id: &str) -> Option<i64>;
    async fn record_spin(&self, user_id: &str, now_ms: i64);
}

// Redis-backed store; keys are spin:{userId} holding the last-spin millis
pub struct RedisEligibilityStore {
    client: redis::Client,
}

impl RedisEligibilityStore {
    pub fn connect(url: &str) -> redis::RedisResult<Self> {
        Ok(Self {
            client: redis::Client::open(url)?,
        })
    }

    fn key(user_id: &str) -> String {
        format!("spin:{user_id}")
    }

    async fn read(&self, user_id: &str) -> redis::RedisResult<Option<i64>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("GET")
            .arg(Self::key(user_id))
            .query_async(&mut conn)
            .await
    }

    async fn write(&self, user_id: &str, now_ms: i64) -> redis::RedisResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = redis::cmd("SET")
            .arg(Self::key(user_id))
            .arg(now_ms)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl EligibilityStore for RedisEligibilityStore {
    async fn last_spin(&self, user_id: &str) -> Option<i64> {
        match self.read(user_id).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("redis read failed for {user_id}: {err}");
                None
            }
        }
    }

    async fn record_spin(&self, user_id: &str, now_ms: i64) {
        if let Err(err) = self.write(user_id, now_ms).await {
            tracing::warn!("redis write failed for {user_id}: {err}");
        }
    }
}

// Process-local fallback when no Redis URL is configured; records live
// for the process lifetime only
#[derive(Default)]
pub struct MemoryEligibilityStore {
    records: DashMap<String, i64>,
}

impl MemoryEligibilityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EligibilityStore for MemoryEligibilityStore {
    async fn last_spin(&self, user_id: &str) -> Option<i64> {
        self.records.get(user_id).map(|entry| *entry)
    }

    async fn record_spin(&self, user_id: &str, now_ms: i64) {
        self.records.insert(user_id.to_string(), now_ms);
    }
}
