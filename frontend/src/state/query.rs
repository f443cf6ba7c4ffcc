use leptos::*;
use std::collections::HashMap;

/// Identifies one cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(pub &'static str);

pub const AUTH_USER: QueryKey = QueryKey("authUser");

/// Narrow seam the sign-up flow talks to after a successful request.
pub trait QueryInvalidator {
    fn invalidate(&self, key: QueryKey);
}

/// Client-side query cache.
///
/// Each key carries a generation counter. Readers track the counter (for
/// example as the source of a `Resource`), so bumping it marks the entry
/// stale and triggers a re-fetch on the next read.
#[derive(Clone, Copy)]
pub struct QueryClient {
    generations: RwSignal<HashMap<QueryKey, u64>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            generations: create_rw_signal(HashMap::new()),
        }
    }

    /// Tracked read, suitable as a resource source.
    pub fn generation(&self, key: QueryKey) -> u64 {
        self.generations
            .with(|map| map.get(&key).copied().unwrap_or_default())
    }

    #[cfg(test)]
    pub fn generation_untracked(&self, key: QueryKey) -> u64 {
        self.generations
            .with_untracked(|map| map.get(&key).copied().unwrap_or_default())
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryInvalidator for QueryClient {
    fn invalidate(&self, key: QueryKey) {
        log::debug!("invalidating query {}", key.0);
        self.generations.update(|map| {
            *map.entry(key).or_default() += 1;
        });
    }
}

pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client);
    client
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().unwrap_or_else(provide_query_client)
}
