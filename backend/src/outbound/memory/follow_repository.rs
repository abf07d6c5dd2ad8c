//! In-memory follow repository.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{FollowPersistenceError, FollowRepository};
use crate::domain::{FollowEdge, UserId};

type Graph = HashMap<UserId, BTreeSet<UserId>>;

/// Adjacency map from follower to followed accounts.
#[derive(Debug, Default)]
pub struct InMemoryFollowRepository {
    graph: RwLock<Graph>,
}

impl InMemoryFollowRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `edges`.
    ///
    /// # Examples
    /// ```
    /// use imnotupyet::domain::FollowEdge;
    /// use imnotupyet::outbound::memory::InMemoryFollowRepository;
    ///
    /// let edge = FollowEdge::try_new("alice", "bob").expect("valid edge");
    /// let repository = InMemoryFollowRepository::with_edges([edge]);
    /// # let _ = repository;
    /// ```
    pub fn with_edges(edges: impl IntoIterator<Item = FollowEdge>) -> Self {
        let mut graph = Graph::new();
        for edge in edges {
            let (follower, following) = edge.into_parts();
            graph.entry(follower).or_default().insert(following);
        }
        Self {
            graph: RwLock::new(graph),
        }
    }
}

fn poisoned() -> FollowPersistenceError {
    FollowPersistenceError::query("follow graph lock poisoned")
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn insert(&self, edge: &FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut graph = self.graph.write().map_err(|_| poisoned())?;
        Ok(graph
            .entry(edge.follower().clone())
            .or_default()
            .insert(edge.following().clone()))
    }

    async fn remove(&self, edge: &FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut graph = self.graph.write().map_err(|_| poisoned())?;
        let Some(following) = graph.get_mut(edge.follower()) else {
            return Ok(false);
        };
        let removed = following.remove(edge.following());
        if following.is_empty() {
            graph.remove(edge.follower());
        }
        Ok(removed)
    }

    async fn following(&self, follower: &UserId) -> Result<Vec<UserId>, FollowPersistenceError> {
        let graph = self.graph.read().map_err(|_| poisoned())?;
        Ok(graph
            .get(follower)
            .map(|following| following.iter().cloned().collect())
            .unwrap_or_default())
    }
}
