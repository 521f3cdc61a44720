use futures::future::{join_all, try_join_all};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::types::{RunId, distinct_pairs};
use crate::error::{GraphError, Result};
use crate::graph::{AdjacencySet, NodeId};
use crate::requester::Requester;

/// Number of hops `distance4` expands.
pub const DISTANCE4_HOPS: usize = 4;

/// Neighbor sets already fetched during one run. Never re-fetched once known.
type DegreeMemo = HashMap<NodeId, AdjacencySet>;

pub struct GraphManager<R: Requester + ?Sized> {
    requester: Arc<R>,
}

impl<R: Requester + ?Sized> Clone for GraphManager<R> {
    fn clone(&self) -> Self {
        Self {
            requester: self.requester.clone(),
        }
    }
}

impl<R: Requester + ?Sized> GraphManager<R> {
    pub fn new(requester: Arc<R>) -> Self {
        Self { requester }
    }

    /// Connects every distinct pair of `start`'s neighbors in both directions.
    ///
    /// All pairs are attempted concurrently and every pair is attempted even if some
    /// fail. Returns the first failure once the whole batch has finished; inserts that
    /// succeeded are not undone. Never pairs a node with itself.
    pub async fn complete_neighbourhood(&self, start: NodeId) -> Result<()> {
        let run = RunId::new();
        let neighbors = self.requester.get_connections_from(start).await?;
        let pairs = distinct_pairs(&neighbors);

        tracing::info!(
            "[{}] Completing neighbourhood of {}: {} neighbors, {} pairs",
            run,
            start,
            neighbors.len(),
            pairs.len()
        );

        let results = join_all(
            pairs
                .iter()
                .map(|&(x, y)| self.requester.add_connection_bidi(x, y)),
        )
        .await;

        let mut first_error = None;
        let mut failed = 0usize;
        for ((x, y), result) in pairs.iter().zip(results) {
            if let Err(e) = result {
                tracing::warn!("[{}] Pair {} <-> {} failed: {}", run, x, y, e);
                failed += 1;
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => {
                tracing::error!(
                    "[{}] Neighbourhood of {} left incomplete: {}/{} pairs failed",
                    run,
                    start,
                    failed,
                    pairs.len()
                );
                Err(e)
            }
            None => {
                tracing::info!("[{}] Neighbourhood of {} is now a clique", run, start);
                Ok(())
            }
        }
    }

    /// Walks from `start` towards higher degree until the current node beats all of
    /// its neighbors. Ties go to the smallest id.
    ///
    /// Each step picks the maximum of (degree, reversed id) over a candidate set that
    /// includes the current node, so the key never decreases. Termination rests on that
    /// together with degrees being frozen in the run's memo; nothing else enforces it.
    pub async fn climb_degree(&self, start: NodeId) -> Result<NodeId> {
        let run = RunId::new();
        let mut memo = DegreeMemo::new();
        let mut current = start;
        let mut steps = 0usize;

        loop {
            self.memoize(&mut memo, [current]).await?;
            let neighbors = memo.get(&current).cloned().unwrap_or_default();
            self.memoize(&mut memo, neighbors.iter().copied()).await?;

            let best = std::iter::once(current)
                .chain(neighbors.iter().copied())
                .max_by(|a, b| {
                    degree(&memo, *a)
                        .cmp(&degree(&memo, *b))
                        .then_with(|| b.cmp(a))
                })
                .unwrap_or(current);

            if best == current {
                tracing::info!(
                    "[{}] Climb from {} stopped at {} (degree {}) after {} steps",
                    run,
                    start,
                    current,
                    degree(&memo, current),
                    steps
                );
                return Ok(current);
            }

            tracing::debug!(
                "[{}] Climbing {} (degree {}) -> {} (degree {})",
                run,
                current,
                degree(&memo, current),
                best,
                degree(&memo, best)
            );
            current = best;
            steps += 1;
        }
    }

    /// Nodes at exactly graph distance 4 from `start`.
    pub async fn distance4(&self, start: NodeId) -> Result<AdjacencySet> {
        self.distance(start, DISTANCE4_HOPS).await
    }

    /// Nodes at exactly `hops` edges from `start`, following edge direction.
    ///
    /// Expands one frontier per hop. Anything already visited or in the current
    /// frontier is dropped, so cycles cannot bring a node back. The result is empty
    /// when the graph runs out before `hops`.
    pub async fn distance(&self, start: NodeId, hops: usize) -> Result<AdjacencySet> {
        let run = RunId::new();
        let mut visited = AdjacencySet::new();
        let mut frontier = AdjacencySet::from([start]);

        for hop in 1..=hops {
            let fetched = try_join_all(
                frontier
                    .iter()
                    .map(|&node| self.requester.get_connections_from(node)),
            )
            .await?;

            let next: AdjacencySet = fetched
                .into_iter()
                .flatten()
                .filter(|node| !visited.contains(node) && !frontier.contains(node))
                .collect();

            visited.append(&mut frontier);
            frontier = next;

            tracing::debug!(
                "[{}] Hop {} from {}: frontier {} nodes, visited {}",
                run,
                hop,
                start,
                frontier.len(),
                visited.len()
            );

            if frontier.is_empty() {
                tracing::debug!("[{}] Graph exhausted at hop {}", run, hop);
                break;
            }
        }

        tracing::info!(
            "[{}] {} nodes at distance {} from {}",
            run,
            frontier.len(),
            hops,
            start
        );
        Ok(frontier)
    }

    /// Fetches, in one concurrent batch, the neighbor sets of those `nodes` not yet in
    /// the memo.
    async fn memoize(
        &self,
        memo: &mut DegreeMemo,
        nodes: impl IntoIterator<Item = NodeId>,
    ) -> Result<()> {
        let missing: AdjacencySet = nodes
            .into_iter()
            .filter(|node| !memo.contains_key(node))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        let fetched = try_join_all(missing.iter().map(|&node| async move {
            let neighbors = self.requester.get_connections_from(node).await?;
            Ok::<_, GraphError>((node, neighbors))
        }))
        .await?;

        memo.extend(fetched);
        Ok(())
    }
}

fn degree(memo: &DegreeMemo, node: NodeId) -> usize {
    memo.get(&node).map_or(0, AdjacencySet::len)
}

/// Bounds `operation` by a wall-clock `limit`.
///
/// On expiry the operation's future is dropped: remote calls still in flight are
/// abandoned and whatever they already changed stays changed.
pub async fn with_timeout<T, F>(limit: Duration, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("Operation abandoned after {:?}", limit);
            Err(GraphError::Timeout(limit))
        }
    }
}
