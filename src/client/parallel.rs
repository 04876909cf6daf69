//! Concurrent detail fetching.
//!
//! Resolves a list of references into records with a bounded number of
//! requests in flight, returning results in input order.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use super::PokeApi;
use super::models::{Pokemon, Reference};
use crate::error::Result;

/// Boxed detail request tagged with its input position
type DetailFuture<'a> = Pin<Box<dyn Future<Output = (usize, Result<Pokemon>)> + Send + 'a>>;

fn detail_future<'a, C>(client: &'a C, index: usize, reference: &'a Reference) -> DetailFuture<'a>
where
    C: PokeApi + ?Sized,
{
    Box::pin(async move { (index, client.fetch_detail(reference).await) })
}

/// Fetch details for every reference, at most `max_concurrent` at a time.
///
/// The returned records line up with `references`. The first failure aborts
/// the batch and no partial results are returned.
///
/// # Example
///
/// ```ignore
/// let page = client.fetch_list(&PageRequest::new(20)).await?;
/// let refs: Vec<Reference> = page.items.iter().map(|r| r.reference()).collect();
/// let records = fetch_details_batch(&client, &refs, 20).await?;
/// ```
pub async fn fetch_details_batch<C>(
    client: &C,
    references: &[Reference],
    max_concurrent: usize,
) -> Result<Vec<Pokemon>>
where
    C: PokeApi + ?Sized,
{
    if references.is_empty() {
        return Ok(Vec::new());
    }

    let max_concurrent = max_concurrent.max(1);
    debug!(
        "Fetching {} details with max {} concurrent",
        references.len(),
        max_concurrent
    );

    let mut slots: Vec<Option<Pokemon>> = vec![None; references.len()];
    let mut futures: FuturesUnordered<DetailFuture<'_>> = FuturesUnordered::new();
    let mut pending = references.iter().enumerate();

    for (index, reference) in pending.by_ref().take(max_concurrent) {
        futures.push(detail_future(client, index, reference));
    }

    while let Some((index, result)) = futures.next().await {
        let pokemon = result?;
        debug!("Detail {} resolved to #{}", index, pokemon.id);
        slots[index] = Some(pokemon);

        if let Some((next_index, next_ref)) = pending.next() {
            futures.push(detail_future(client, next_index, next_ref));
        }
    }

    let records: Vec<Pokemon> = slots.into_iter().flatten().collect();
    debug!("Fetched {} details", records.len());
    Ok(records)
}
