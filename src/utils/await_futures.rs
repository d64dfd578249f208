use std::future::Future;
use std::pin::Pin;

use anyhow;
use tokio;

pub type PinFuture<T> = Pin<Box<dyn Future<Output = Result<T, anyhow::Error>> + Send + 'static>>;

/// Spawns every future and collects the results in spawn order. The first
/// failure wins; remaining tasks keep running to completion on the runtime.
pub async fn await_futures<T: Send + 'static>(
    futures: Vec<PinFuture<T>>,
) -> Result<Vec<T>, anyhow::Error> {
    let mut handles = vec![];

    for future in futures {
        handles.push(tokio::spawn(future));
    }

    let mut r: Vec<T> = vec![];

    for handle in handles {
        r.push(handle.await??);
    }

    Ok(r)
}
