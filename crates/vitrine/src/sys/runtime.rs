use crate::events::{AppEvent, CarouselId};
use async_channel::Sender;
use folio::schedule::{self, CancellationToken};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::{Builder, Handle, Runtime};

/// Starts the runtime that hosts timers and the config watcher. The caller keeps the
/// returned runtime alive for as long as the GUI runs.
pub fn start_background_services(
    tx: Sender<AppEvent>,
    config_path: PathBuf,
) -> std::io::Result<Runtime> {
    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("vitrine-bg")
        .enable_all()
        .build()?;

    runtime.spawn(async move {
        crate::config::run_async_watcher(tx, config_path).await;
    });

    Ok(runtime)
}

/// Posts `AppEvent::Tick(target)` every `period` until `token` is cancelled or the GUI
/// stops listening.
pub fn spawn_ticker(
    handle: &Handle,
    target: CarouselId,
    period: Duration,
    tx: Sender<AppEvent>,
    token: CancellationToken,
) {
    log::debug!("starting {} ticker every {:?}", target, period);
    handle.spawn(async move {
        schedule::run_interval(period, token, || {
            let tx = tx.clone();
            async move { tx.send(AppEvent::Tick(target)).await.is_ok() }
        })
        .await;
        log::debug!("{} ticker stopped", target);
    });
}
