//! Lookup worker thread
//!
//! Runs lookups on a background thread so key handling never blocks on the
//! network. Every request becomes its own task on a single-threaded tokio
//! runtime, so exchanges overlap and complete in whatever order the server
//! answers. Nothing is cancelled: a later keystroke does not stop an earlier
//! request, and the last completion to arrive wins.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::LookupClient;
use super::lookup_types::{LookupRequest, LookupResponse};

thread_local! {
    static ON_WORKER_THREAD: Cell<bool> = const { Cell::new(false) };
}

static PANIC_HOOK: Once = Once::new();

/// Install the process-wide hook once; it is never taken back
///
/// Panics on lookup worker threads go to the log, every other panic goes to
/// the hook that was installed before.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if !on_worker_thread() {
                prev_hook(panic_info);
                return;
            }
            let panic_msg = panic_message(panic_info.payload());
            log::error!(
                "Lookup worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );
        }));
    });
}

fn on_worker_thread() -> bool {
    ON_WORKER_THREAD.with(Cell::get)
}

/// Spawn the lookup worker thread
///
/// The thread exits when every request sender has been dropped. Panics are
/// logged instead of printed so they cannot corrupt the terminal.
pub fn spawn_worker(
    client: LookupClient,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> JoinHandle<()> {
    install_panic_hook();

    std::thread::spawn(move || {
        ON_WORKER_THREAD.with(|flag| flag.set(true));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create lookup runtime: {}", e);
                    return;
                }
            };

            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        if let Err(e) = result {
            log::error!("Lookup worker thread panicked: {}", panic_message(&*e));
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic in lookup worker".to_string()
    }
}

/// Receive requests until the channel closes, one task per request
async fn worker_loop(
    client: LookupClient,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let client = client.clone();
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let response = client.execute(request).await;
            // UI gone means nobody is waiting for the answer
            let _ = response_tx.send(response);
        });
    }

    #[cfg(debug_assertions)]
    log::debug!("Lookup request channel closed, worker exiting");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
