// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Loopback servers for protocol tests.
//!
//! Each server runs on its own thread with its own tokio runtime so the
//! blocking client can be driven from the test thread.

#![allow(dead_code)]

use ghost::{Monitor, MonitorFuncs, Registry};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const PATH: &str = "/monitors";

pub struct TestServer {
    pub addr: SocketAddr,
    pub url: String,
    stop: Option<oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Run `serve` on a fresh `127.0.0.1:0` listener until the server is dropped.
pub fn spawn<F, Fut>(path: &str, serve: F) -> TestServer
where
    F: FnOnce(TcpListener, oneshot::Receiver<()>) -> Fut + Send + 'static,
    Fut: Future<Output = io::Result<()>>,
{
    let (addr_tx, addr_rx) = mpsc::channel();
    let (stop_tx, stop_rx) = oneshot::channel();

    let thread = thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("test runtime should build");

        runtime.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("loopback bind should succeed");
            addr_tx
                .send(listener.local_addr().expect("listener has an address"))
                .expect("test thread is waiting for the address");
            serve(listener, stop_rx).await.expect("server should run");
        });
    });

    let addr = addr_rx.recv().expect("server should report its address");
    TestServer {
        addr,
        url: format!("http://{}{}", addr, path),
        stop: Some(stop_tx),
        thread: Some(thread),
    }
}

/// Serve `registry` at [`PATH`] through the crate's own server helper.
pub fn spawn_registry(registry: Arc<Registry>) -> TestServer {
    spawn(PATH, move |listener, stop| {
        ghost::serve_with_shutdown(listener, PATH, registry, async move {
            let _ = stop.await;
        })
    })
}

/// Serve an arbitrary router; `path` is only used to build the URL.
pub fn spawn_router(path: &str, app: axum::Router) -> TestServer {
    spawn(path, move |listener, stop| async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop.await;
            })
            .await
    })
}

/// Monitor backed by an `AtomicBool`; the flag is returned for inspection.
pub fn flag_monitor(name: &str, initial: bool) -> (Arc<dyn Monitor>, Arc<AtomicBool>) {
    let flag = Arc::new(AtomicBool::new(initial));
    let (on, off, state) = (flag.clone(), flag.clone(), flag.clone());
    let monitor = MonitorFuncs::new(
        name,
        move || on.store(true, Ordering::SeqCst),
        move || off.store(false, Ordering::SeqCst),
        move || state.load(Ordering::SeqCst),
    );
    (Arc::new(monitor), flag)
}
