use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use log::{debug, error};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};
use budgetbuddy_core::errors::{Error, Result};

// A write job runs against the writer's connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type AnyBox = Box<dyn Any + Send + 'static>;

enum Command {
    Run(Job<AnyBox>, oneshot::Sender<Result<AnyBox>>),
    Shutdown,
}

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Command>,
}

fn writer_stopped() -> Error {
    Error::DependencyUnavailable("database writer is not running".to_string())
}

impl WriteHandle {
    /// Runs `job` inside an immediate transaction on the writer's dedicated
    /// connection. Jobs are executed one at a time in submission order.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send(Command::Run(
                Box::new(move |c| job(c).map(|v| Box::new(v) as AnyBox)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_stopped())?;

        let boxed = ret_rx.await.map_err(|_| writer_stopped())??;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("writer returned a value of the wrong type".to_string()))
    }

    /// Asks the actor to stop once queued jobs are done. Later calls to
    /// [`exec`](Self::exec) fail with `DependencyUnavailable`.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(Command::Shutdown).await;
    }
}

/// Spawns a background task that is the only writer to the database.
///
/// The actor holds one pooled connection for its whole life and runs jobs
/// serially, each in its own immediate transaction.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Command>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer actor could not get a connection: {}", e);
                return;
            }
        };

        while let Some(command) = rx.recv().await {
            match command {
                Command::Run(job, reply_tx) => {
                    let result: Result<AnyBox> = conn
                        .immediate_transaction::<_, StorageError, _>(|c| {
                            job(c).map_err(StorageError::from)
                        })
                        .map_err(Error::from);

                    // The requester may have gone away (timeout, cancellation).
                    let _ = reply_tx.send(result);
                }
                Command::Shutdown => break,
            }
        }
        debug!("Writer actor stopped");
    });

    WriteHandle { tx }
}
