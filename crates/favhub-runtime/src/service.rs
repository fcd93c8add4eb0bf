use tokio::sync::mpsc;

use favhub_engine::Command;

use crate::app::App;
use crate::events::AppEvent;
use crate::traits::{FavoriteStorage, UserFetcher};

const CHANNEL_CAPACITY: usize = 32;

/// Channel-driven wrapper around [`App`].
///
/// Commands are accepted asynchronously and processed strictly in arrival
/// order by a single task; events come back on the paired receiver. The
/// task ends when the command sender is dropped or the event receiver goes
/// away.
pub struct AppService;

impl AppService {
    pub fn spawn<F, S>(fetcher: F, store: S) -> (mpsc::Sender<Command>, mpsc::Receiver<AppEvent>)
    where
        F: UserFetcher + 'static,
        S: FavoriteStorage + 'static,
    {
        let (command_tx, mut command_rx) = mpsc::channel::<Command>(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel::<AppEvent>(CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let mut app = App::new(fetcher, store);

            while let Some(command) = command_rx.recv().await {
                for event in app.handle(command).await {
                    if event_tx.send(event).await.is_err() {
                        log::debug!("event receiver dropped, stopping app service");
                        return;
                    }
                }
            }
        });

        (command_tx, event_rx)
    }
}
