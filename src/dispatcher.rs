//! Диспетчер обновлений: одно событие -> одно действие.
//!
//! [`UpdateDispatcher`] не хранит изменяемого состояния, поэтому teloxide может
//! вызывать его параллельно для разных обновлений.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use teloxide::error_handlers::ErrorHandler;
use teloxide::RequestError;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::client::BotClient;
use crate::errors::{DispatchError, ErrorClass};
use crate::events::InboundEvent;
use crate::handlers;

/// Пауза перед повтором после сбоя уровня запросов
pub const ERROR_BACKOFF: Duration = Duration::from_secs(2);

pub struct UpdateDispatcher {
    client: Arc<dyn BotClient>,
    assets_dir: PathBuf,
    shutdown: CancellationToken,
}

impl UpdateDispatcher {
    pub fn new(
        client: Arc<dyn BotClient>,
        assets_dir: PathBuf,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            client,
            assets_dir,
            shutdown,
        }
    }

    /// Токен остановки, от которого порождаются токены отдельных обновлений
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    pub async fn dispatch(
        &self,
        event: InboundEvent,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        let client = self.client.as_ref();
        match event {
            InboundEvent::Message(msg) => {
                cancellable(cancel, handlers::handle_message(client, &msg)).await
            }
            InboundEvent::CallbackQuery(q) => {
                cancellable(
                    cancel,
                    handlers::handle_callback_query(client, &self.assets_dir, &q),
                )
                .await
            }
            InboundEvent::Other { kind } => {
                handlers::handle_unknown(kind);
                Ok(())
            }
        }
    }

    /// Логирует ошибку; при сбое уровня запросов ждет [`ERROR_BACKOFF`]
    pub async fn handle_transport_error(&self, error: &ErrorClass, cancel: &CancellationToken) {
        info!("HandleError: {}", error);

        if error.needs_backoff() {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(ERROR_BACKOFF) => {}
            }
        }
    }
}

async fn cancellable<F>(cancel: &CancellationToken, work: F) -> Result<(), DispatchError>
where
    F: Future<Output = Result<(), DispatchError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            warn!("Update handling cancelled");
            Err(DispatchError::Cancelled)
        }
        result = work => result,
    }
}

/// Ошибки цикла опроса
impl ErrorHandler<RequestError> for UpdateDispatcher {
    fn handle_error(self: Arc<Self>, error: RequestError) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let class = ErrorClass::from(&error);
            let token = self.shutdown.clone();
            self.handle_transport_error(&class, &token).await;
        })
    }
}

/// Ошибки обработчиков обновлений
impl ErrorHandler<DispatchError> for UpdateDispatcher {
    fn handle_error(self: Arc<Self>, error: DispatchError) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let class = ErrorClass::from(&error);
            let token = self.shutdown.clone();
            self.handle_transport_error(&class, &token).await;
        })
    }
}
