//! Chat Session - View Model

use super::model::{clear_conversation, open_chat_stream};
use super::transcript::{PendingExchange, Transcript};
use crate::domain::a001_chat_session::ChatContext;
use contracts::domain::a001_chat_session::StreamEvent;
use contracts::shared::ActionOutcome;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub transcript: RwSignal<Transcript>,
    pub draft: RwSignal<String>,
    /// One answer at a time per session; submit is ignored while set.
    pub is_streaming: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            transcript: RwSignal::new(Transcript::new()),
            draft: RwSignal::new(String::new()),
            is_streaming: RwSignal::new(false),
        }
    }

    /// Sends the current draft and streams the answer into the transcript.
    pub fn submit(&self, ctx: &ChatContext) {
        if self.is_streaming.get_untracked() {
            return;
        }
        let question = self.draft.get_untracked().trim().to_string();
        if question.is_empty() {
            return;
        }
        self.draft.set(String::new());

        let Some(exchange) = self.transcript.try_update(|t| t.begin_exchange(&question)) else {
            return;
        };
        self.is_streaming.set(true);

        let vm = *self;
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            vm.run_exchange(&ctx, &question, exchange).await;
            vm.is_streaming.set(false);
        });
    }

    async fn run_exchange(&self, ctx: &ChatContext, question: &str, exchange: PendingExchange) {
        let mut stream = match open_chat_stream(ctx, question).await {
            Ok(stream) => stream,
            Err(e) => {
                log::error!("chat request failed: {}", e);
                self.transcript.update(|t| t.fail_exchange(&exchange));
                return;
            }
        };
        self.transcript.update(|t| t.open_response(&exchange));

        loop {
            match stream.next_event().await {
                Ok(Some(StreamEvent::Done)) | Ok(None) => break,
                Ok(Some(event)) => {
                    self.transcript.update(|t| {
                        t.apply_stream_event(exchange.response_id(), &event);
                    });
                }
                Err(e) => {
                    log::error!("chat stream interrupted: {}", e);
                    self.transcript.update(|t| t.fail_exchange(&exchange));
                    break;
                }
            }
        }
        log::debug!("chat stream closed for {}", ctx.session_id);
    }

    /// Drops the server-side history; the transcript is only touched on success.
    pub fn reset_conversation(&self, ctx: &ChatContext) {
        let vm = *self;
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            match clear_conversation(&ctx).await {
                Ok(outcome) => {
                    vm.transcript.maybe_update(|t| t.apply_clear_outcome(&outcome));
                    match outcome {
                        ActionOutcome::Succeeded(_) => {}
                        ActionOutcome::Failed(e) => log::error!("Error clearing conversation: {}", e),
                        ActionOutcome::Unrecognized => {
                            log::warn!("clear_conversation returned neither success nor error")
                        }
                    }
                }
                Err(e) => log::error!("Error clearing conversation: {}", e),
            }
        });
    }
}
