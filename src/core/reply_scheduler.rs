//! Delayed delivery of simulated replies.
//!
//! Each scheduled reply runs as its own tokio task holding a child of the
//! scheduler's root [`CancellationToken`]. Shutting the scheduler down (or
//! dropping it) cancels every pending reply, so nothing reaches the store
//! after the chat view is gone.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::app::{AppAction, AppActionContext, AppActionDispatcher};
use crate::core::replies::{RandomReplies, ReplySource};

pub struct ReplyScheduler {
    delay: Duration,
    source: Arc<dyn ReplySource>,
    root: CancellationToken,
    pending: Arc<AtomicUsize>,
    next_id: AtomicU64,
}

impl ReplyScheduler {
    pub fn new(delay: Duration, source: Arc<dyn ReplySource>) -> Self {
        Self {
            delay,
            source,
            root: CancellationToken::new(),
            pending: Arc::new(AtomicUsize::new(0)),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn with_random_replies(delay: Duration) -> Self {
        Self::new(delay, Arc::new(RandomReplies))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replies scheduled but neither delivered nor cancelled yet.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Spawn a task that dispatches one [`AppAction::DeliverReply`] after the delay.
    ///
    /// After [`shutdown`](Self::shutdown) the returned task completes without
    /// dispatching anything.
    pub fn schedule(
        &self,
        dispatcher: AppActionDispatcher,
        ctx: AppActionContext,
    ) -> JoinHandle<()> {
        let reply_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let token = self.root.child_token();
        let delay = self.delay;
        let source = Arc::clone(&self.source);
        let guard = PendingGuard::new(Arc::clone(&self.pending));

        debug!(reply_id, delay_ms = delay.as_millis() as u64, "reply scheduled");

        tokio::spawn(async move {
            let _guard = guard;
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(reply_id, "scheduled reply cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    let text = source.pick();
                    debug!(reply_id, reply = %text, "delivering reply");
                    dispatcher.dispatch(AppAction::DeliverReply { text }, ctx);
                }
            }
        })
    }

    /// Cancel every pending reply. Later calls to [`schedule`](Self::schedule)
    /// produce tasks that exit immediately.
    pub fn shutdown(&self) {
        if !self.root.is_cancelled() {
            debug!(pending = self.pending(), "reply scheduler shutting down");
        }
        self.root.cancel();
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

struct PendingGuard {
    counter: Arc<AtomicUsize>,
}

impl PendingGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::AppActionEnvelope;
    use crate::core::replies::is_canned_reply;
    use tokio::sync::mpsc;

    struct FixedReply(&'static str);

    impl ReplySource for FixedReply {
        fn pick(&self) -> String {
            self.0.to_string()
        }
    }

    fn channel() -> (
        AppActionDispatcher,
        mpsc::UnboundedReceiver<AppActionEnvelope>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppActionDispatcher::new(tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>) -> Vec<String> {
        std::iter::from_fn(|| rx.try_recv().ok())
            .filter_map(|env| match env.action {
                AppAction::DeliverReply { text } => Some(text),
                _ => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn reply_is_dispatched_only_after_the_delay() {
        let (dispatcher, mut rx) = channel();
        let scheduler = ReplyScheduler::with_random_replies(Duration::from_millis(1000));

        let handle = scheduler.schedule(dispatcher, AppActionContext::default());
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(drain(&mut rx).is_empty());

        handle.await.expect("reply task");
        let replies = drain(&mut rx);
        assert_eq!(replies.len(), 1);
        assert!(is_canned_reply(&replies[0]));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn every_schedule_produces_its_own_reply() {
        let (dispatcher, mut rx) = channel();
        let scheduler =
            ReplyScheduler::new(Duration::from_millis(1000), Arc::new(FixedReply("ok")));

        let first = scheduler.schedule(dispatcher.clone(), AppActionContext::default());
        let second = scheduler.schedule(dispatcher, AppActionContext::default());
        assert_eq!(scheduler.pending(), 2);

        first.await.expect("first reply");
        second.await.expect("second reply");
        assert_eq!(drain(&mut rx), ["ok", "ok"]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_turns_pending_replies_into_no_ops() {
        let (dispatcher, mut rx) = channel();
        let scheduler = ReplyScheduler::with_random_replies(Duration::from_millis(1000));

        let handle = scheduler.schedule(dispatcher.clone(), AppActionContext::default());
        tokio::time::sleep(Duration::from_millis(500)).await;
        scheduler.shutdown();
        assert!(scheduler.is_shut_down());

        handle.await.expect("cancelled task");
        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(drain(&mut rx).is_empty());
        assert_eq!(scheduler.pending(), 0);

        let late = scheduler.schedule(dispatcher, AppActionContext::default());
        late.await.expect("late task");
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_scheduler_cancels_replies() {
        let (dispatcher, mut rx) = channel();
        let scheduler = ReplyScheduler::with_random_replies(Duration::from_millis(1000));
        let handle = scheduler.schedule(dispatcher, AppActionContext::default());
        drop(scheduler);

        handle.await.expect("cancelled task");
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn closed_channel_is_ignored() {
        let (dispatcher, rx) = channel();
        drop(rx);
        let scheduler = ReplyScheduler::with_random_replies(Duration::from_millis(10));
        scheduler
            .schedule(dispatcher, AppActionContext::default())
            .await
            .expect("reply task should not panic");
    }
}
