//! Narration pacing task
//!
//! Emits, for each line in order: `NarrationLineAppended`, a short pause,
//! `NarrationLineRevealed`. Successive lines are separated by the line delay
//! and a final `NarrationFinished` closes the playback.

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::message::Message;
use crate::narrator::{NarrationPlan, NarrationTiming};

use super::NarrationTaskMap;

/// Spawn the pacing task for `plan`, replacing any task for the same container
pub fn spawn_narration(
    plan: NarrationPlan,
    timing: NarrationTiming,
    msg_tx: mpsc::Sender<Message>,
    narration_tasks: NarrationTaskMap,
) {
    let container_id = plan.container_id.clone();
    let handle = tokio::spawn(async move {
        if run_narration(&plan, timing, &msg_tx).await.is_none() {
            debug!("Narration of {} stopped: channel closed", plan.container_id);
        }
    });

    match narration_tasks.lock() {
        Ok(mut guard) => {
            if let Some(previous) = guard.insert(container_id, handle) {
                previous.abort();
            }
        }
        Err(e) => warn!("Narration task map poisoned: {}", e),
    }
}

/// Returns `None` once the receiver is gone
async fn run_narration(
    plan: &NarrationPlan,
    timing: NarrationTiming,
    msg_tx: &mpsc::Sender<Message>,
) -> Option<()> {
    for index in 0..plan.line_count {
        if index > 0 {
            sleep(timing.line_delay).await;
        }

        msg_tx
            .send(Message::NarrationLineAppended {
                container_id: plan.container_id.clone(),
                generation: plan.generation,
                index,
            })
            .await
            .ok()?;

        sleep(timing.reveal_delay).await;

        msg_tx
            .send(Message::NarrationLineRevealed {
                container_id: plan.container_id.clone(),
                generation: plan.generation,
                index,
            })
            .await
            .ok()?;
    }

    msg_tx
        .send(Message::NarrationFinished {
            container_id: plan.container_id.clone(),
            generation: plan.generation,
        })
        .await
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::handle_action;
    use crate::UpdateAction;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    fn plan(lines: usize) -> NarrationPlan {
        NarrationPlan {
            container_id: "terminal-1".to_string(),
            generation: 1,
            line_count: lines,
        }
    }

    fn timing() -> NarrationTiming {
        NarrationTiming {
            line_delay: Duration::from_millis(600),
            reveal_delay: Duration::from_millis(40),
        }
    }

    fn tasks() -> NarrationTaskMap {
        Arc::new(std::sync::Mutex::new(HashMap::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_narration_emits_lines_in_order() {
        let (tx, mut rx) = mpsc::channel(64);
        spawn_narration(plan(3), timing(), tx, tasks());

        let mut received = Vec::new();
        while let Some(msg) = rx.recv().await {
            let done = matches!(msg, Message::NarrationFinished { .. });
            received.push(msg);
            if done {
                break;
            }
        }

        let appended: Vec<usize> = received
            .iter()
            .filter_map(|m| match m {
                Message::NarrationLineAppended { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(appended, vec![0, 1, 2]);
        assert_eq!(received.len(), 7);
        assert!(matches!(
            received[1],
            Message::NarrationLineRevealed { index: 0, .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_narration_respects_line_delay() {
        let (tx, mut rx) = mpsc::channel(64);
        let start = tokio::time::Instant::now();
        spawn_narration(plan(2), timing(), tx, tasks());

        // Line 0 appended immediately
        assert!(matches!(
            rx.recv().await,
            Some(Message::NarrationLineAppended { index: 0, .. })
        ));
        assert!(start.elapsed() < Duration::from_millis(40));

        // Revealed after the reveal delay
        assert!(matches!(
            rx.recv().await,
            Some(Message::NarrationLineRevealed { index: 0, .. })
        ));
        assert!(start.elapsed() >= Duration::from_millis(40));

        // Next line after the line delay
        assert!(matches!(
            rx.recv().await,
            Some(Message::NarrationLineAppended { index: 1, .. })
        ));
        assert!(start.elapsed() >= Duration::from_millis(640));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_narrations_aborts_task() {
        let (tx, mut rx) = mpsc::channel(64);
        let tasks = tasks();
        spawn_narration(plan(6), timing(), tx, tasks.clone());

        assert!(matches!(
            rx.recv().await,
            Some(Message::NarrationLineAppended { index: 0, .. })
        ));

        handle_action(UpdateAction::CancelNarrations, mpsc::channel(1).0, tasks.clone());
        assert!(tasks.lock().unwrap().is_empty());

        // The aborted task drops its sender, closing the channel
        let mut remaining = 0;
        while let Some(msg) = rx.recv().await {
            assert!(!matches!(msg, Message::NarrationFinished { .. }));
            remaining += 1;
        }
        assert!(remaining <= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_stops_task() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let tasks = tasks();
        spawn_narration(plan(6), timing(), tx, tasks.clone());

        tokio::time::sleep(Duration::from_secs(10)).await;
        let guard = tasks.lock().unwrap();
        assert!(guard.get("terminal-1").unwrap().is_finished());
    }
}
