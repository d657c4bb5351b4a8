use std::sync::{mpsc, Arc};
use std::thread;

use triage_logging::{triage_debug, triage_warn};

use crate::processor::{ChannelStatusSink, Processor};
use crate::{Batch, EngineEvent};

enum EngineCommand {
    Process(Batch),
}

/// Runs batches on a background worker, one at a time, in submission order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(processor: Arc<dyn Processor>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                handle_command(processor.as_ref(), command, &event_tx);
            }
            triage_debug!("engine worker stopped");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, batch: Batch) {
        if self.cmd_tx.send(EngineCommand::Process(batch)).is_err() {
            triage_warn!("engine worker is gone; batch dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

fn handle_command(
    processor: &dyn Processor,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Process(batch) => {
            let sink = ChannelStatusSink::new(event_tx.clone());
            let result = processor.process(&batch, &sink);
            let _ = event_tx.send(EngineEvent::BatchCompleted {
                batch_id: batch.id,
                result,
            });
        }
    }
}
