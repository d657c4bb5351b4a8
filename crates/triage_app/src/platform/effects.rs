use std::sync::Arc;

use triage_core::{Effect, FileStatus, Msg, ProcessRequest, ProcessScope};
use triage_engine::{
    Batch, BatchFile, BatchId, EngineEvent, EngineHandle, FileStage, ProcessError, Processor,
};
use triage_logging::{triage_info, triage_warn};

/// Something the UI should react to after draining the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerEvent {
    Msg(Msg),
    Notice(String),
}

pub struct EffectRunner {
    engine: EngineHandle,
    next_batch_id: BatchId,
}

impl EffectRunner {
    pub fn new(processor: Arc<dyn Processor>) -> Self {
        Self {
            engine: EngineHandle::new(processor),
            next_batch_id: 1,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Process(request) => {
                    let batch = self.to_batch(request);
                    triage_info!(
                        "Process batch_id={} model={} files={}",
                        batch.id,
                        batch.model_id,
                        batch.files.len()
                    );
                    self.engine.submit(batch);
                }
            }
        }
    }

    /// Collects everything the engine reported since the last call.
    pub fn drain(&self) -> Vec<RunnerEvent> {
        let mut out = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::FileProgress {
                    relative_path,
                    stage,
                    ..
                } => out.push(RunnerEvent::Msg(Msg::FileStatusChanged {
                    path: relative_path,
                    status: map_stage(stage),
                })),
                EngineEvent::BatchCompleted { batch_id, result } => {
                    out.push(RunnerEvent::Notice(completion_notice(batch_id, &result)));
                }
            }
        }
        out
    }

    fn to_batch(&mut self, request: ProcessRequest) -> Batch {
        let id = self.next_batch_id;
        self.next_batch_id += 1;
        if request.scope == ProcessScope::Selected {
            triage_info!("batch {} covers the current selection", id);
        }
        Batch {
            id,
            model_id: request.model.id().to_string(),
            files: request
                .files
                .into_iter()
                .map(|file| BatchFile {
                    name: file.name,
                    relative_path: file.path,
                    size: file.size,
                    mime_type: file.mime_type,
                })
                .collect(),
        }
    }
}

fn completion_notice(batch_id: BatchId, result: &Result<(), ProcessError>) -> String {
    match result {
        Ok(()) => format!("Batch {batch_id} finished"),
        Err(err @ ProcessError::Unbound { .. }) => {
            triage_info!("Batch {} not processed: {}", batch_id, err);
            format!("Batch {batch_id}: {err}")
        }
        Err(err) => {
            triage_warn!("Batch {} failed: {}", batch_id, err);
            format!("Batch {batch_id} failed: {err}")
        }
    }
}

fn map_stage(stage: FileStage) -> FileStatus {
    match stage {
        FileStage::Running => FileStatus::Processing,
        FileStage::Done => FileStatus::Completed,
        FileStage::Failed => FileStatus::Error,
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use triage_core::{FileDescriptor, ModelChoice};
    use triage_engine::{StatusSink, UnboundProcessor};

    use super::*;

    struct FailSecondFile;

    impl Processor for FailSecondFile {
        fn process(&self, batch: &Batch, sink: &dyn StatusSink) -> Result<(), ProcessError> {
            for (idx, file) in batch.files.iter().enumerate() {
                let stage = if idx == 1 {
                    FileStage::Failed
                } else {
                    FileStage::Done
                };
                sink.emit(EngineEvent::FileProgress {
                    batch_id: batch.id,
                    relative_path: file.relative_path.clone(),
                    stage,
                });
            }
            Err(ProcessError::Failed("second file rejected".into()))
        }
    }

    fn request(paths: &[&str]) -> ProcessRequest {
        ProcessRequest {
            scope: ProcessScope::All,
            model: ModelChoice::Claude3Opus,
            files: paths
                .iter()
                .map(|p| FileDescriptor {
                    name: p.rsplit('/').next().unwrap().to_string(),
                    path: p.to_string(),
                    size: 3,
                    mime_type: String::new(),
                    status: FileStatus::Pending,
                })
                .collect(),
        }
    }

    fn drain_until_notice(runner: &EffectRunner) -> Vec<RunnerEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut events = Vec::new();
        loop {
            assert!(Instant::now() < deadline, "no completion notice");
            events.extend(runner.drain());
            if events.iter().any(|e| matches!(e, RunnerEvent::Notice(_))) {
                return events;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn unbound_processor_only_yields_a_notice() {
        let mut runner = EffectRunner::new(Arc::new(UnboundProcessor));
        runner.enqueue(vec![Effect::Process(request(&["f/a.txt"]))]);

        let events = drain_until_notice(&runner);
        assert_eq!(events.len(), 1);
        let RunnerEvent::Notice(text) = &events[0] else {
            panic!("expected notice, got {:?}", events[0]);
        };
        assert!(text.contains("no processor is bound"));
    }

    #[test]
    fn progress_maps_to_status_messages() {
        let mut runner = EffectRunner::new(Arc::new(FailSecondFile));
        runner.enqueue(vec![Effect::Process(request(&["f/a.txt", "f/b.txt"]))]);

        let events = drain_until_notice(&runner);
        assert_eq!(
            events,
            vec![
                RunnerEvent::Msg(Msg::FileStatusChanged {
                    path: "f/a.txt".into(),
                    status: FileStatus::Completed,
                }),
                RunnerEvent::Msg(Msg::FileStatusChanged {
                    path: "f/b.txt".into(),
                    status: FileStatus::Error,
                }),
                RunnerEvent::Notice(
                    "Batch 1 failed: processing failed: second file rejected".into()
                ),
            ]
        );
    }
}
