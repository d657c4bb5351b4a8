use std::sync::Arc;
use std::time::{Duration, Instant};

use triage_engine::{
    Batch, BatchFile, EngineEvent, EngineHandle, FileStage, ProcessError, Processor, StatusSink,
    UnboundProcessor,
};

struct MarkEveryFileDone;

impl Processor for MarkEveryFileDone {
    fn process(&self, batch: &Batch, sink: &dyn StatusSink) -> Result<(), ProcessError> {
        for file in &batch.files {
            sink.emit(EngineEvent::FileProgress {
                batch_id: batch.id,
                relative_path: file.relative_path.clone(),
                stage: FileStage::Done,
            });
        }
        Ok(())
    }
}

fn batch(id: u64, paths: &[&str]) -> Batch {
    Batch {
        id,
        model_id: "claude-3-sonnet".to_string(),
        files: paths
            .iter()
            .map(|p| BatchFile {
                name: p.rsplit('/').next().unwrap().to_string(),
                relative_path: p.to_string(),
                size: 1,
                mime_type: String::new(),
            })
            .collect(),
    }
}

fn collect_until_completed(engine: &EngineHandle, completions: usize) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    let mut seen = 0;
    while seen < completions {
        assert!(Instant::now() < deadline, "engine did not finish in time");
        match engine.try_recv() {
            Some(event) => {
                if matches!(event, EngineEvent::BatchCompleted { .. }) {
                    seen += 1;
                }
                events.push(event);
            }
            None => std::thread::sleep(Duration::from_millis(5)),
        }
    }
    events
}

#[test]
fn unbound_processor_drops_batch_without_progress() {
    let engine = EngineHandle::new(Arc::new(UnboundProcessor));
    engine.submit(batch(1, &["f/a.txt", "f/b.txt"]));

    let events = collect_until_completed(&engine, 1);
    assert_eq!(
        events,
        vec![EngineEvent::BatchCompleted {
            batch_id: 1,
            result: Err(ProcessError::Unbound { file_count: 2 }),
        }]
    );
}

#[test]
fn bound_processor_reports_progress_before_completion() {
    let engine = EngineHandle::new(Arc::new(MarkEveryFileDone));
    engine.submit(batch(7, &["f/a.txt"]));
    engine.submit(batch(8, &["f/b.txt"]));

    let events = collect_until_completed(&engine, 2);
    assert_eq!(
        events,
        vec![
            EngineEvent::FileProgress {
                batch_id: 7,
                relative_path: "f/a.txt".to_string(),
                stage: FileStage::Done,
            },
            EngineEvent::BatchCompleted {
                batch_id: 7,
                result: Ok(()),
            },
            EngineEvent::FileProgress {
                batch_id: 8,
                relative_path: "f/b.txt".to_string(),
                stage: FileStage::Done,
            },
            EngineEvent::BatchCompleted {
                batch_id: 8,
                result: Ok(()),
            },
        ]
    );
}
