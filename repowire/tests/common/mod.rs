#![allow(dead_code)]

use repowire::testing::{CallLog, StubHandler};
use repowire::{PipelineAssembler, Request, Stage};

// ============================================================================
// Test Request Type
// ============================================================================

#[derive(Debug, Default)]
pub struct TestRequest {
    pub path: String,
    pub notes: Vec<String>,
}

impl Request for TestRequest {}

impl TestRequest {
    pub fn to(path: &str) -> Self {
        Self {
            path: path.to_string(),
            notes: Vec::new(),
        }
    }
}

// ============================================================================
// Assembler helpers
// ============================================================================

/// An assembler with a declining, log-recording handler on every stage.
/// Handler labels are the stage names.
pub fn declining_assembler(log: &CallLog) -> PipelineAssembler<TestRequest> {
    let mut assembler = PipelineAssembler::new();
    for stage in Stage::ALL {
        assembler = assembler.with_handler(stage, StubHandler::declining(stage.as_str(), log.clone()));
    }
    assembler
}

/// Like [`declining_assembler`], but `consuming` consumes every request.
pub fn consuming_at(log: &CallLog, consuming: Stage) -> PipelineAssembler<TestRequest> {
    let mut assembler = PipelineAssembler::new();
    for stage in Stage::ALL {
        let handler = if stage == consuming {
            StubHandler::consuming(stage.as_str(), log.clone())
        } else {
            StubHandler::declining(stage.as_str(), log.clone())
        };
        assembler = assembler.with_handler(stage, handler);
    }
    assembler
}

pub fn log_entries(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
