use repowire::testing::{CountingHook, RecordingHook, StubHandler, call_log};
use repowire::{
    DynStageHandler, DynStageHook, HookTiming, PipelineAssembler, Stage, Traversal,
};
use std::sync::Arc;

mod common;
use common::{TestRequest, consuming_at, declining_assembler, log_entries};

#[tokio::test]
async fn declined_everywhere_falls_through() {
    let log = call_log();
    let pipeline = declining_assembler(&log).assemble().unwrap();

    let mut request = TestRequest::to("/nothing/claims/this");
    let outcome = pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(outcome, Traversal::FellThrough);
    assert_eq!(
        log_entries(&log),
        vec![
            "Cors",
            "Authentication",
            "MembershipExtension",
            "FilesBranch",
            "ODataBranch",
            "WopiBranch",
        ]
    );
}

#[tokio::test]
async fn consuming_branch_stops_the_traversal() {
    let log = call_log();
    let pipeline = consuming_at(&log, Stage::FilesBranch).assemble().unwrap();

    let mut request = TestRequest::to("/binaries/doc.pdf");
    let outcome = pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(outcome, Traversal::Consumed(Stage::FilesBranch));
    assert_eq!(
        log_entries(&log),
        vec!["Cors", "Authentication", "MembershipExtension", "FilesBranch"]
    );
}

#[tokio::test]
async fn hooks_run_around_their_stage_in_order() {
    let log = call_log();
    let pipeline = consuming_at(&log, Stage::FilesBranch)
        .with_hook(
            Stage::Authentication,
            HookTiming::Before,
            RecordingHook::new("before-auth", log.clone()),
        )
        .unwrap()
        .with_hook(
            Stage::Authentication,
            HookTiming::After,
            RecordingHook::new("after-auth", log.clone()),
        )
        .unwrap()
        .with_hook(
            Stage::FilesBranch,
            HookTiming::Before,
            RecordingHook::new("before-files", log.clone()),
        )
        .unwrap()
        .assemble()
        .unwrap();

    let mut request = TestRequest::to("/binaries/doc.pdf");
    pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(
        log_entries(&log),
        vec![
            "Cors",
            "before-auth",
            "Authentication",
            "after-auth",
            "MembershipExtension",
            "before-files",
            "FilesBranch",
        ]
    );
}

#[tokio::test]
async fn hook_past_a_terminating_stage_is_never_invoked() {
    let log = call_log();
    let odata_hook = CountingHook::new();
    let counter = odata_hook.clone();

    // ODataBranch consumes what FilesBranch declines, so the OData *handler*
    // runs; its registered before hook still must not.
    let pipeline = consuming_at(&log, Stage::ODataBranch)
        .with_hook(Stage::ODataBranch, HookTiming::Before, odata_hook)
        .unwrap()
        .assemble()
        .unwrap();

    let mut request = TestRequest::to("/odata.svc/content(42)");
    let outcome = pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(outcome, Traversal::Consumed(Stage::ODataBranch));
    assert_eq!(counter.count(), 0);

    // Same when an earlier branch consumes the request outright.
    let log = call_log();
    let odata_hook = CountingHook::new();
    let counter = odata_hook.clone();
    let pipeline = consuming_at(&log, Stage::FilesBranch)
        .with_hook(Stage::ODataBranch, HookTiming::Before, odata_hook)
        .unwrap()
        .assemble()
        .unwrap();

    let mut request = TestRequest::to("/binaries/doc.pdf");
    let outcome = pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(outcome, Traversal::Consumed(Stage::FilesBranch));
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn consuming_non_terminating_stage_skips_its_after_hook() {
    // A CORS preflight consumed at the first stage never reaches the
    // stage's after position or anything downstream.
    let log = call_log();
    let after_cors = CountingHook::new();
    let counter = after_cors.clone();

    let pipeline = consuming_at(&log, Stage::Cors)
        .with_hook(Stage::Cors, HookTiming::After, after_cors)
        .unwrap()
        .assemble()
        .unwrap();

    let mut request = TestRequest::to("/anything");
    let outcome = pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(outcome, Traversal::Consumed(Stage::Cors));
    assert_eq!(counter.count(), 0);
    assert_eq!(log_entries(&log), vec!["Cors"]);
}

#[tokio::test]
async fn dispatch_runs_boxed_step_objects_to_completion() {
    // Steps are stored as boxed trait objects; the passthrough impls also
    // let those boxes satisfy the static traits, so dispatch must invoke the
    // inner object rather than bouncing between the two impls on the box.
    let log = call_log();
    let mut assembler = PipelineAssembler::new();
    for stage in Stage::ALL {
        let handler: Box<dyn DynStageHandler<TestRequest>> =
            Box::new(StubHandler::declining(stage.as_str(), log.clone()));
        assembler = assembler.with_handler(stage, handler);
    }
    let hook: Box<dyn DynStageHook<TestRequest>> =
        Box::new(RecordingHook::new("before-cors", log.clone()));
    let pipeline = assembler
        .with_hook(Stage::Cors, HookTiming::Before, hook)
        .unwrap()
        .assemble()
        .unwrap();

    let mut request = TestRequest::to("/nothing/claims/this");
    let outcome = pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(outcome, Traversal::FellThrough);
    let entries = log_entries(&log);
    assert_eq!(entries.len(), 1 + Stage::ALL.len());
    assert_eq!(entries[0], "before-cors");
}

#[tokio::test]
async fn handler_errors_propagate_to_the_caller() {
    let log = call_log();
    let mut assembler = declining_assembler(&log);
    assembler = assembler.with_handler(
        Stage::Authentication,
        repowire::testing::FailingHandler::new("token service unreachable"),
    );
    let pipeline = assembler.assemble().unwrap();

    let mut request = TestRequest::to("/odata.svc/content");
    let err = pipeline.dispatch(&mut request).await.unwrap_err();

    assert!(err.to_string().contains("token service unreachable"));
    // Cors ran; nothing after the failing stage did.
    assert_eq!(log_entries(&log), vec!["Cors"]);
}

#[tokio::test]
async fn assembled_pipeline_is_shared_across_tasks() {
    let log = call_log();
    let pipeline = Arc::new(consuming_at(&log, Stage::ODataBranch).assemble().unwrap());

    let mut tasks = Vec::new();
    for i in 0..8 {
        let pipeline = pipeline.clone();
        tasks.push(tokio::spawn(async move {
            let mut request = TestRequest::to(&format!("/odata.svc/content({i})"));
            pipeline.dispatch(&mut request).await.unwrap()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), Traversal::Consumed(Stage::ODataBranch));
    }
}

#[tokio::test]
async fn handlers_see_per_request_mutations() {
    struct TaggingHandler;
    impl repowire::StageHandler<TestRequest> for TaggingHandler {
        async fn handle(
            &self,
            request: &mut TestRequest,
        ) -> Result<repowire::StageOutcome, repowire::BoxError> {
            request.notes.push(format!("authenticated {}", request.path));
            Ok(repowire::StageOutcome::Declined)
        }
    }

    let log = call_log();
    let mut assembler = declining_assembler(&log);
    assembler = assembler.with_handler(Stage::Authentication, TaggingHandler);
    let pipeline = assembler.assemble().unwrap();

    let mut request = TestRequest::to("/root/content");
    pipeline.dispatch(&mut request).await.unwrap();

    assert_eq!(request.notes, vec!["authenticated /root/content"]);
}
