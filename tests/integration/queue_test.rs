//! End-to-end resolve flows against a scripted backend: fetch a page,
//! work each decision type through its form, and watch the queue drain.

use serde_json::json;
use std::cell::RefCell;
use std::collections::BTreeMap;
use triage_core::{
    ApprovalForm, CategorizeForm, ConflictChoice, ConflictForm, Decision, FormState, Resolution,
};
use triage_queue::{
    BackendError, DecisionBackend, DecisionPage, DecisionQueue, DecisionStatus, DecisionUpdate,
    PageRequest, QueueError,
};

struct ScriptedBackend {
    decisions: Vec<Decision>,
    reject_ids: Vec<String>,
    submissions: RefCell<Vec<(String, serde_json::Value)>>,
}

impl ScriptedBackend {
    fn new(decisions: Vec<Decision>) -> Self {
        Self {
            decisions,
            reject_ids: vec![],
            submissions: RefCell::new(vec![]),
        }
    }

    fn rejecting(mut self, id: &str) -> Self {
        self.reject_ids.push(id.to_string());
        self
    }
}

impl DecisionBackend for ScriptedBackend {
    fn fetch_decisions(&self, page: PageRequest) -> Result<DecisionPage, BackendError> {
        let decisions: Vec<Decision> = self
            .decisions
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect();
        Ok(DecisionPage {
            decisions,
            total: self.decisions.len(),
        })
    }

    fn submit_resolution(&self, id: &str, resolution: &Resolution) -> Result<(), BackendError> {
        self.submissions
            .borrow_mut()
            .push((id.to_string(), serde_json::to_value(resolution).unwrap()));
        if self.reject_ids.iter().any(|r| r == id) {
            return Err(BackendError::new("stale_decision", "already resolved"));
        }
        Ok(())
    }
}

fn decision(value: serde_json::Value) -> Decision {
    serde_json::from_value(value).unwrap()
}

fn sample_decisions() -> Vec<Decision> {
    vec![
        decision(json!({
            "id": "d1",
            "decisionType": "approval",
            "data": {"action": "Deploy v2", "context": "tests passed"},
        })),
        decision(json!({
            "id": "d2",
            "decisionType": "checkpoint",
            "data": {
                "taskContext": "Refactoring importer",
                "agentName": "builder-1",
                "expiresAt": "2026-09-01T12:00:00Z",
            },
            "clarificationQuestions": [
                {"id": "q1", "kind": "choice", "prompt": "Which strategy?",
                 "choices": ["rewrite", "patch"]},
                {"id": "q2", "kind": "text", "prompt": "Proceed?"},
            ],
        })),
        decision(json!({
            "id": "d3",
            "decisionType": "conflict",
            "data": {
                "filePath": "notes/plan.md",
                "conflictType": "concurrent",
                "myVersion": {
                    "seq": 5, "timestamp": "2026-08-20T10:00:00Z",
                    "actor": "me", "changes": ["local edit"],
                },
                "incomingVersion": {
                    "seq": 5, "modified": "2026-08-20T10:02:00Z",
                    "by": "agent-2", "changes": ["remote edit"],
                },
            },
        })),
        decision(json!({
            "id": "d4",
            "decisionType": "categorize",
            "data": {
                "preview": "Standup notes",
                "categories": ["Task Source", "Reference"],
                "projects": ["Inbox", "Research"],
                "additionalFields": [{"name": "title", "editable": true}],
            },
        })),
    ]
}

fn load_queue(backend: &ScriptedBackend) -> DecisionQueue {
    let mut queue = DecisionQueue::new();
    let page = backend.fetch_decisions(PageRequest::default()).unwrap();
    assert_eq!(page.total, page.decisions.len());
    queue.ingest_page(page);
    queue
}

#[test]
fn paginated_fetch_fills_the_queue() {
    let backend = ScriptedBackend::new(sample_decisions());
    let mut queue = DecisionQueue::new();

    // Fetch in windows of two, like the dashboard would.
    for offset in [0, 2] {
        let page = backend
            .fetch_decisions(PageRequest { limit: 2, offset })
            .unwrap();
        assert_eq!(page.total, 4);
        queue.ingest_page(page);
    }
    assert_eq!(queue.pending().len(), 4);
}

#[test]
fn approval_resolve_removes_from_pending() {
    let backend = ScriptedBackend::new(sample_decisions());
    let mut queue = load_queue(&backend);

    queue
        .submit(
            "d1",
            FormState::Approval(ApprovalForm {
                approved: Some(true),
                feedback: Some(String::new()),
            }),
            &backend,
        )
        .unwrap();

    assert!(queue.pending().iter().all(|d| d.id != "d1"));
    let submissions = backend.submissions.borrow();
    assert_eq!(submissions[0].0, "d1");
    assert_eq!(
        submissions[0].1,
        json!({
            "decisionType": "approval",
            "payload": {"approved": true, "feedback": ""},
        })
    );
}

#[test]
fn checkpoint_requires_every_answer() {
    let backend = ScriptedBackend::new(sample_decisions());
    let mut queue = load_queue(&backend);

    let mut answers = BTreeMap::new();
    answers.insert("q1".to_string(), "rewrite".into());

    // q2 unanswered: blocked client-side, nothing reaches the backend.
    let err = queue
        .submit("d2", FormState::Checkpoint { answers: answers.clone() }, &backend)
        .unwrap_err();
    assert!(matches!(err, QueueError::Decision(_)));
    assert!(backend.submissions.borrow().is_empty());

    answers.insert("q2".to_string(), "yes".into());
    queue
        .submit("d2", FormState::Checkpoint { answers }, &backend)
        .unwrap();
    assert_eq!(
        backend.submissions.borrow()[0].1["payload"],
        json!({"answers": {"q1": "rewrite", "q2": "yes"}})
    );
}

#[test]
fn conflict_merge_flow() {
    let backend = ScriptedBackend::new(sample_decisions());
    let mut queue = load_queue(&backend);

    queue
        .submit(
            "d3",
            FormState::Conflict(ConflictForm {
                choice: ConflictChoice::Merge,
                merge_content: Some("reconciled plan".into()),
            }),
            &backend,
        )
        .unwrap();

    let payload = &backend.submissions.borrow()[0].1["payload"];
    assert_eq!(payload["choice"], "merge");
    assert_eq!(payload["mergeContent"], "reconciled plan");
}

#[test]
fn categorize_flow_with_project() {
    let backend = ScriptedBackend::new(sample_decisions());
    let mut queue = load_queue(&backend);

    let mut field_updates = BTreeMap::new();
    field_updates.insert("title".to_string(), "Standup 08-20".to_string());

    queue
        .submit(
            "d4",
            FormState::Categorize(CategorizeForm {
                category: Some("Reference".into()),
                project: Some("Research".into()),
                field_updates,
            }),
            &backend,
        )
        .unwrap();

    let payload = &backend.submissions.borrow()[0].1["payload"];
    assert_eq!(payload["category"], "Reference");
    assert_eq!(payload["project"], "Research");
    assert_eq!(payload["fieldUpdates"]["title"], "Standup 08-20");
}

#[test]
fn backend_rejection_leaves_decision_pending_for_retry() {
    let backend = ScriptedBackend::new(sample_decisions()).rejecting("d1");
    let mut queue = load_queue(&backend);

    let form = || {
        FormState::Approval(ApprovalForm {
            approved: Some(false),
            feedback: Some("needs another pass".into()),
        })
    };

    let err = queue.submit("d1", form(), &backend).unwrap_err();
    match err {
        QueueError::Submission(e) => assert_eq!(e.code, "stale_decision"),
        other => panic!("expected submission failure, got {:?}", other),
    }
    assert_eq!(queue.status_of("d1"), Some(DecisionStatus::Pending));

    // Manual retry is a fresh submission, not an automatic one.
    let second = queue.submit("d1", form(), &backend);
    assert!(second.is_err());
    assert_eq!(backend.submissions.borrow().len(), 2);
}

#[test]
fn live_update_replaces_fetched_decision() {
    let backend = ScriptedBackend::new(sample_decisions());
    let mut queue = load_queue(&backend);

    queue.apply_update(DecisionUpdate::Upserted(decision(json!({
        "id": "d1",
        "decisionType": "approval",
        "data": {"action": "Deploy v3", "context": "hotfix"},
    }))));
    assert_eq!(queue.len(), 4);

    queue.apply_update(DecisionUpdate::Removed { id: "d3".into() });
    assert_eq!(queue.len(), 3);
}

#[test]
fn unsupported_type_surfaces_as_error_not_drop() {
    let mut queue = DecisionQueue::new();
    queue.apply_update(DecisionUpdate::Upserted(decision(json!({
        "id": "d9",
        "decisionType": "extract",
        "data": {},
    }))));

    // Still visible in the queue so the UI can show the unsupported state.
    assert_eq!(queue.pending().len(), 1);
    let d = queue.pending()[0];
    assert!(triage_core::config_for(&d.decision_type).is_err());
}
