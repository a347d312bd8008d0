//! Loader, gateway and screen behavior against an in-memory backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use provas_client::submission::{SUCCESS_MESSAGE, notice_for};
use provas_client::{
    ArchiveApi, CatalogScreen, CatalogView, ClientError, Credential, LoadOutcome, Notice,
    OptionLoader, SubmissionError, SubmissionGateway, SubmitOutcome,
};
use provas_core::entities::{Category, NewTest, OptionsToCreate};
use provas_core::selection::{DraftController, NewTestDraft};
use serde_json::{Value, json};

/// Scripted reply for the next call.
enum Reply {
    Ok,
    Reject(&'static str),
    Fail(u16),
}

impl Reply {
    fn into_result<T>(self, value: T) -> Result<T, ClientError> {
        match self {
            Self::Ok => Ok(value),
            Self::Reject(message) => Err(ClientError::Rejected {
                status: 400,
                message: message.to_string(),
            }),
            Self::Fail(status) => Err(ClientError::Api {
                status,
                body: String::new(),
            }),
        }
    }
}

#[derive(Default)]
struct FakeArchive {
    options: Mutex<VecDeque<(Reply, OptionsToCreate)>>,
    terms: Mutex<VecDeque<(Reply, Value)>>,
    create_replies: Mutex<VecDeque<Reply>>,
    created: Mutex<Vec<NewTest>>,
    calls: Mutex<usize>,
}

impl FakeArchive {
    fn push_options(&self, reply: Reply, options: Value) {
        let options = serde_json::from_value(options).unwrap();
        self.options.lock().unwrap().push_back((reply, options));
    }

    fn push_terms(&self, reply: Reply, payload: Value) {
        self.terms.lock().unwrap().push_back((reply, payload));
    }

    fn push_create(&self, reply: Reply) {
        self.create_replies.lock().unwrap().push_back(reply);
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn count(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

impl ArchiveApi for FakeArchive {
    async fn tests_by_terms(&self, _credential: &Credential) -> Result<Value, ClientError> {
        self.count();
        let (reply, payload) = self.terms.lock().unwrap().pop_front().expect("scripted terms");
        reply.into_result(payload)
    }

    async fn tests_by_teachers(&self, _credential: &Credential) -> Result<Value, ClientError> {
        self.count();
        Ok(json!([]))
    }

    async fn options_to_create(
        &self,
        _credential: &Credential,
    ) -> Result<OptionsToCreate, ClientError> {
        self.count();
        let (reply, options) = self
            .options
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted options");
        reply.into_result(options)
    }

    async fn categories(&self, _credential: &Credential) -> Result<Vec<Category>, ClientError> {
        self.count();
        Ok(Vec::new())
    }

    async fn create_test(&self, _credential: &Credential, test: &NewTest) -> Result<(), ClientError> {
        self.count();
        let reply = self
            .create_replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted create");
        let result = reply.into_result(());
        if result.is_ok() {
            self.created.lock().unwrap().push(test.clone());
        }
        result
    }
}

fn credential() -> Credential {
    Credential::new("token").unwrap()
}

fn two_disciplines() -> Value {
    json!({
        "disciplines": [
            {"id": 1, "name": "Calc", "teachers": [{"id": 10, "name": "A"}]},
            {"id": 2, "name": "Bio", "teachers": [{"id": 20, "name": "B"}]}
        ],
        "categories": [{"id": 2, "name": "Final"}]
    })
}

fn complete_controller() -> DraftController {
    let mut controller = DraftController::new();
    controller.set_name("P1");
    controller.set_pdf_url("http://x/y.pdf");
    controller.set_category(2);
    controller.set_discipline(3);
    controller.set_teacher(4);
    controller
}

// ── Option loader ──────────────────────────────────────────────────

#[tokio::test]
async fn loader_without_credential_sends_nothing() {
    let api = FakeArchive::default();
    let mut loader = OptionLoader::new();

    let outcome = loader.load(&api, None).await.unwrap();

    assert_eq!(outcome, LoadOutcome::NotReady);
    assert_eq!(api.calls(), 0);
    assert!(loader.options().is_none());
    assert!(loader.options_or_empty().disciplines.is_empty());
}

#[tokio::test]
async fn second_load_replaces_first_wholesale() {
    let api = FakeArchive::default();
    api.push_options(Reply::Ok, two_disciplines());
    api.push_options(
        Reply::Ok,
        json!({"disciplines": [{"id": 9, "name": "Art", "teachers": []}], "categories": []}),
    );
    let mut loader = OptionLoader::new();
    let credential = credential();

    loader.load(&api, Some(&credential)).await.unwrap();
    loader.load(&api, Some(&credential)).await.unwrap();

    let options = loader.options().unwrap();
    assert_eq!(options.disciplines.len(), 1);
    assert_eq!(options.disciplines[0].name, "Art");
    assert!(options.categories.is_empty());
}

#[tokio::test]
async fn failed_load_keeps_previous_snapshot() {
    let api = FakeArchive::default();
    api.push_options(Reply::Ok, two_disciplines());
    api.push_options(Reply::Fail(503), json!({}));
    let mut loader = OptionLoader::new();
    let credential = credential();

    loader.load(&api, Some(&credential)).await.unwrap();
    let err = loader.load(&api, Some(&credential)).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 503, .. }));
    assert_eq!(loader.options().unwrap().disciplines.len(), 2);
}

#[test]
fn stale_completion_is_dropped() {
    let mut loader = OptionLoader::new();
    let credential = credential();

    let older = loader.begin(Some(&credential)).unwrap();
    let newer = loader.begin(Some(&credential)).unwrap();

    let fresh: OptionsToCreate = serde_json::from_value(two_disciplines()).unwrap();
    assert_eq!(loader.finish(newer, Ok(fresh.clone())).unwrap(), LoadOutcome::Applied);
    assert_eq!(
        loader.finish(older, Ok(OptionsToCreate::default())).unwrap(),
        LoadOutcome::Stale
    );
    assert_eq!(loader.options(), Some(&fresh));
}

#[test]
fn completion_after_unmount_is_noop() {
    let mut loader = OptionLoader::new();
    let ticket = loader.begin(Some(&credential())).unwrap();
    loader.unmount();

    let late_failure = loader.finish(
        ticket,
        Err(ClientError::Api {
            status: 500,
            body: String::new(),
        }),
    );
    assert_eq!(late_failure.unwrap(), LoadOutcome::Unmounted);
    assert!(loader.options().is_none());
}

// ── Submission gateway ─────────────────────────────────────────────

#[tokio::test]
async fn accepted_submission_forwards_record_and_resets() {
    let api = FakeArchive::default();
    api.push_create(Reply::Ok);
    let credential = credential();
    let gateway = SubmissionGateway::new(&api, Some(&credential));
    let mut controller = complete_controller();

    let result = gateway.submit(&mut controller).await;

    assert_eq!(notice_for(&result), Some(Notice::success(SUCCESS_MESSAGE)));
    assert!(matches!(result, Ok(SubmitOutcome::Created)));
    assert_eq!(controller.draft(), &NewTestDraft::default());
    assert_eq!(
        api.created.lock().unwrap().as_slice(),
        &[NewTest {
            name: "P1".into(),
            pdf_url: "http://x/y.pdf".into(),
            category_id: 2,
            discipline_id: 3,
            teacher_id: 4,
        }]
    );
}

#[tokio::test]
async fn incomplete_draft_is_never_sent() {
    let api = FakeArchive::default();
    let credential = credential();
    let gateway = SubmissionGateway::new(&api, Some(&credential));
    let mut controller = complete_controller();
    controller.set_pdf_url("");
    let before = controller.draft().clone();

    let err = gateway.submit(&mut controller).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Validation(_)));
    assert_eq!(err.to_string(), "All fields are required!");
    assert_eq!(api.calls(), 0);
    assert_eq!(controller.draft(), &before);
}

#[tokio::test]
async fn rejected_submission_keeps_draft_and_message() {
    let api = FakeArchive::default();
    api.push_create(Reply::Reject("Teacher does not teach this discipline"));
    let credential = credential();
    let gateway = SubmissionGateway::new(&api, Some(&credential));
    let mut controller = complete_controller();
    let before = controller.draft().clone();

    let result = gateway.submit(&mut controller).await;

    assert_eq!(
        notice_for(&result),
        Some(Notice::error("Teacher does not teach this discipline"))
    );
    assert_eq!(controller.draft(), &before);
}

#[tokio::test]
async fn transient_failure_keeps_draft_and_allows_retry() {
    let api = FakeArchive::default();
    api.push_create(Reply::Fail(502));
    api.push_create(Reply::Ok);
    let credential = credential();
    let gateway = SubmissionGateway::new(&api, Some(&credential));
    let mut controller = complete_controller();

    let err = gateway.submit(&mut controller).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transient { .. }));
    assert_eq!(err.to_string(), "Error, try again in a few seconds!");
    assert_eq!(controller.draft().name, "P1");

    let retry = gateway.submit(&mut controller).await.unwrap();
    assert_eq!(retry, SubmitOutcome::Created);
    assert_eq!(api.created.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn submission_without_credential_is_suppressed() {
    let api = FakeArchive::default();
    let gateway = SubmissionGateway::new(&api, None);
    let mut controller = complete_controller();

    let outcome = gateway.submit(&mut controller).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::NotReady);
    assert_eq!(api.calls(), 0);
    assert_eq!(controller.draft().name, "P1");
}

// ── Listing screens ────────────────────────────────────────────────

#[tokio::test]
async fn term_screen_builds_tree_from_payload() {
    let api = FakeArchive::default();
    api.push_terms(
        Reply::Ok,
        json!([{"id": 1, "number": 1, "disciplines": []}]),
    );
    let mut screen = CatalogScreen::new(CatalogView::ByTerm);

    let outcome = screen.refresh(&api, Some(&credential())).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Applied);
    let tree = screen.tree().unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree.roots[0].children[0].is_placeholder());
}

#[tokio::test]
async fn malformed_payload_keeps_previous_tree() {
    let api = FakeArchive::default();
    api.push_terms(
        Reply::Ok,
        json!([{"id": 1, "number": 1, "disciplines": []}]),
    );
    api.push_terms(Reply::Ok, json!([{"id": 2, "number": 2}]));
    let credential = credential();
    let mut screen = CatalogScreen::new(CatalogView::ByTerm);

    screen.refresh(&api, Some(&credential)).await.unwrap();
    let err = screen.refresh(&api, Some(&credential)).await.unwrap_err();

    assert!(matches!(err, ClientError::Aggregation(_)));
    assert_eq!(screen.tree().unwrap().roots[0].key.id, 1);
}

#[tokio::test]
async fn unmounted_screen_drops_its_tree() {
    let api = FakeArchive::default();
    let mut screen = CatalogScreen::new(CatalogView::ByTeacher);
    screen.refresh(&api, Some(&credential())).await.unwrap();
    assert!(screen.tree().is_some());

    screen.unmount();
    assert!(screen.tree().is_none());
}
