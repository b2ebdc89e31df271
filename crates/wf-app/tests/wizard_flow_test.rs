use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use wf_app::usecases::{
    ClearDraft, LoadDraft, OfficerListStore, PhoneCheckStatus, PhoneUniquenessChecker, SaveDraft,
    SubmitOfficer,
};
use wf_app::{WizardError, WizardOrchestrator, WizardSettings};
use wf_core::directory::{Area, AreaManager};
use wf_core::draft::{DraftSnapshot, DraftVersionPolicy};
use wf_core::ids::{AgencyId, AreaId, ManagerId, OfficerId};
use wf_core::officer::{
    Designation, DocumentType, FormState, Gender, MaritalStatus, OfficerSummary, PhotoRef,
    Relationship,
};
use wf_core::ports::{
    ClockPort, DraftStoreError, DraftStorePort, OfficerListPort, OfficerRegistrationPort,
    PhoneLookup, PhoneLookupPort,
};
use wf_core::submission::{CreateOfficerRequest, CreateOfficerResponse, SubmissionFailure};
use wf_core::validation::{Field, ValidationErrorKind};
use wf_core::wizard::{WizardState, WizardStep};

// ---- fakes ----

#[derive(Default)]
struct MemoryDraftStore {
    slot: Mutex<Option<String>>,
}

impl MemoryDraftStore {
    fn stored(&self) -> Option<DraftSnapshot> {
        self.slot
            .lock()
            .unwrap()
            .as_deref()
            .map(|raw| DraftSnapshot::from_json(raw).unwrap())
    }
}

#[async_trait]
impl DraftStorePort for MemoryDraftStore {
    async fn load(&self) -> Result<Option<String>, DraftStoreError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn save(&self, raw: &str) -> Result<(), DraftStoreError> {
        *self.slot.lock().unwrap() = Some(raw.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), DraftStoreError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

struct FixedClock;

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
    }
}

#[derive(Default)]
struct FakeLookup {
    taken: Mutex<Vec<String>>,
    calls: AtomicUsize,
    unreachable: AtomicBool,
}

#[async_trait]
impl PhoneLookupPort for FakeLookup {
    async fn lookup(&self, number: &str) -> anyhow::Result<PhoneLookup> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }
        let exists = self.taken.lock().unwrap().iter().any(|n| n == number);
        Ok(PhoneLookup {
            exists,
            name: exists.then(|| "Existing Officer".to_string()),
        })
    }
}

enum RegistrationBehaviour {
    Succeed,
    SucceedAs(&'static str),
    Fail(SubmissionFailure),
    Hang,
}

struct FakeRegistration {
    behaviour: RegistrationBehaviour,
    requests: Mutex<Vec<CreateOfficerRequest>>,
}

#[async_trait]
impl OfficerRegistrationPort for FakeRegistration {
    async fn create_officer(
        &self,
        request: &CreateOfficerRequest,
        _photo: &PhotoRef,
    ) -> Result<CreateOfficerResponse, SubmissionFailure> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behaviour {
            RegistrationBehaviour::Succeed => Ok(created("GUARD")),
            RegistrationBehaviour::SucceedAs(user_type) => Ok(created(user_type)),
            RegistrationBehaviour::Fail(failure) => Err(failure.clone()),
            RegistrationBehaviour::Hang => std::future::pending().await,
        }
    }
}

fn created(user_type: &str) -> CreateOfficerResponse {
    CreateOfficerResponse {
        id: OfficerId::from("OFF-100"),
        status: Some("ACTIVE".into()),
        user_type: Some(user_type.into()),
    }
}

#[derive(Default)]
struct FakeOfficerList {
    calls: AtomicUsize,
    fail: AtomicBool,
}

#[async_trait]
impl OfficerListPort for FakeOfficerList {
    async fn list_officers(&self, _agency: &AgencyId) -> anyhow::Result<Vec<OfficerSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("listing unavailable");
        }
        Ok(Vec::new())
    }
}

struct Harness {
    orchestrator: Arc<WizardOrchestrator>,
    drafts: Arc<MemoryDraftStore>,
    lookup: Arc<FakeLookup>,
    registration: Arc<FakeRegistration>,
    officer_list: Arc<FakeOfficerList>,
}

fn build(behaviour: RegistrationBehaviour, settings: WizardSettings) -> Harness {
    build_with_drafts(behaviour, settings, Arc::new(MemoryDraftStore::default()))
}

fn build_with_drafts(
    behaviour: RegistrationBehaviour,
    settings: WizardSettings,
    drafts: Arc<MemoryDraftStore>,
) -> Harness {
    let clock = Arc::new(FixedClock);
    let lookup = Arc::new(FakeLookup::default());
    let registration = Arc::new(FakeRegistration {
        behaviour,
        requests: Mutex::new(Vec::new()),
    });
    let officer_list = Arc::new(FakeOfficerList::default());

    let orchestrator = WizardOrchestrator::new(
        settings.clone(),
        Arc::new(SaveDraft::new(drafts.clone(), clock.clone())),
        Arc::new(LoadDraft::new(drafts.clone(), DraftVersionPolicy::KeepAny)),
        Arc::new(ClearDraft::new(drafts.clone())),
        Arc::new(SubmitOfficer::new(registration.clone(), settings.country_code.clone())),
        PhoneUniquenessChecker::new(lookup.clone(), settings.phone_check_debounce),
        Arc::new(OfficerListStore::new(
            officer_list.clone(),
            Duration::from_secs(300),
        )),
        clock,
    );

    Harness {
        orchestrator: Arc::new(orchestrator),
        drafts,
        lookup,
        registration,
        officer_list,
    }
}

async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

async fn let_phone_check_finish() {
    tokio::time::advance(Duration::from_millis(600)).await;
    settle().await;
}

fn north() -> Area {
    Area {
        id: AreaId::from("north"),
        name: "North Gate".into(),
    }
}

fn fill_personal(form: &mut FormState) {
    let p = &mut form.personal_details;
    p.first_name = "Ravi".into();
    p.last_name = "Kumar".into();
    p.email = "ravi.kumar@example.com".into();
    p.date_of_birth = NaiveDate::from_ymd_opt(1995, 2, 20);
    p.gender = Some(Gender::Male);
    p.height_cm = "172".into();
    p.weight_kg = "68".into();
    p.father_name = "Suresh Kumar".into();
    p.mother_name = "Lata Kumar".into();
    p.marital_status = Some(MaritalStatus::Single);
    p.profile_photo = Some(PhotoRef::new("/tmp/ravi.png", "image/png"));
}

fn fill_contact(form: &mut FormState) {
    let c = &mut form.contact_details;
    c.primary_phone = "9876543210".into();
    c.emergency_contact.first_name = "Suresh".into();
    c.emergency_contact.last_name = "Kumar".into();
    c.emergency_contact.relationship = Some(Relationship::Father);
    c.emergency_contact.phone = "7012345678".into();
}

fn fill_address(form: &mut FormState) {
    form.address.update_local(|a| {
        a.line1 = "4 Station Road".into();
        a.city = "Nagpur".into();
        a.district = "Nagpur".into();
        a.state = "Maharashtra".into();
        a.pincode = "440001".into();
    });
    form.address.set_same_as_permanent(true);
}

fn fill_employment(form: &mut FormState) {
    let e = &mut form.employment_details;
    e.agency_id = Some(AgencyId::from("AG-1"));
    e.date_of_joining = NaiveDate::from_ymd_opt(2025, 1, 2);
    e.designation = Some(Designation::SecurityGuard);
    e.select_area(&north());
    e.select_manager(&AreaManager {
        id: ManagerId::from("M1"),
        name: "Mehta".into(),
        area_id: Some(AreaId::from("north")),
    })
    .unwrap();
}

fn fill_documents(form: &mut FormState) {
    for doc in [
        DocumentType::AadhaarCard,
        DocumentType::PanCard,
        DocumentType::PoliceVerification,
    ] {
        form.document_verification.set_selected(doc, true);
    }
}

/// Walks a mounted wizard to the documents step with a complete form.
async fn walk_to_documents(h: &Harness) {
    let o = &h.orchestrator;
    o.edit(fill_personal).await.unwrap();
    assert_eq!(o.next().await.unwrap(), WizardState::editing(WizardStep::Contact));

    o.edit(fill_contact).await.unwrap();
    let_phone_check_finish().await;
    assert_eq!(o.next().await.unwrap(), WizardState::editing(WizardStep::Address));

    o.edit(fill_address).await.unwrap();
    assert_eq!(o.next().await.unwrap(), WizardState::editing(WizardStep::Employment));

    o.edit(fill_employment).await.unwrap();
    assert_eq!(o.next().await.unwrap(), WizardState::editing(WizardStep::Documents));

    o.edit(fill_documents).await.unwrap();
}

// ---- tests ----

#[tokio::test(start_paused = true)]
async fn wizard_flow_fresh_mount_to_success() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;

    assert_eq!(o.mount().await.unwrap(), WizardState::editing(WizardStep::Personal));
    walk_to_documents(&h).await;

    let stored = h.drafts.stored().expect("autosaved draft");
    assert_eq!(stored.metadata.current_step, WizardStep::Documents.number());

    let state = o.submit().await.unwrap();

    assert_eq!(
        state,
        WizardState::Success {
            officer_id: OfficerId::from("OFF-100")
        }
    );
    assert!(h.drafts.stored().is_none());
    assert!(o.should_leave());
    assert_eq!(h.officer_list.calls.load(Ordering::SeqCst), 1);
    assert_eq!(o.form().await, FormState::default());

    let requests = h.registration.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].contacts[0].phone_number, "+919876543210");
}

#[tokio::test]
async fn wizard_flow_empty_step_reports_errors_and_stays() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();

    let state = o.next().await.unwrap();

    match state {
        WizardState::Editing { step, errors, .. } => {
            assert_eq!(step, WizardStep::Personal);
            assert!(errors.iter().any(|e| e.field == Field::FirstName));
            assert!(errors.iter().any(|e| e.field == Field::ProfilePhoto));
        }
        other => panic!("unexpected state {other:?}"),
    }
    assert!(h.drafts.stored().is_none());
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_taken_phone_blocks_contact_step() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    h.lookup.taken.lock().unwrap().push("9876543210".into());
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.edit(fill_personal).await.unwrap();
    o.next().await.unwrap();

    o.edit(fill_contact).await.unwrap();
    let_phone_check_finish().await;
    let state = o.next().await.unwrap();

    let WizardState::Editing { step, errors, .. } = state else {
        panic!("expected editing state");
    };
    assert_eq!(step, WizardStep::Contact);
    assert_eq!(
        errors[0].kind,
        ValidationErrorKind::PhoneTaken {
            owner_name: Some("Existing Officer".into())
        }
    );
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_pending_phone_check_blocks_until_resolved() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.edit(fill_personal).await.unwrap();
    o.next().await.unwrap();
    o.edit(fill_contact).await.unwrap();

    let state = o.next().await.unwrap();
    let WizardState::Editing { errors, .. } = state else {
        panic!("expected editing state");
    };
    assert_eq!(errors[0].kind, ValidationErrorKind::PhoneCheckPending);
    assert_eq!(o.phone_status(), PhoneCheckStatus::Pending);

    let_phone_check_finish().await;
    assert_eq!(o.phone_status(), PhoneCheckStatus::Available);
    assert_eq!(o.next().await.unwrap(), WizardState::editing(WizardStep::Address));
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_phone_debounce_fires_once_after_last_edit() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();

    o.edit(|f| f.contact_details.primary_phone = "9876543210".into())
        .await
        .unwrap();
    tokio::time::advance(Duration::from_millis(300)).await;
    settle().await;
    o.edit(|f| f.contact_details.primary_phone = "9876543211".into())
        .await
        .unwrap();
    tokio::time::advance(Duration::from_millis(300)).await;
    settle().await;
    assert_eq!(h.lookup.calls.load(Ordering::SeqCst), 0);

    tokio::time::advance(Duration::from_millis(200)).await;
    settle().await;
    assert_eq!(h.lookup.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_invalid_leading_digit_makes_no_lookup() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();

    o.edit(|f| f.contact_details.primary_phone = "5123456789".into())
        .await
        .unwrap();
    let_phone_check_finish().await;

    assert_eq!(h.lookup.calls.load(Ordering::SeqCst), 0);
    assert_eq!(o.phone_status(), PhoneCheckStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_resumes_draft_at_highest_populated_step() {
    let drafts = Arc::new(MemoryDraftStore::default());
    let mut form = FormState::default();
    fill_personal(&mut form);
    fill_contact(&mut form);
    fill_address(&mut form);
    let snapshot = DraftSnapshot::new(form.clone(), WizardStep::Contact, FixedClock.now());
    drafts.save(&snapshot.to_json().unwrap()).await.unwrap();

    let h = build_with_drafts(RegistrationBehaviour::Succeed, WizardSettings::default(), drafts);
    let o = &h.orchestrator;

    let state = o.mount().await.unwrap();
    assert_eq!(
        state,
        WizardState::DraftPrompt {
            resume_step: WizardStep::Address,
            saved_at: FixedClock.now(),
        }
    );
    assert!(matches!(
        o.edit(|f| f.personal_details.first_name = "X".into()).await,
        Err(WizardError::NotEditable(_))
    ));

    let state = o.continue_draft().await.unwrap();
    assert_eq!(state, WizardState::editing(WizardStep::Address));
    assert_eq!(o.form().await, form);
}

#[tokio::test]
async fn wizard_flow_start_fresh_clears_stored_draft() {
    let drafts = Arc::new(MemoryDraftStore::default());
    let mut form = FormState::default();
    fill_personal(&mut form);
    let snapshot = DraftSnapshot::new(form, WizardStep::Personal, FixedClock.now());
    drafts.save(&snapshot.to_json().unwrap()).await.unwrap();

    let h = build_with_drafts(RegistrationBehaviour::Succeed, WizardSettings::default(), drafts);
    let o = &h.orchestrator;
    o.mount().await.unwrap();

    let state = o.start_fresh().await.unwrap();

    assert_eq!(state, WizardState::editing(WizardStep::Personal));
    assert_eq!(o.form().await, FormState::default());
    assert!(h.drafts.stored().is_none());
}

#[tokio::test]
async fn wizard_flow_explicit_save_draft_requires_confirmation() {
    let settings = WizardSettings {
        autosave_on_advance: false,
        ..WizardSettings::default()
    };
    let h = build(RegistrationBehaviour::Succeed, settings);
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.edit(|f| f.personal_details.first_name = "Asha".into())
        .await
        .unwrap();

    assert_eq!(
        o.request_save_draft().await.unwrap(),
        WizardState::SaveProgressConfirm {
            step: WizardStep::Personal
        }
    );
    o.cancel_save_draft().await.unwrap();
    assert!(h.drafts.stored().is_none());

    o.request_save_draft().await.unwrap();
    o.confirm_save_draft().await.unwrap();
    let stored = h.drafts.stored().unwrap();
    assert_eq!(stored.form.personal_details.first_name, "Asha");
    assert_eq!(stored.metadata.current_step, 1);
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_submission_failure_keeps_form_and_shows_banner() {
    let h = build(
        RegistrationBehaviour::Fail(SubmissionFailure::Conflict("phone already used".into())),
        WizardSettings::default(),
    );
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    walk_to_documents(&h).await;
    let before = o.form().await;

    let state = o.submit().await.unwrap();

    assert_eq!(
        state,
        WizardState::Editing {
            step: WizardStep::Documents,
            errors: Vec::new(),
            banner: Some(SubmissionFailure::Conflict("phone already used".into())),
        }
    );
    assert_eq!(o.form().await, before);
    assert!(h.drafts.stored().is_some());
    assert!(!o.should_leave());

    assert_eq!(
        o.dismiss_banner().await.unwrap(),
        WizardState::editing(WizardStep::Documents)
    );
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_submit_returns_to_first_failing_step() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    walk_to_documents(&h).await;
    o.edit(|f| {
        f.document_verification
            .set_selected(DocumentType::PanCard, false)
    })
    .await
    .unwrap();
    o.edit(|f| f.contact_details.emergency_contact.phone.clear())
        .await
        .unwrap();

    let state = o.submit().await.unwrap();

    let WizardState::Editing { step, errors, .. } = state else {
        panic!("expected editing state");
    };
    assert_eq!(step, WizardStep::Contact);
    assert_eq!(errors[0].field, Field::EmergencyPhone);
    assert!(h.registration.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn wizard_flow_discard_drops_form_and_draft() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.edit(fill_personal).await.unwrap();
    o.next().await.unwrap();

    o.request_discard().await.unwrap();
    assert_eq!(
        o.cancel_discard().await.unwrap(),
        WizardState::editing(WizardStep::Contact)
    );
    o.request_discard().await.unwrap();
    let state = o.confirm_discard().await.unwrap();

    assert_eq!(state, WizardState::Discarded);
    assert!(h.drafts.stored().is_none());
    assert_eq!(o.form().await, FormState::default());
    assert!(o.should_leave());
}

#[tokio::test]
async fn wizard_flow_area_change_clears_foreign_manager() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.edit(fill_employment).await.unwrap();

    assert!(!o.select_area(&north()).await.unwrap());
    assert!(o.form().await.employment_details.area_manager.is_some());

    let south = Area {
        id: AreaId::from("south"),
        name: "South Gate".into(),
    };
    assert!(o.select_area(&south).await.unwrap());
    assert!(o.form().await.employment_details.area_manager.is_none());
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_close_cancels_inflight_submission() {
    let h = build(RegistrationBehaviour::Hang, WizardSettings::default());
    let o = h.orchestrator.clone();
    o.mount().await.unwrap();
    walk_to_documents(&h).await;

    let submitting = tokio::spawn({
        let o = o.clone();
        async move { o.submit().await }
    });
    settle().await;
    assert_eq!(o.state().await, WizardState::Submitting);

    o.close();
    let state = submitting.await.unwrap().unwrap();

    assert_eq!(state, WizardState::Submitting);
    assert!(h.drafts.stored().is_some());
    assert!(matches!(o.next().await, Err(WizardError::Closed)));
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_close_without_cancel_drops_scheduled_phone_check() {
    let settings = WizardSettings {
        cancel_inflight_on_close: false,
        ..WizardSettings::default()
    };
    let h = build(RegistrationBehaviour::Succeed, settings);
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.edit(fill_contact).await.unwrap();

    o.close();
    let_phone_check_finish().await;

    assert_eq!(h.lookup.calls.load(Ordering::SeqCst), 0);
    assert_eq!(o.phone_status(), PhoneCheckStatus::Pending);
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_failed_phone_lookup_does_not_block_contact_step() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    h.lookup.unreachable.store(true, Ordering::SeqCst);
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.edit(fill_personal).await.unwrap();
    o.next().await.unwrap();

    o.edit(fill_contact).await.unwrap();
    let_phone_check_finish().await;

    assert_eq!(h.lookup.calls.load(Ordering::SeqCst), 1);
    assert!(matches!(o.phone_status(), PhoneCheckStatus::Unknown { .. }));
    assert_eq!(o.next().await.unwrap(), WizardState::editing(WizardStep::Address));
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_listing_refresh_failure_still_succeeds() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    h.officer_list.fail.store(true, Ordering::SeqCst);
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    walk_to_documents(&h).await;

    let state = o.submit().await.unwrap();

    assert_eq!(
        state,
        WizardState::Success {
            officer_id: OfficerId::from("OFF-100")
        }
    );
    assert_eq!(h.officer_list.calls.load(Ordering::SeqCst), 1);
    assert!(o.should_leave());
    assert!(h.drafts.stored().is_none());
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_unexpected_user_type_is_still_success() {
    let h = build(
        RegistrationBehaviour::SucceedAs("SUPERVISOR"),
        WizardSettings::default(),
    );
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    walk_to_documents(&h).await;

    let state = o.submit().await.unwrap();

    assert_eq!(
        state,
        WizardState::Success {
            officer_id: OfficerId::from("OFF-100")
        }
    );
    assert!(o.should_leave());
    assert!(h.drafts.stored().is_none());
}

#[tokio::test(start_paused = true)]
async fn wizard_flow_edit_during_submission_never_touches_form() {
    let h = build(RegistrationBehaviour::Hang, WizardSettings::default());
    let o = h.orchestrator.clone();
    o.mount().await.unwrap();
    walk_to_documents(&h).await;

    let submitting = tokio::spawn({
        let o = o.clone();
        async move { o.submit().await }
    });
    settle().await;
    assert_eq!(o.state().await, WizardState::Submitting);

    let editing = tokio::spawn({
        let o = o.clone();
        async move { o.edit(|f| f.personal_details.first_name = "Mallory".into()).await }
    });
    settle().await;
    assert!(!editing.is_finished());

    o.close();
    submitting.await.unwrap().unwrap();

    assert!(matches!(editing.await.unwrap(), Err(WizardError::Closed)));
    assert_eq!(o.form().await.personal_details.first_name, "Ravi");
}

#[tokio::test]
async fn wizard_flow_manager_of_other_area_is_rejected() {
    let h = build(RegistrationBehaviour::Succeed, WizardSettings::default());
    let o = &h.orchestrator;
    o.mount().await.unwrap();
    o.select_area(&north()).await.unwrap();

    let result = o
        .select_manager(&AreaManager {
            id: ManagerId::from("M7"),
            name: "Rao".into(),
            area_id: Some(AreaId::from("south")),
        })
        .await;

    assert!(matches!(result, Err(WizardError::Form(_))));
    assert!(o.form().await.employment_details.area_manager.is_none());
}
