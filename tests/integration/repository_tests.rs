use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use okra_api::{ApiError, ObjectiveTransport};
use okra_client::{ClientError, ObjectiveRepository};
use okra_core::paginate;
use okra_core::types::{
    Objective, ObjectiveDraft, ObjectiveId, ObjectivePatch, ObjectiveStatus, Rag, Role, RoleId,
    ViewRole,
};
use okra_core::Month;
use okra_store::MemorySessionStore;

const USER: &str = "gs6368";

/// Scripted in-memory server. Records every call so tests can assert how
/// often the repository actually went to the network.
struct MockTransport {
    objectives: Vec<Objective>,
    roles: Vec<Role>,
    next_id: i64,
    fail_mutations: bool,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockTransport {
    fn new(objectives: Vec<Objective>) -> Self {
        let next_id = objectives.iter().map(|o| o.id.0).max().unwrap_or(0) + 1;
        Self {
            objectives,
            roles: vec![
                Role {
                    id: RoleId::new(USER),
                    name: "Gabrielle Santos".to_string(),
                },
                Role {
                    id: RoleId::new("ed5521"),
                    name: "Edie Doyle".to_string(),
                },
            ],
            next_id,
            fail_mutations: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Arc<Mutex<Vec<&'static str>>> {
        Arc::clone(&self.calls)
    }

    fn log(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ObjectiveTransport for MockTransport {
    async fn fetch_roles(&mut self) -> Result<Vec<Role>, ApiError> {
        self.log("fetch_roles");
        Ok(self.roles.clone())
    }

    async fn fetch_all(&mut self, year: Option<i32>) -> Result<Vec<Objective>, ApiError> {
        self.log("fetch_all");
        let mut objectives = self.objectives.clone();
        if let Some(year) = year {
            objectives.retain(|o| o.year == year);
        }
        Ok(objectives)
    }

    async fn fetch_filtered(
        &mut self,
        year: i32,
        user: &RoleId,
        view_as: ViewRole,
    ) -> Result<Vec<Objective>, ApiError> {
        self.log("fetch_filtered");
        Ok(self
            .objectives
            .iter()
            .filter(|o| o.year == year)
            .filter(|o| match view_as {
                ViewRole::Assignee => &o.assignee_id == user,
                ViewRole::Owner => &o.owner_id == user,
            })
            .cloned()
            .collect())
    }

    async fn create(&mut self, draft: &ObjectiveDraft) -> Result<Objective, ApiError> {
        self.log("create");
        if self.fail_mutations {
            return Err(ApiError::ConnectionFailed("server down".to_string()));
        }

        let resolve = |id: &RoleId| {
            self.roles
                .iter()
                .find(|r| &r.id == id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        };

        let objective = Objective {
            id: ObjectiveId(self.next_id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: ObjectiveStatus::InProgress,
            rag: Rag::Green,
            year: draft.year,
            from_date: draft.start_date.clone(),
            to_date: draft.target_date.clone(),
            assignee: resolve(&draft.assignee_id),
            assignee_id: draft.assignee_id.clone(),
            owner: resolve(&draft.owner_id),
            owner_id: draft.owner_id.clone(),
            milestones: draft.milestones.clone(),
            metrics: draft.metrics.clone(),
            monthly_updates: Default::default(),
            last_updated: "2025-07-01".to_string(),
        };
        self.next_id += 1;
        self.objectives.push(objective.clone());
        Ok(objective)
    }

    async fn update(
        &mut self,
        id: ObjectiveId,
        patch: &ObjectivePatch,
    ) -> Result<Objective, ApiError> {
        self.log("update");
        if self.fail_mutations {
            return Err(ApiError::ConnectionFailed("server down".to_string()));
        }

        let Some(objective) = self.objectives.iter_mut().find(|o| o.id == id) else {
            return Err(ApiError::Rejected("Objective not found".to_string()));
        };

        if let Some(status) = patch.status {
            objective.status = status;
        }
        if let Some(rag) = patch.rag {
            objective.rag = rag;
        }
        if let Some(ref start) = patch.start_date {
            objective.from_date = start.clone();
        }
        if let Some(ref target) = patch.target_date {
            objective.to_date = target.clone();
        }
        if let Some(ref milestones) = patch.milestones {
            objective.milestones = milestones.clone();
        }
        if let Some(ref metrics) = patch.metrics {
            objective.metrics = metrics.clone();
        }
        if !patch.monthly_updates.is_empty() {
            objective.monthly_updates = patch.monthly_updates.clone();
        }
        objective.last_updated = "2025-07-02".to_string();
        Ok(objective.clone())
    }

    async fn delete(&mut self, id: ObjectiveId) -> Result<(), ApiError> {
        self.log("delete");
        if self.fail_mutations {
            return Err(ApiError::ConnectionFailed("server down".to_string()));
        }
        if !self.objectives.iter().any(|o| o.id == id) {
            return Err(ApiError::Rejected("Objective not found".to_string()));
        }
        self.objectives.retain(|o| o.id != id);
        Ok(())
    }
}

fn objective(id: i64, year: i32, assignee_id: &str, owner_id: &str, assignee: &str) -> Objective {
    Objective {
        id: ObjectiveId(id),
        title: format!("objective {id}"),
        description: String::new(),
        status: ObjectiveStatus::Open,
        rag: Rag::Green,
        year,
        from_date: "2025-01-01".to_string(),
        to_date: "2025-06-01".to_string(),
        assignee: assignee.to_string(),
        assignee_id: RoleId::new(assignee_id),
        owner: "Someone".to_string(),
        owner_id: RoleId::new(owner_id),
        milestones: String::new(),
        metrics: String::new(),
        monthly_updates: Default::default(),
        last_updated: "2025-01-01".to_string(),
    }
}

fn draft(year: i32) -> ObjectiveDraft {
    ObjectiveDraft {
        title: "Raise activation".to_string(),
        description: "Activation above 40%".to_string(),
        milestones: String::new(),
        metrics: String::new(),
        assignee_id: RoleId::new(USER),
        owner_id: RoleId::new("ed5521"),
        capital: "Company".to_string(),
        start_date: "2025-01-01".to_string(),
        target_date: "2025-09-30".to_string(),
        year,
    }
}

fn repository(
    transport: MockTransport,
) -> ObjectiveRepository<MemorySessionStore, MockTransport> {
    ObjectiveRepository::new(MemorySessionStore::new(), transport, RoleId::new(USER))
}

// === Initial load: one server pull per session ===

#[tokio::test]
async fn initial_load_fetches_once_then_trusts_cache() {
    let transport = MockTransport::new(vec![objective(1, 2025, USER, "x", "Gabrielle")]);
    let calls = transport.calls();
    let mut repo = repository(transport);

    repo.load_initial().await.unwrap();
    repo.load_initial().await.unwrap();

    let mut view = ViewRole::Assignee;
    repo.list_mine(2025, &mut view).await.unwrap();
    repo.list_all(2025).await.unwrap();

    let fetches = calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| **c == "fetch_all")
        .count();
    assert_eq!(fetches, 1);
}

#[tokio::test]
async fn cache_miss_during_listing_fetches_and_populates() {
    let transport = MockTransport::new(vec![objective(1, 2025, USER, "x", "Gabrielle")]);
    let calls = transport.calls();
    let mut repo = repository(transport);

    // No load_initial: the first listing has to pull the set itself.
    let mut view = ViewRole::Assignee;
    let mine = repo.list_mine(2025, &mut view).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert!(repo.cache().get().unwrap().is_some());

    repo.list_all(2025).await.unwrap();
    let fetches = calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| **c == "fetch_all")
        .count();
    assert_eq!(fetches, 1);
}

// === Assignee → Owner fallback ===

#[tokio::test]
async fn empty_assignee_view_retries_once_as_owner() {
    let transport = MockTransport::new(vec![
        objective(1, 2025, "someone-else", USER, "Avery"),
        objective(2, 2025, "someone-else", "third", "Blake"),
    ]);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let mut view = ViewRole::Assignee;
    let mine = repo.list_mine(2025, &mut view).await.unwrap();

    assert_eq!(view, ViewRole::Owner);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, ObjectiveId(1));
}

#[tokio::test]
async fn fallback_does_not_cascade_when_owner_also_empty() {
    let transport = MockTransport::new(vec![objective(1, 2024, "a", "b", "Avery")]);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let mut view = ViewRole::Assignee;
    let mine = repo.list_mine(2025, &mut view).await.unwrap();

    assert!(mine.is_empty());
    assert_eq!(view, ViewRole::Owner);
}

// === list_all ordering ===

#[tokio::test]
async fn list_all_orders_by_assignee_and_keeps_ties_stable() {
    let transport = MockTransport::new(vec![
        objective(1, 2025, "a", "b", "delta"),
        objective(2, 2025, "a", "b", "Alpha"),
        objective(3, 2025, "a", "b", "alpha"),
        objective(4, 2024, "a", "b", "Beta"),
    ]);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let all = repo.list_all(2025).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|o| o.id.0).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

// === Mutation reconciliation ===

#[tokio::test]
async fn create_appends_server_record_to_cache() {
    let transport = MockTransport::new(vec![objective(1, 2025, USER, "x", "Gabrielle")]);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let created = repo.create(draft(2025)).await.unwrap();
    assert_eq!(created.id, ObjectiveId(2));
    assert_eq!(created.status, ObjectiveStatus::InProgress);
    assert_eq!(created.assignee, "Gabrielle Santos");

    let cached = repo.cache().get().unwrap().unwrap();
    assert!(cached.iter().any(|o| o.id == created.id));
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_network() {
    let transport = MockTransport::new(vec![objective(1, 2025, USER, "x", "Gabrielle")]);
    let calls = transport.calls();
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let mut bad = draft(2025);
    bad.target_date = "2025-01-15".to_string();
    let err = repo.create(bad).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    assert!(!calls.lock().unwrap().contains(&"create"));
    assert_eq!(repo.cache().get().unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn update_merges_monthly_note_and_preserves_other_months() {
    let mut seeded = objective(1, 2025, USER, "x", "Gabrielle");
    seeded
        .monthly_updates
        .insert(Month::Jan, "kickoff".to_string());

    let transport = MockTransport::new(vec![seeded]);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let mut patch = ObjectivePatch::default();
    patch.monthly_updates.insert(Month::Mar, "x".to_string());
    repo.update(ObjectiveId(1), patch).await.unwrap();

    let cached = repo.cache().get().unwrap().unwrap();
    let entry = cached.iter().find(|o| o.id == ObjectiveId(1)).unwrap();
    assert_eq!(entry.monthly_updates.get(&Month::Mar).unwrap(), "x");
    assert_eq!(entry.monthly_updates.get(&Month::Jan).unwrap(), "kickoff");
}

#[tokio::test]
async fn update_of_unknown_id_fails_before_the_network() {
    let transport = MockTransport::new(vec![objective(1, 2025, USER, "x", "Gabrielle")]);
    let calls = transport.calls();
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let err = repo
        .update(ObjectiveId(99), ObjectivePatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::UnknownObjective(_)));
    assert!(!calls.lock().unwrap().contains(&"update"));
}

#[tokio::test]
async fn remove_drops_entry_from_cache() {
    let transport = MockTransport::new(vec![
        objective(1, 2025, USER, "x", "Gabrielle"),
        objective(2, 2025, USER, "x", "Gabrielle"),
    ]);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    repo.remove(ObjectiveId(1)).await.unwrap();

    let cached = repo.cache().get().unwrap().unwrap();
    assert_eq!(cached.len(), 1);
    assert!(cached.iter().all(|o| o.id != ObjectiveId(1)));
}

// === Failure leaves the cache untouched ===

#[tokio::test]
async fn failed_mutations_leave_cache_untouched() {
    let mut transport = MockTransport::new(vec![objective(1, 2025, USER, "x", "Gabrielle")]);
    transport.fail_mutations = true;
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let before = repo.cache().get().unwrap().unwrap();

    assert!(repo.create(draft(2025)).await.is_err());
    assert!(repo
        .update(ObjectiveId(1), ObjectivePatch::default())
        .await
        .is_err());
    assert!(repo.remove(ObjectiveId(1)).await.is_err());

    let after = repo.cache().get().unwrap().unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn server_rejection_surfaces_verbatim() {
    let transport = MockTransport::new(vec![objective(1, 2025, USER, "x", "Gabrielle")]);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let err = match repo.remove(ObjectiveId(99)).await {
        Err(ClientError::Api(e)) => e,
        other => panic!("expected api error, got {other:?}"),
    };
    assert_eq!(err.to_string(), "Objective not found");
}

// === Pagination over a filtered set ===

#[tokio::test]
async fn pages_of_a_filtered_listing_reproduce_it() {
    let objectives: Vec<Objective> = (1..=13)
        .map(|i| objective(i, 2025, "a", "b", &format!("person {i:02}")))
        .collect();
    let transport = MockTransport::new(objectives);
    let mut repo = repository(transport);
    repo.load_initial().await.unwrap();

    let all = repo.list_all(2025).await.unwrap();
    assert_eq!(all.len(), 13);

    let first = paginate(&all, 6, 1);
    assert_eq!(first.total_pages, 3);

    let mut collected = Vec::new();
    for n in 1..=first.total_pages {
        collected.extend(paginate(&all, 6, n).items);
    }
    assert_eq!(collected, all);
}

// === Roles memoization ===

#[tokio::test]
async fn roles_are_fetched_once_per_session() {
    let transport = MockTransport::new(Vec::new());
    let calls = transport.calls();
    let mut repo = repository(transport);

    assert_eq!(repo.roles().await.unwrap().len(), 2);
    assert_eq!(repo.roles().await.unwrap().len(), 2);

    let fetches = calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| **c == "fetch_roles")
        .count();
    assert_eq!(fetches, 1);
}
