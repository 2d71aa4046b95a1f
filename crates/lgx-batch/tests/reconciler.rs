//! Reconciler behavior against an in-memory backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lgx_batch::{BatchBackend, BatchDraft, BatchError, Reconciler, SavedBatch, SelectAll};
use lgx_client::ApiError;
use lgx_core::entities::{Drs, Manifest, Order};
use lgx_core::enums::BatchKind;
use lgx_core::forms::{DrsDraft, ManifestDraft};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[derive(Default)]
struct State {
    pending: Vec<Order>,
    saved: Option<SavedBatch>,
    pending_calls: usize,
    create_calls: usize,
    update_calls: usize,
    remove_calls: Vec<(String, String)>,
    last_draft: Option<BatchDraft>,
}

#[derive(Clone, Default)]
struct FakeBackend(Arc<Mutex<State>>);

impl FakeBackend {
    fn with_pending(orders: Vec<Order>) -> Self {
        let backend = Self::default();
        backend.0.lock().unwrap().pending = orders;
        backend
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.0.lock().unwrap()
    }
}

#[async_trait]
impl BatchBackend for FakeBackend {
    async fn pending_orders(
        &self,
        _kind: BatchKind,
        _hub: Option<&str>,
    ) -> Result<Vec<Order>, ApiError> {
        let mut state = self.state();
        state.pending_calls += 1;
        Ok(state.pending.clone())
    }

    async fn fetch(&self, _kind: BatchKind, id: &str) -> Result<SavedBatch, ApiError> {
        self.state()
            .saved
            .clone()
            .filter(|b| b.id() == id)
            .ok_or_else(|| ApiError::NotFound {
                message: format!("batch {id}"),
            })
    }

    async fn create(&self, draft: &BatchDraft) -> Result<SavedBatch, ApiError> {
        let mut state = self.state();
        state.create_calls += 1;
        state.last_draft = Some(draft.clone());
        Ok(saved_from(draft, "new-1"))
    }

    async fn update(&self, id: &str, draft: &BatchDraft) -> Result<SavedBatch, ApiError> {
        let mut state = self.state();
        state.update_calls += 1;
        state.last_draft = Some(draft.clone());
        Ok(saved_from(draft, id))
    }

    async fn remove_order(
        &self,
        _kind: BatchKind,
        id: &str,
        order_id: &str,
    ) -> Result<SavedBatch, ApiError> {
        let mut state = self.state();
        state.remove_calls.push((id.to_string(), order_id.to_string()));
        let Some(SavedBatch::Manifest(mut manifest)) = state.saved.clone() else {
            return Err(ApiError::NotFound {
                message: id.to_string(),
            });
        };
        manifest.orders.retain(|o| o.order_id() != order_id);
        state.saved = Some(SavedBatch::Manifest(manifest.clone()));
        Ok(SavedBatch::Manifest(manifest))
    }
}

fn order(id: &str, docket: &str, consignee: &str, weight: f64, quantity: u32) -> Order {
    serde_json::from_value(json!({
        "_id": id,
        "orderId": docket,
        "consignor": {"name": "Ravi Traders", "phone": "9876543210", "pincode": "411001"},
        "consignee": {"name": consignee, "phone": "9123456780", "pincode": "110001"},
        "items": [{"description": "carton", "weight": weight, "quantity": quantity}],
        "status": "booked"
    }))
    .unwrap()
}

fn shipped_from(id: &str, docket: &str, consignor_pincode: &str) -> Order {
    let mut order = order(id, docket, "Kumar Agencies", 1.0, 1);
    order.consignor.pincode = consignor_pincode.to_string();
    order.consignee.pincode = "560001".to_string();
    order
}

fn pending() -> Vec<Order> {
    vec![
        order("o-1", "DKT-1", "Meena Stores", 2.0, 3),
        order("o-2", "DKT-2", "Kumar Agencies", 5.0, 1),
        order("o-3", "DKT-3", "Meena Wholesale", 1.5, 2),
    ]
}

fn manifest_json(id: &str, status: &str, orders: serde_json::Value) -> Manifest {
    serde_json::from_value(json!({
        "_id": id,
        "manifestId": format!("MF-{id}"),
        "sourceHub": "hub-1",
        "destinationHub": "hub-2",
        "vehicleNumber": "MH12AB1234",
        "loaderWeight": 100.0,
        "orders": orders,
        "status": status
    }))
    .unwrap()
}

fn saved_from(draft: &BatchDraft, id: &str) -> SavedBatch {
    let orders = serde_json::to_value(draft.orders()).unwrap();
    match draft {
        BatchDraft::Manifest(_) => SavedBatch::Manifest(manifest_json(id, "draft", orders)),
        BatchDraft::Drs(d) => SavedBatch::Drs(
            serde_json::from_value::<Drs>(json!({
                "_id": id,
                "drsId": "DRS-1",
                "hub": d.hub,
                "deliveryAgent": d.delivery_agent,
                "orders": orders,
                "status": "open"
            }))
            .unwrap(),
        ),
    }
}

fn manifest_draft(loader_weight: f64) -> BatchDraft {
    BatchDraft::Manifest(ManifestDraft {
        id: None,
        source_hub: "hub-1".into(),
        destination_hub: "hub-2".into(),
        loader: None,
        vehicle_number: "mh 12 ab 1234".into(),
        loader_weight,
        orders: Vec::new(),
    })
}

async fn loaded(backend: &FakeBackend) -> Reconciler<FakeBackend> {
    let mut rec = Reconciler::new(backend.clone(), BatchKind::Manifest);
    rec.load(Some("hub-1"), None).await.unwrap();
    rec
}

fn attached_ids<B: BatchBackend>(rec: &Reconciler<B>) -> Vec<&str> {
    rec.attached().iter().map(|e| e.order_id.as_str()).collect()
}

#[tokio::test]
async fn select_computes_items_and_weight() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;

    assert!(rec.select("o-1").unwrap());
    let entry = &rec.attached()[0];
    assert_eq!(entry.items, 3);
    assert!((entry.weight - 6.0).abs() < f64::EPSILON);
    assert!(!entry.persisted);
}

#[tokio::test]
async fn select_twice_does_not_duplicate() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;

    assert!(rec.select("o-2").unwrap());
    assert!(!rec.select("o-2").unwrap());
    assert_eq!(attached_ids(&rec), vec!["o-2"]);
}

#[tokio::test]
async fn select_unknown_order_fails() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    assert!(matches!(rec.select("o-9"), Err(BatchError::UnknownOrder(id)) if id == "o-9"));
}

#[tokio::test]
async fn available_excludes_attached() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    rec.select("o-1").unwrap();
    let ids: Vec<&str> = rec.available().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o-2", "o-3"]);
}

#[rstest]
#[case("", vec!["o-1", "o-2", "o-3", "o-4"])]
#[case("dkt-2", vec!["o-2"])]
#[case("  Meena ", vec!["o-1", "o-3"])]
#[case("110001", vec!["o-1", "o-2", "o-3"])]
#[case("411001", vec!["o-1", "o-2", "o-3"])]
#[case("411002", vec!["o-4"])]
#[case("nobody", vec![])]
#[tokio::test]
async fn search_filters_pending(#[case] text: &str, #[case] expected: Vec<&str>) {
    let mut orders = pending();
    orders.push(shipped_from("o-4", "DKT-4", "411002"));
    let backend = FakeBackend::with_pending(orders);
    let mut rec = loaded(&backend).await;
    rec.set_search(text);
    let ids: Vec<&str> = rec.filtered_pending().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn select_all_attaches_exactly_the_filtered_orders() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    rec.set_search("  MEENA ");

    assert_eq!(rec.toggle_select_all(), SelectAll::Selected(2));
    assert_eq!(attached_ids(&rec), vec!["o-1", "o-3"]);

    assert_eq!(rec.toggle_select_all(), SelectAll::Cleared(2));
    assert!(rec.attached().is_empty());
}

#[tokio::test]
async fn select_all_clear_keeps_persisted_orders() {
    let backend = FakeBackend::with_pending(pending());
    backend.state().saved = Some(SavedBatch::Manifest(manifest_json(
        "m-1",
        "draft",
        json!([
            {"order": "o-7", "items": 2, "weight": 4.0},
            {"order": "o-8", "items": 1, "weight": 3.0}
        ]),
    )));
    let mut rec = Reconciler::new(backend.clone(), BatchKind::Manifest);
    rec.load(None, Some("m-1")).await.unwrap();

    assert_eq!(rec.toggle_select_all(), SelectAll::Selected(3));
    assert_eq!(attached_ids(&rec), vec!["o-7", "o-8", "o-1", "o-2", "o-3"]);

    assert_eq!(rec.toggle_select_all(), SelectAll::Cleared(3));
    assert_eq!(attached_ids(&rec), vec!["o-7", "o-8"]);
    assert!(rec.attached().iter().all(|e| e.persisted));
    assert!(backend.state().remove_calls.is_empty());
}

#[tokio::test]
async fn select_all_with_partial_selection_fills_the_rest() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    rec.select("o-2").unwrap();

    assert_eq!(rec.toggle_select_all(), SelectAll::Selected(2));
    assert_eq!(attached_ids(&rec), vec!["o-2", "o-1", "o-3"]);
}

#[tokio::test]
async fn deselect_staged_makes_no_server_call() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    rec.select("o-1").unwrap();

    rec.deselect("o-1").await.unwrap();
    assert!(rec.attached().is_empty());
    let state = backend.state();
    assert!(state.remove_calls.is_empty());
    assert_eq!(state.pending_calls, 1);
}

#[tokio::test]
async fn deselect_persisted_calls_server_once_and_refetches() {
    let backend = FakeBackend::with_pending(pending());
    backend.state().saved = Some(SavedBatch::Manifest(manifest_json(
        "m-1",
        "draft",
        json!([
            {"order": "o-7", "items": 2, "weight": 4.0},
            {"order": "o-8", "items": 1, "weight": 3.0}
        ]),
    )));

    let mut rec = Reconciler::new(backend.clone(), BatchKind::Manifest);
    rec.load(None, Some("m-1")).await.unwrap();
    assert_eq!(attached_ids(&rec), vec!["o-7", "o-8"]);
    assert!(rec.attached().iter().all(|e| e.persisted));
    rec.select("o-1").unwrap();

    rec.deselect("o-7").await.unwrap();

    assert_eq!(attached_ids(&rec), vec!["o-8", "o-1"]);
    assert!(rec.attached()[0].persisted);
    assert!(!rec.attached()[1].persisted);
    let state = backend.state();
    assert_eq!(state.remove_calls, vec![("m-1".to_string(), "o-7".to_string())]);
    assert_eq!(state.pending_calls, 2);
}

#[tokio::test]
async fn load_rejects_dispatched_manifest() {
    let backend = FakeBackend::default();
    backend.state().saved = Some(SavedBatch::Manifest(manifest_json("m-2", "dispatched", json!([]))));
    let mut rec = Reconciler::new(backend, BatchKind::Manifest);
    let err = rec.load(None, Some("m-2")).await.unwrap_err();
    assert!(matches!(err, BatchError::NotEditable { .. }));
}

#[tokio::test]
async fn submit_rejects_empty_selection() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    let err = rec.submit(manifest_draft(50.0)).await.unwrap_err();
    assert!(matches!(err, BatchError::Empty));
    assert_eq!(backend.state().create_calls, 0);
}

#[tokio::test]
async fn submit_rejects_loader_weight_below_actual() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    rec.select("o-1").unwrap();
    rec.select("o-2").unwrap();

    let err = rec.submit(manifest_draft(10.0)).await.unwrap_err();
    assert!(
        matches!(err, BatchError::Overweight { declared, actual } if declared < actual && (actual - 11.0).abs() < 1e-9)
    );
    assert_eq!(backend.state().create_calls, 0);
}

#[tokio::test]
async fn loader_weight_matching_summed_weight_is_accepted() {
    let backend = FakeBackend::with_pending(vec![
        order("o-1", "DKT-1", "Meena Stores", 0.1, 1),
        order("o-2", "DKT-2", "Kumar Agencies", 0.2, 1),
    ]);
    let mut rec = loaded(&backend).await;
    rec.select("o-1").unwrap();
    rec.select("o-2").unwrap();
    assert!(rec.aggregate().weight > 0.3);

    let err = rec.submit(manifest_draft(0.299)).await.unwrap_err();
    assert!(matches!(err, BatchError::Overweight { .. }));

    rec.submit(manifest_draft(0.3)).await.unwrap();
    assert_eq!(backend.state().create_calls, 1);
}

#[tokio::test]
async fn submit_creates_then_updates() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    rec.select("o-1").unwrap();

    let saved = rec.submit(manifest_draft(11.0)).await.unwrap();
    assert_eq!(saved.id(), "new-1");
    assert_eq!(rec.batch_id(), Some("new-1"));
    assert!(rec.attached().iter().all(|e| e.persisted));
    {
        let state = backend.state();
        assert_eq!(state.create_calls, 1);
        let Some(BatchDraft::Manifest(sent)) = &state.last_draft else {
            panic!("expected a manifest draft");
        };
        assert_eq!(sent.vehicle_number, "MH12AB1234");
        assert_eq!(sent.orders.len(), 1);
    }

    rec.select("o-2").unwrap();
    rec.submit(manifest_draft(11.0)).await.unwrap();
    let state = backend.state();
    assert_eq!(state.create_calls, 1);
    assert_eq!(state.update_calls, 1);
}

#[tokio::test]
async fn submit_reports_invalid_header() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = loaded(&backend).await;
    rec.select("o-3").unwrap();

    let mut draft = manifest_draft(50.0);
    if let BatchDraft::Manifest(d) = &mut draft {
        d.vehicle_number = "not a plate".into();
    }
    let err = rec.submit(draft).await.unwrap_err();
    let BatchError::Form(errors) = err else {
        panic!("expected form errors");
    };
    assert!(errors.has("vehicleNumber"));
}

#[tokio::test]
async fn drs_skips_weight_check_and_rejects_manifest_draft() {
    let backend = FakeBackend::with_pending(pending());
    let mut rec = Reconciler::new(backend.clone(), BatchKind::Drs);
    rec.load(Some("hub-2"), None).await.unwrap();
    rec.select("o-2").unwrap();

    let err = rec.submit(manifest_draft(100.0)).await.unwrap_err();
    assert!(matches!(err, BatchError::KindMismatch { .. }));

    let draft = BatchDraft::Drs(DrsDraft {
        id: None,
        hub: "hub-2".into(),
        delivery_agent: "emp-4".into(),
        vehicle_number: "KA01A1234".into(),
        orders: Vec::new(),
    });
    let saved = rec.submit(draft).await.unwrap();
    assert_eq!(saved.kind(), BatchKind::Drs);
    assert_eq!(rec.aggregate().orders, 1);
}
