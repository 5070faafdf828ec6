//! Integration tests exercising the model layer end to end: an observing
//! "view" connected over signals, a sorted picklist, and a scope filter,
//! the way a tooling UI wires them together.

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_trellis::prelude::*;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A minimal stand-in for a view: mirrors the model into its own row cache
/// purely from notifications, never from polling.
struct MirrorView {
    rows: Arc<Mutex<Vec<String>>>,
}

impl MirrorView {
    fn attach(model: &Arc<RowModel<String>>) -> Self {
        let rows = Arc::new(Mutex::new(model.rows().clone()));

        let cache = rows.clone();
        let source = model.clone();
        model.signals().rows_inserted.connect(move |&(first, _)| {
            let value = source.get(first).unwrap().clone();
            cache.lock().insert(first, value);
        });

        let cache = rows.clone();
        model.signals().rows_removed.connect(move |&(first, _)| {
            cache.lock().remove(first);
        });

        let cache = rows.clone();
        let source = model.clone();
        model.signals().rows_updated.connect(move |&(first, _)| {
            cache.lock()[first] = source.get(first).unwrap().clone();
        });

        let cache = rows.clone();
        let source = model.clone();
        model.signals().model_reset.connect(move |_| {
            *cache.lock() = source.rows().clone();
        });

        Self { rows }
    }

    fn snapshot(&self) -> Vec<String> {
        self.rows.lock().clone()
    }
}

#[test]
fn view_stays_in_sync_through_notifications_only() {
    init_tracing();

    let model = Arc::new(RowModel::<String>::empty());
    let view = MirrorView::attach(&model);

    model.push("alpha".to_string());
    model.push("bravo".to_string());
    model.insert(1, "between".to_string()).unwrap();
    model.replace(0, "ALPHA".to_string()).unwrap();
    model.remove(2).unwrap();
    model.set_rows(vec!["fresh".to_string(), "start".to_string()]);
    model.modify(1, |row| row.make_ascii_uppercase()).unwrap();

    assert_eq!(view.snapshot(), *model.rows());
    assert_eq!(view.snapshot(), vec!["fresh".to_string(), "START".to_string()]);
}

#[test]
fn notification_ranges_match_net_size() {
    let model = RowModel::<String>::empty();

    let net = Arc::new(Mutex::new(0i64));
    let n = net.clone();
    model
        .signals()
        .rows_inserted
        .connect(move |&(first, last)| *n.lock() += (last - first + 1) as i64);
    let n = net.clone();
    model
        .signals()
        .rows_removed
        .connect(move |&(first, last)| *n.lock() -= (last - first + 1) as i64);

    model.push("a".to_string());
    model.push("b".to_string());
    model.push("c".to_string());
    model.remove(1).unwrap();

    assert_eq!(*net.lock(), model.len() as i64);
}

#[test]
fn sorted_picklist_scenario() {
    init_tracing();

    let picklist = SortedRowModel::<String>::new();
    for label in ["banana", "apple", "cherry"] {
        picklist.insert(label.to_string()).unwrap();
    }
    assert_eq!(*picklist.rows(), vec!["apple", "banana", "cherry"]);

    // A caller-requested position is never honored.
    let landed = picklist.insert_at(0, "durian".to_string()).unwrap();
    assert_eq!(landed, 3);
    assert_eq!(*picklist.rows(), vec!["apple", "banana", "cherry", "durian"]);
}

#[test]
fn sorted_model_shares_the_observable_seam() {
    let picklist = SortedRowModel::<String>::new();

    let inserted = Arc::new(Mutex::new(Vec::new()));
    {
        let observable: &dyn ObservableRows = &picklist;
        let recv = inserted.clone();
        observable
            .signals()
            .rows_inserted
            .connect(move |&(first, _)| recv.lock().push(first));
    }

    picklist.insert("bravo".to_string()).unwrap();
    picklist.insert("alpha".to_string()).unwrap();

    assert_eq!(*inserted.lock(), vec![0, 0]);
}

#[test]
fn tree_filter_scenarios() {
    #[derive(Debug)]
    struct HistoryRecord {
        status: u16,
    }

    // No criterion: only the root qualifies.
    let bare = TreeFilter::<HistoryRecord>::new();
    assert!(bare.matches(NodeKind::Root));
    assert!(!bare.matches(NodeKind::Node {
        in_scope: true,
        record: Some(&HistoryRecord { status: 200 }),
    }));

    // Criterion plus scope gate, the way a site tree wires it.
    let filter = TreeFilter::with_criterion(FnCriterion::new(
        "status >= 400",
        |record: &HistoryRecord| record.status >= 400,
    ));
    filter.set_in_scope_only(true);

    assert!(filter.matches(NodeKind::Root));
    assert!(filter.matches(NodeKind::Node {
        in_scope: true,
        record: Some(&HistoryRecord { status: 500 }),
    }));
    // Out of scope loses regardless of the criterion's verdict.
    assert!(!filter.matches(NodeKind::Node {
        in_scope: false,
        record: Some(&HistoryRecord { status: 500 }),
    }));
    // No record means not evaluable, so hidden.
    assert!(!filter.matches(NodeKind::Node {
        in_scope: true,
        record: None,
    }));

    assert_eq!(filter.short_desc(), "status >= 400");
}

#[test]
fn errors_are_recoverable_and_models_untouched() {
    let model = RowModel::new(vec!["only".to_string()]);

    let err = model.remove(1).unwrap_err();
    assert_eq!(err, ModelError::row_out_of_range(1, 1));
    assert_eq!(err.to_string(), "row 1 is out of range for a model with 1 rows");
    assert_eq!(model.len(), 1);

    // The failed call emitted nothing and the model still works.
    model.push("second".to_string());
    assert_eq!(model.len(), 2);
}
