//! End-to-end scenarios: a store driven the way a calendar screen drives it,
//! with the derived views and the repository mirroring exercised together.

use chrono::{Duration, TimeZone, Utc};

use agenda::cache::FileCache;
use agenda::filter::{filter_tasks, FilterCriteria, StatusFilter};
use agenda::sync;
use agenda::traits::TaskRepository;
use agenda::view;
use agenda::window;
use agenda::{Category, Priority, SubtaskInput, TaskInput, TaskPatch, TaskStore};

/// Builds the store a small sales team's week could look like
fn populate_store() -> TaskStore {
    let mut store = TaskStore::new();

    let mut call = TaskInput::new("Llamar cliente", Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap());
    call.category = Category::FollowUp;
    call.priority = Priority::High;
    call.agents = ["ana"].iter().map(|s| (*s).into()).collect();
    store.create(call);

    let mut handoff = TaskInput::new("Entrega final", Utc.with_ymd_and_hms(2025, 1, 8, 14, 0, 0).unwrap());
    handoff.category = Category::Delivery;
    handoff.completed = true;
    store.create(handoff);

    let mut review = TaskInput::new("Revisión de propuesta", Utc.with_ymd_and_hms(2025, 1, 8, 16, 30, 0).unwrap());
    review.category = Category::Meeting;
    review.description = Some("revisar el anexo de precios".to_string());
    store.create(review);

    store
}

#[test]
fn filtered_tasks_land_in_the_right_week_cells() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = populate_store();
    let review_id = *store.list()[2].id();

    let pending = filter_tasks(store.list(), &FilterCriteria {
        status: StatusFilter::Pending,
        ..FilterCriteria::default()
    });
    assert_eq!(pending.len(), 2);

    let cells = view::week_cells(&pending, window::next_anchor(
        chrono::NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
        window::ViewMode::Week,
    ));
    // Monday 2025-01-06 holds the call, Wednesday the review; the completed
    // handoff was filtered out before the join
    assert_eq!(cells[0].tasks.len(), 1);
    assert_eq!(cells[0].tasks[0].title(), "Llamar cliente");
    assert_eq!(cells[2].tasks.len(), 1);
    assert_eq!(cells[2].tasks[0].title(), "Revisión de propuesta");

    // completing the review moves it out of the pending view on the next recomputation
    store.set_completed(&review_id, true).unwrap();
    let pending = filter_tasks(store.list(), &FilterCriteria {
        status: StatusFilter::Pending,
        ..FilterCriteria::default()
    });
    assert_eq!(pending.len(), 1);
}

#[test]
fn search_text_and_chips_combine() {
    let store = populate_store();

    // free text reaches into descriptions too
    let by_text = filter_tasks(store.list(), &FilterCriteria {
        text: "anexo".to_string(),
        ..FilterCriteria::default()
    });
    assert_eq!(by_text.len(), 1);
    assert_eq!(by_text[0].title(), "Revisión de propuesta");

    // an agent chip on top of a status chip
    let by_agent = filter_tasks(store.list(), &FilterCriteria {
        status: StatusFilter::Pending,
        agents: ["ana", "nadie"].iter().map(|s| (*s).into()).collect(),
        ..FilterCriteria::default()
    });
    assert_eq!(by_agent.len(), 1);
    assert_eq!(by_agent[0].title(), "Llamar cliente");
}

#[test]
fn updates_only_touch_what_they_name() {
    let mut store = populate_store();
    let call_id = *store.list()[0].id();

    let updated = store.update(&call_id, TaskPatch {
        title: Some("Llamar cliente (segunda vez)".to_string()),
        end: Some(Some(Utc.with_ymd_and_hms(2025, 1, 6, 9, 30, 0).unwrap())),
        ..TaskPatch::default()
    }).unwrap();

    assert_eq!(updated.title(), "Llamar cliente (segunda vez)");
    assert!(updated.end().is_some());
    assert_eq!(updated.priority(), Priority::High);
    assert_eq!(updated.category(), Category::FollowUp);
}

#[test]
fn subtask_progress_drives_the_checklist_badge() {
    let mut store = populate_store();
    let call_id = *store.list()[0].id();

    let first = *store.add_subtask(&call_id, SubtaskInput::new("buscar teléfono")).unwrap().id();
    store.add_subtask(&call_id, SubtaskInput::new("preparar guión")).unwrap();
    store.set_subtask_completed(&call_id, &first, true);

    let progress = store.progress(&call_id).unwrap();
    assert_eq!((progress.completed, progress.total, progress.percent), (1, 2, 50));
}

#[tokio::test]
async fn mirror_then_restore_round_trips_the_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let cache_path = std::env::temp_dir().join("agenda-mirror-test.json");
    let mut cache = FileCache::new(&cache_path);

    let mut store = populate_store();
    sync::mirror(&store, &mut cache).await.unwrap();
    assert_eq!(cache.load_tasks().await.unwrap().len(), 3);

    // deletions performed after a sync are propagated by the next one
    let handoff_id = *store.list()[1].id();
    assert!(store.delete(&handoff_id));
    sync::mirror(&store, &mut cache).await.unwrap();
    assert_eq!(cache.load_tasks().await.unwrap().len(), 2);

    cache.save_to_file();
    let reloaded = FileCache::from_file(&cache_path).unwrap();
    let restored = sync::restore(&reloaded).await.unwrap();

    assert_eq!(restored.list().len(), store.list().len());
    for task in store.list() {
        let twin = restored.get(task.id()).expect("task lost in the round trip");
        assert_eq!(twin, task);
    }

    let _ = std::fs::remove_file(&cache_path);
}

#[test]
fn month_view_joins_windows_and_filtered_tasks() {
    let mut store = populate_store();
    // crowd one day to trigger the "+N more" affordance
    for n in 0..5 {
        store.create(TaskInput::new(
            format!("tarea {}", n),
            Utc.with_ymd_and_hms(2025, 1, 6, 10, 0, 0).unwrap() + Duration::minutes(n),
        ));
    }

    let tasks = filter_tasks(store.list(), &FilterCriteria::default());
    let cells = view::month_cells(&tasks, chrono::NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());

    let busy_day = cells.iter()
        .find(|c| c.day == chrono::NaiveDate::from_ymd_opt(2025, 1, 6).unwrap())
        .unwrap();
    assert_eq!(busy_day.tasks.len(), 3);
    assert_eq!(busy_day.hidden, 3); // "Llamar cliente" plus 5 extras, minus the 3 shown
}
