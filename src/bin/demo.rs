//! A tiny inspection binary: seeds a store, prints this month's grid and the
//! pending-tasks list, then mirrors everything into a JSON file cache.
//! Set RUST_LOG for more detail.

use chrono::{Duration, Utc};

use agenda::cache::FileCache;
use agenda::filter::{filter_tasks, FilterCriteria, StatusFilter};
use agenda::view;
use agenda::window;
use agenda::{Agent, AgentId, Category, SubtaskInput, TaskInput, TaskStore};

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut store = TaskStore::new();
    let ana = Agent::new(AgentId::from("ana"), "Ana".to_string(), "García".to_string(),
        "#e11d48".parse().unwrap());

    let mut kickoff = TaskInput::new("Reunión de arranque", Utc::now());
    kickoff.category = Category::Meeting;
    kickoff.agents.insert(ana.id().clone());
    let kickoff_id = *store.create(kickoff).id();
    store.add_subtask(&kickoff_id, SubtaskInput::new("preparar agenda")).unwrap();
    store.add_subtask(&kickoff_id, SubtaskInput::new("reservar sala")).unwrap();

    let mut delivery = TaskInput::new("Entrega final", Utc::now() + Duration::days(2));
    delivery.category = Category::Delivery;
    delivery.completed = true;
    store.create(delivery);

    let criteria = FilterCriteria::default();
    let tasks = filter_tasks(store.list(), &criteria);

    println!("== month of {} ==", window::today().format("%B %Y"));
    for cell in view::month_cells(&tasks, window::today()) {
        if cell.tasks.is_empty() {
            continue;
        }
        print!("{}:", cell.day);
        for task in &cell.tasks {
            print!(" [{}]", task.title());
        }
        if cell.hidden > 0 {
            print!(" +{} more", cell.hidden);
        }
        println!();
    }

    println!("\n== pending ==");
    let pending = filter_tasks(store.list(), &FilterCriteria {
        status: StatusFilter::Pending,
        ..criteria
    });
    for task in view::sorted_by_start(&pending) {
        let progress = task.progress();
        let assignee = if task.agents().contains(ana.id()) { ana.initials() } else { "--".to_string() };
        println!("  [{}] {} ({}/{} subtasks)", assignee, task.title(), progress.completed, progress.total);
    }

    let cache_path = std::env::temp_dir().join("agenda-demo.json");
    let mut cache = FileCache::new(&cache_path);
    agenda::sync::mirror(&store, &mut cache).await.unwrap();
    cache.save_to_file();
    println!("\nmirrored into {:?}", cache_path);
}
