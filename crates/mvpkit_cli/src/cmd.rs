//! Command handlers.

use crate::cli::{PostCommands, TaskCommands};
use crate::feed::JsonFeedSource;
use log::info;
use mvpkit_core::db::open_db;
use mvpkit_core::{
    DataSource, PostRepository, PostStore, SqlitePostStore, SqliteTaskRepository, Task,
    TaskService,
};
use std::error::Error;
use std::path::Path;

pub type CmdResult = Result<(), Box<dyn Error>>;

/// Runs one task command against the database at `db_path`.
pub fn run_task_command(db_path: &Path, command: TaskCommands) -> CmdResult {
    let conn = open_db(db_path)?;
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    match command {
        TaskCommands::Add { title, description } => {
            let task = service.add_task(title, description)?;
            println!("{}", task.id());
        }
        TaskCommands::Edit {
            id,
            title,
            description,
        } => {
            let task = service.update_task(&id, title, description)?;
            println!("{}", format_row(&task));
        }
        TaskCommands::List { filter, json } => {
            let tasks = service.list_tasks(filter.into())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for task in &tasks {
                    println!("{}", format_row(task));
                }
            }
        }
        TaskCommands::Show { id } => match service.get_task(&id)? {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => return Err(format!("task not found: {id}").into()),
        },
        TaskCommands::Complete { id } => service.complete_task(&id)?,
        TaskCommands::Activate { id } => service.activate_task(&id)?,
        TaskCommands::Delete { id } => service.delete_task(&id)?,
        TaskCommands::ClearCompleted => {
            let removed = service.clear_completed_tasks()?;
            println!("removed {removed}");
        }
        TaskCommands::Stats => {
            let stats = service.statistics()?;
            println!(
                "active {} completed {} total {}",
                stats.active,
                stats.completed,
                stats.total()
            );
        }
    }

    Ok(())
}

/// Runs one post command against the local cache at `db_path`.
pub async fn run_post_command(db_path: &Path, command: PostCommands) -> CmdResult {
    let store = SqlitePostStore::new(open_db(db_path)?);

    match command {
        PostCommands::List => {
            for post in store.get_posts().await? {
                println!("{}\t{}\t{}", post.id, post.user_id, post.title);
            }
        }
        PostCommands::Sync { feed } => {
            let repository = PostRepository::new(JsonFeedSource::new(feed), store);
            let posts = repository.sync_posts().await?;
            info!("event=posts_sync module=cli status=ok count={}", posts.len());
            println!("synced {}", posts.len());
        }
        PostCommands::Clear => {
            store.delete_all_posts().await?;
        }
    }

    Ok(())
}

fn format_row(task: &Task) -> String {
    let mark = if task.is_completed() { "x" } else { " " };
    format!(
        "[{mark}] {}  {}",
        task.id(),
        task.title_for_list().unwrap_or("")
    )
}
