use crate::error::TasklyError;
use crate::models::Status;
use crate::output;
use crate::store::{self, task_repo};

pub fn run(filter: Option<Status>) -> i32 {
    match run_list(filter) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            1
        }
    }
}

fn run_list(filter: Option<Status>) -> Result<i32, TasklyError> {
    let store = store::open_store()?;
    let tasks = task_repo::list_tasks(&store, filter)?;
    output::text::print_task_list(&tasks);
    Ok(0)
}
