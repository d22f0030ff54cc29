use crate::error::TasklyError;
use crate::store::{self, task_repo};

pub fn run(description: &str) -> i32 {
    match run_add(description) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            1
        }
    }
}

fn run_add(description: &str) -> Result<i32, TasklyError> {
    let store = store::open_store()?;
    let task = task_repo::add_task(&store, description)?;
    println!("Task added succesfully (ID: {})", task.id);
    Ok(0)
}
