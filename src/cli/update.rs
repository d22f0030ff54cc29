use crate::error::{ErrorCode, TasklyError};
use crate::store::{self, task_repo};

pub fn run(id: u64, description: &str) -> i32 {
    match run_update(id, description) {
        Ok(code) => code,
        Err(e) if e.code == ErrorCode::TaskNotFound => {
            println!("Task not found.");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e.message);
            1
        }
    }
}

fn run_update(id: u64, description: &str) -> Result<i32, TasklyError> {
    let store = store::open_store()?;
    task_repo::update_description(&store, id, description)?;
    println!("Task updated successfully");
    Ok(0)
}
