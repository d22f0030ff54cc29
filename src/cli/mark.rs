use crate::error::{ErrorCode, TasklyError};
use crate::models::Status;
use crate::store::{self, task_repo};

pub fn run(id: u64, status: Status) -> i32 {
    match run_mark(id, status) {
        Ok(code) => code,
        Err(e) if e.code == ErrorCode::TaskNotFound => {
            println!("Task not found");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e.message);
            1
        }
    }
}

fn run_mark(id: u64, status: Status) -> Result<i32, TasklyError> {
    let store = store::open_store()?;
    let task = task_repo::mark_status(&store, id, status)?;
    println!("Task marked as {}.", task.status.as_str());
    Ok(0)
}
