use crate::error::{ErrorCode, TasklyError};
use crate::store::{self, task_repo};

pub fn run(id: u64) -> i32 {
    match run_delete(id) {
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

fn run_delete(id: u64) -> Result<i32, TasklyError> {
    let store = store::open_store()?;
    task_repo::delete_task(&store, id)?;
    println!("Task deleted successfully");
    Ok(0)
}
